use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentDto {
    pub id: String,
    pub tenant_id: Option<String>,
    pub branch_id: Option<String>,
    pub branch_name: Option<String>,
    pub patient_id: Option<String>,
    pub patient_name: Option<String>,
    pub appointment_date: String,
    pub slot_start_time: Option<String>,
    pub slot_end_time: Option<String>,
    pub status: String,
    pub appointment_type: Option<String>,
    pub notes: Option<String>,
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAppointmentRequest {
    pub branch_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patient_id: Option<String>,
    pub appointment_date: String,
    pub slot_start_time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slot_end_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub appointment_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Bookable time window on a given day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotAvailabilityDto {
    pub start_time: String,
    pub end_time: String,
    pub available: bool,
}

/// Branch-wide slot template
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotTemplateDto {
    pub id: String,
    pub code: String,
    pub start_time: String,
    pub duration_minutes: Option<u32>,
}
