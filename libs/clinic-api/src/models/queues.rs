use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueueDefinitionDto {
    pub id: String,
    pub branch_id: String,
    pub code: String,
    pub name_vi: String,
    pub acuity_filter: Option<String>,
    pub display_order: Option<i32>,
    pub is_active: Option<bool>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueueEntryDto {
    pub id: String,
    pub tenant_id: String,
    pub branch_id: String,
    pub queue_definition_id: String,
    pub patient_id: String,
    pub patient_name: Option<String>,
    pub triage_session_id: Option<String>,
    pub appointment_id: Option<String>,
    pub position: Option<i32>,
    pub status: String,
    /// Acuity inherited from the triage session (1 to 5)
    pub acuity_level: Option<String>,
    pub joined_at: String,
    pub called_at: Option<String>,
    pub completed_at: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateQueueEntryRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub called_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<i32>,
}

/// Parameters for putting a patient into a queue; sent as query parameters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewQueueEntry {
    pub queue_definition_id: String,
    pub patient_id: String,
    pub position: i32,
    pub medical_service_id: Option<String>,
    pub notes: Option<String>,
    pub triage_session_id: Option<String>,
    pub appointment_id: Option<String>,
}

/// Waiting-room board for one branch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicQueueDto {
    pub branch_name: Option<String>,
    #[serde(default)]
    pub called_entries: Vec<QueueEntryDto>,
    #[serde(default)]
    pub waiting_entries: Vec<QueueEntryDto>,
}

/// Walk-in self registration at a kiosk
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KioskRegistrationRequest {
    pub branch_id: String,
    pub queue_definition_id: String,
    pub full_name_vi: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cccd: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chief_complaint: Option<String>,
}
