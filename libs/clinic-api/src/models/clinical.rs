use serde::{Deserialize, Serialize};

use super::billing::InvoiceDto;
use super::chat::PatientChatMessageDto;
use super::pharmacy::PrescriptionDto;
use super::scheduling::AppointmentDto;
use super::triage::TriageVitalDto;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsultationDto {
    pub id: String,
    pub tenant_id: Option<String>,
    pub branch_id: Option<String>,
    pub patient_id: Option<String>,
    pub patient_name: Option<String>,
    pub doctor_user_id: Option<String>,
    pub doctor_name: Option<String>,
    pub queue_entry_id: Option<String>,
    pub room_or_station: Option<String>,
    pub started_at: Option<String>,
    pub ended_at: Option<String>,
    pub status: String,
    pub chief_complaint_summary: Option<String>,
    pub diagnosis_notes: Option<String>,
    pub prescription_notes: Option<String>,
    pub ai_insights: Option<String>,
}

/// A past visit with everything produced during it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsultationDetailDto {
    pub consultation: ConsultationDto,
    pub prescription: Option<PrescriptionDto>,
    pub invoice: Option<InvoiceDto>,
    #[serde(default)]
    pub vitals: Vec<TriageVitalDto>,
}

/// Starts a consultation; also the body of a partial update
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateConsultationRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub queue_entry_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room_or_station: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diagnosis_notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prescription_notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabResultDto {
    pub test_name: String,
    pub value: Option<String>,
    pub unit: Option<String>,
    pub reference_range: Option<String>,
    /// NORMAL, HIGH or LOW
    pub status: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosticImageDto {
    pub title: String,
    pub image_url: Option<String>,
    pub description: Option<String>,
    pub recorded_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DoctorDashboardDto {
    #[serde(default)]
    pub total_patients_today: u64,
    #[serde(default)]
    pub pending_consultations: u64,
    #[serde(default)]
    pub completed_consultations_today: u64,
    #[serde(default)]
    pub upcoming_appointments: Vec<AppointmentDto>,
    #[serde(default)]
    pub unread_messages: Vec<PatientChatMessageDto>,
}
