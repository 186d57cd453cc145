use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TriageSessionDto {
    pub id: String,
    pub tenant_id: String,
    pub branch_id: String,
    pub patient_id: String,
    pub appointment_id: Option<String>,
    pub triaged_by_user_id: Option<String>,
    pub started_at: String,
    pub ended_at: Option<String>,
    /// Acuity 1 (most urgent) to 5
    pub acuity_level: String,
    pub acuity_source: Option<String>,
    pub ai_suggested_acuity: Option<String>,
    pub ai_confidence_score: Option<f64>,
    pub chief_complaint_text: Option<String>,
    pub notes: Option<String>,
    pub override_reason: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TriageSuggestionDto {
    pub suggested_acuity: String,
    pub confidence: f64,
    pub latency_ms: u64,
    pub provider_key: String,
    #[serde(default)]
    pub explanation: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestedVital {
    pub vital_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_numeric: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestAcuityRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chief_complaint_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age_in_years: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patient_id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub vitals: Vec<SuggestedVital>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub complaint_types: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplaintItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub complaint_type: Option<String>,
    pub complaint_text: String,
    pub display_order: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VitalItem {
    pub vital_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_numeric: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    pub recorded_at: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTriageSessionRequest {
    pub branch_id: String,
    pub patient_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub appointment_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub triaged_by_user_id: Option<String>,
    pub started_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acuity_level: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acuity_source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_suggested_acuity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_confidence_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chief_complaint_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub override_reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_ai_suggestion: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub complaints: Vec<ComplaintItem>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub vitals: Vec<VitalItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TriageComplaintDto {
    pub id: String,
    pub complaint_type: Option<String>,
    pub complaint_text: String,
    pub display_order: Option<u32>,
}

/// A vital sign measured during triage or a consultation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TriageVitalDto {
    pub id: String,
    pub vital_type: String,
    pub value_numeric: Option<f64>,
    pub unit: Option<String>,
    pub recorded_at: Option<String>,
}
