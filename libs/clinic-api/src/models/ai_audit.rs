use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiTriageAuditDto {
    pub id: String,
    pub triage_session_id: String,
    pub suggested_acuity: Option<String>,
    pub actual_acuity: String,
    #[serde(default)]
    pub matched: bool,
    pub called_at: String,
    pub latency_ms: Option<u64>,
    pub patient_id: String,
    pub branch_id: String,
}
