use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WaitTimeSummaryDto {
    pub branch_id: String,
    pub branch_name: Option<String>,
    pub from_date: Option<String>,
    pub to_date: Option<String>,
    pub average_wait_minutes: Option<f64>,
    #[serde(default)]
    pub total_completed_entries: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyVolumeDto {
    pub date: String,
    pub branch_id: String,
    pub branch_name: Option<String>,
    #[serde(default)]
    pub triage_count: u64,
    #[serde(default)]
    pub completed_queue_entries: u64,
}

/// How often the AI acuity suggestion matched the final decision
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiEffectivenessDto {
    pub branch_id: Option<String>,
    pub from_date: Option<String>,
    pub to_date: Option<String>,
    #[serde(default)]
    pub total_suggestions: u64,
    #[serde(default)]
    pub matched_count: u64,
    pub match_rate: Option<f64>,
    pub average_latency_ms: Option<f64>,
}

/// Narrative operational analysis; nested sections are passed through untyped
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiOperationalInsightDto {
    pub executive_summary: Option<String>,
    #[serde(default)]
    pub metrics: Vec<serde_json::Value>,
    #[serde(default)]
    pub recommendations: Vec<serde_json::Value>,
    #[serde(default)]
    pub forecasts: Vec<serde_json::Value>,
    #[serde(default)]
    pub leakage_alerts: Vec<serde_json::Value>,
    pub risk_assessment: Option<String>,
}
