use serde::{Deserialize, Serialize};

/// Triage volume and AI usage for a day or a week
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSummary {
    pub triage_count: u64,
    pub completed_count: u64,
    pub ai_match_rate: f64,
    pub total_ai_calls: u64,
    pub date: Option<String>,
    pub period_days: Option<u32>,
    pub avg_per_day: Option<f64>,
}
