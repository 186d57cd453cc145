use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceItemDto {
    pub id: Option<String>,
    pub item_name: String,
    pub quantity: f64,
    pub unit_price: f64,
    pub line_total: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceDto {
    pub id: String,
    pub invoice_number: Option<String>,
    pub branch_id: Option<String>,
    pub patient_id: Option<String>,
    pub patient_name: Option<String>,
    pub consultation_id: Option<String>,
    pub status: String,
    pub total_amount: Option<f64>,
    pub discount_amount: Option<f64>,
    pub final_amount: Option<f64>,
    pub payment_method: Option<String>,
    pub paid_at: Option<String>,
    pub created_at: Option<String>,
    #[serde(default)]
    pub items: Vec<InvoiceItemDto>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateInvoiceItem {
    pub item_name: String,
    pub quantity: f64,
    pub unit_price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateInvoiceRequest {
    pub branch_id: String,
    pub patient_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consultation_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub items: Vec<CreateInvoiceItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenueByDayDto {
    pub date: String,
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenueReportDto {
    pub branch_id: Option<String>,
    pub from_date: Option<String>,
    pub to_date: Option<String>,
    pub total_revenue: Option<f64>,
    pub invoice_count: Option<u64>,
    #[serde(default)]
    pub daily_breakdown: Vec<RevenueByDayDto>,
}

/// Hosted payment page for one invoice
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentUrlDto {
    pub payment_url: String,
}
