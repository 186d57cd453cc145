use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PharmacyProductDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub code: String,
    pub name_vi: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generic_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PharmacyInventoryDto {
    pub id: String,
    pub branch_id: String,
    pub product: PharmacyProductDto,
    pub current_stock: f64,
    pub min_stock_level: Option<f64>,
    pub last_restock_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryTransactionDto {
    pub id: String,
    pub branch_id: String,
    pub product: Option<PharmacyProductDto>,
    /// RESTOCK, DISPENSE or ADJUSTMENT
    #[serde(rename = "type")]
    pub transaction_type: String,
    pub quantity: f64,
    pub reference_id: Option<String>,
    pub performed_by_user_id: Option<String>,
    pub performed_by_user_name: Option<String>,
    pub notes: Option<String>,
    pub created_at: Option<String>,
}

/// Stock replenishment; sent as query parameters
#[derive(Debug, Clone, PartialEq)]
pub struct RestockRequest {
    pub branch_id: String,
    pub product_id: String,
    pub quantity: f64,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrescriptionItemDto {
    pub id: Option<String>,
    pub product_id: Option<String>,
    pub product_name: Option<String>,
    pub quantity: f64,
    pub dosage_instruction: Option<String>,
    pub unit_price: Option<f64>,
    pub available_stock: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrescriptionDto {
    pub id: String,
    pub consultation_id: Option<String>,
    pub patient_id: Option<String>,
    pub patient_name: Option<String>,
    pub status: String,
    pub notes: Option<String>,
    pub invoice_status: Option<String>,
    #[serde(default)]
    pub items: Vec<PrescriptionItemDto>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePrescriptionItem {
    pub product_id: String,
    pub quantity: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dosage_instruction: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePrescriptionRequest {
    pub consultation_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub items: Vec<CreatePrescriptionItem>,
}
