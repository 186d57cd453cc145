use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AiChatRole {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiChatMessage {
    pub role: AiChatRole,
    pub content: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiChatRequest {
    pub message: String,
    #[serde(default)]
    pub history: Vec<AiChatMessage>,
}

impl AiChatRequest {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            history: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiChatResponse {
    pub response: String,
    #[serde(default)]
    pub suggestions: Vec<String>,
}

/// One message between a patient and a doctor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientChatMessageDto {
    pub id: String,
    pub patient_id: Option<String>,
    pub doctor_user_id: Option<String>,
    /// PATIENT or DOCTOR
    pub sender_type: Option<String>,
    pub content: String,
    pub sent_at: Option<String>,
    pub is_read: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientChatConversationDto {
    pub patient_id: String,
    pub patient_name: Option<String>,
    pub last_message: Option<String>,
    pub last_message_at: Option<String>,
    #[serde(default)]
    pub unread_count: u32,
}

/// A doctor the patient can message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatDoctorDto {
    pub id: String,
    pub full_name_vi: Option<String>,
    pub specialty: Option<String>,
    pub avatar_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendChatMessageRequest {
    pub doctor_user_id: String,
    pub content: String,
}
