use crate::error::ApiError;
use crate::models::{PatientChatConversationDto, PatientChatMessageDto};
use crate::query::segment;
use crate::tenant::TenantHeaders;
use crate::transport::ApiClient;

/// The doctor's side of patient messaging
#[derive(Debug, Clone, Copy)]
pub struct DoctorChatClient<'a> {
    api: &'a ApiClient,
}

impl ApiClient {
    #[must_use]
    pub fn doctor_chat(&self) -> DoctorChatClient<'_> {
        DoctorChatClient { api: self }
    }
}

impl DoctorChatClient<'_> {
    /// # Errors
    /// Any transport error.
    pub async fn conversations(
        &self,
        tenant: Option<&TenantHeaders>,
    ) -> Result<Vec<PatientChatConversationDto>, ApiError> {
        self.api
            .get("/doctor-portal/chat/conversations", tenant)
            .await
    }

    /// # Errors
    /// Any transport error.
    pub async fn history(
        &self,
        patient_id: &str,
        tenant: Option<&TenantHeaders>,
    ) -> Result<Vec<PatientChatMessageDto>, ApiError> {
        self.api
            .get(
                &format!("/doctor-portal/chat/history/{}", segment(patient_id)),
                tenant,
            )
            .await
    }

    /// Reply to a patient; the message text is the whole JSON body
    ///
    /// # Errors
    /// Any transport error.
    pub async fn send(
        &self,
        patient_id: &str,
        content: &str,
        tenant: Option<&TenantHeaders>,
    ) -> Result<PatientChatMessageDto, ApiError> {
        self.api
            .post(
                &format!("/doctor-portal/chat/send/{}", segment(patient_id)),
                content,
                tenant,
            )
            .await
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::clients::test_support::client_for;
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_send_posts_bare_string() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/api/doctor-portal/chat/send/p1")
                .header("content-type", "application/json")
                .body("\"Take the medicine after meals\"");
            then.status(200).json_body(json!({
                "id": "m1",
                "patientId": "p1",
                "senderType": "DOCTOR",
                "content": "Take the medicine after meals"
            }));
        });

        let tenant = TenantHeaders::new("T1");
        let message = client_for(&server)
            .doctor_chat()
            .send("p1", "Take the medicine after meals", Some(&tenant))
            .await
            .unwrap();
        mock.assert();
        assert_eq!(message.sender_type.as_deref(), Some("DOCTOR"));
    }

    #[tokio::test]
    async fn test_conversations_default_unread() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/doctor-portal/chat/conversations");
            then.status(200)
                .json_body(json!([{"patientId": "p1", "patientName": "Nguyen Van A"}]));
        });

        let conversations = client_for(&server)
            .doctor_chat()
            .conversations(None)
            .await
            .unwrap();
        assert_eq!(conversations.len(), 1);
        assert_eq!(conversations[0].unread_count, 0);
    }
}
