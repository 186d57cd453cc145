use crate::error::ApiError;
use crate::models::{
    KioskRegistrationRequest, NewQueueEntry, PublicQueueDto, QueueDefinitionDto, QueueEntryDto,
    UpdateQueueEntryRequest,
};
use crate::query::{QueryParams, segment};
use crate::tenant::TenantHeaders;
use crate::transport::ApiClient;

/// Waiting queues, the public board and kiosk self-registration
#[derive(Debug, Clone, Copy)]
pub struct QueuesClient<'a> {
    api: &'a ApiClient,
}

impl ApiClient {
    #[must_use]
    pub fn queues(&self) -> QueuesClient<'_> {
        QueuesClient { api: self }
    }
}

fn entry_path(id: &str) -> String {
    format!("/queues/entries/{}", segment(id))
}

impl QueuesClient<'_> {
    /// # Errors
    /// Any transport error.
    pub async fn definitions(
        &self,
        branch_id: &str,
        tenant: Option<&TenantHeaders>,
    ) -> Result<Vec<QueueDefinitionDto>, ApiError> {
        let path = QueryParams::new()
            .push("branchId", branch_id)
            .append_to("/queues/definitions");
        self.api.get(&path, tenant).await
    }

    /// # Errors
    /// Any transport error.
    pub async fn entries(
        &self,
        queue_definition_id: &str,
        branch_id: &str,
        tenant: Option<&TenantHeaders>,
    ) -> Result<Vec<QueueEntryDto>, ApiError> {
        let path = QueryParams::new()
            .push("branchId", branch_id)
            .append_to(&format!(
                "/queues/definitions/{}/entries",
                segment(queue_definition_id)
            ));
        self.api.get(&path, tenant).await
    }

    /// # Errors
    /// Any transport error.
    pub async fn entry(
        &self,
        id: &str,
        tenant: Option<&TenantHeaders>,
    ) -> Result<QueueEntryDto, ApiError> {
        self.api.get(&entry_path(id), tenant).await
    }

    /// Put a patient into a queue. Everything travels in the query string.
    ///
    /// # Errors
    /// Any transport error.
    pub async fn add_entry(
        &self,
        entry: &NewQueueEntry,
        tenant: Option<&TenantHeaders>,
    ) -> Result<QueueEntryDto, ApiError> {
        let path = QueryParams::new()
            .push("queueDefinitionId", &entry.queue_definition_id)
            .push("patientId", &entry.patient_id)
            .push("position", entry.position)
            .push_opt("medicalServiceId", entry.medical_service_id.as_deref())
            .push_opt("notes", entry.notes.as_deref())
            .push_opt("triageSessionId", entry.triage_session_id.as_deref())
            .push_opt("appointmentId", entry.appointment_id.as_deref())
            .append_to("/queues/entries");
        self.api.post_empty(&path, tenant).await
    }

    /// # Errors
    /// Any transport error.
    pub async fn update_entry(
        &self,
        id: &str,
        request: &UpdateQueueEntryRequest,
        tenant: Option<&TenantHeaders>,
    ) -> Result<QueueEntryDto, ApiError> {
        self.api.patch(&entry_path(id), request, tenant).await
    }

    /// Call the patient to the consultation room
    ///
    /// # Errors
    /// Any transport error.
    pub async fn call_entry(
        &self,
        id: &str,
        tenant: Option<&TenantHeaders>,
    ) -> Result<QueueEntryDto, ApiError> {
        self.api
            .patch_empty(&format!("{}/call", entry_path(id)), tenant)
            .await
    }

    /// # Errors
    /// Any transport error.
    pub async fn public_status(
        &self,
        branch_id: &str,
        tenant: Option<&TenantHeaders>,
    ) -> Result<PublicQueueDto, ApiError> {
        let path = QueryParams::new()
            .push("branchId", branch_id)
            .append_to("/queues/public-status");
        self.api.get(&path, tenant).await
    }

    /// Queues offered at a kiosk; anonymous
    ///
    /// # Errors
    /// Any transport error.
    pub async fn kiosk_queues(
        &self,
        branch_id: &str,
        tenant: Option<&TenantHeaders>,
    ) -> Result<Vec<QueueDefinitionDto>, ApiError> {
        let path = QueryParams::new()
            .push("branchId", branch_id)
            .append_to("/public/kiosk/queues");
        self.api.get(&path, tenant).await
    }

    /// # Errors
    /// Any transport error.
    pub async fn kiosk_register(
        &self,
        request: &KioskRegistrationRequest,
        tenant: Option<&TenantHeaders>,
    ) -> Result<QueueEntryDto, ApiError> {
        self.api
            .post("/public/kiosk/register", request, tenant)
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

    fn entry_json(status: &str) -> serde_json::Value {
        json!({
            "id": "e1",
            "tenantId": "T1",
            "branchId": "B1",
            "queueDefinitionId": "q1",
            "patientId": "p1",
            "status": status,
            "joinedAt": "2024-03-01T08:00:00Z"
        })
    }

    #[tokio::test]
    async fn test_add_entry_uses_query_params_only() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/api/queues/entries")
                .query_param("queueDefinitionId", "q1")
                .query_param("patientId", "p1")
                .query_param("position", "0")
                .query_param("notes", "wheelchair")
                .query_param_missing("medicalServiceId")
                .query_param_missing("appointmentId")
                .body("");
            then.status(200).json_body(entry_json("WAITING"));
        });

        let entry = NewQueueEntry {
            queue_definition_id: "q1".to_owned(),
            patient_id: "p1".to_owned(),
            notes: Some("wheelchair".to_owned()),
            ..NewQueueEntry::default()
        };
        let tenant = TenantHeaders::new("T1").with_branch("B1");
        let created = client_for(&server)
            .queues()
            .add_entry(&entry, Some(&tenant))
            .await
            .unwrap();
        mock.assert();
        assert_eq!(created.status, "WAITING");
    }

    #[tokio::test]
    async fn test_call_entry_is_bodiless_patch() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(PATCH)
                .path("/api/queues/entries/e1/call")
                .body("");
            then.status(200).json_body(entry_json("CALLED"));
        });

        let called = client_for(&server)
            .queues()
            .call_entry("e1", None)
            .await
            .unwrap();
        mock.assert();
        assert_eq!(called.status, "CALLED");
    }

    #[tokio::test]
    async fn test_entries_for_definition() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/api/queues/definitions/q1/entries")
                .query_param("branchId", "B1");
            then.status(200).json_body(json!([entry_json("WAITING")]));
        });

        let entries = client_for(&server)
            .queues()
            .entries("q1", "B1", None)
            .await
            .unwrap();
        mock.assert();
        assert_eq!(entries.len(), 1);
    }

    #[tokio::test]
    async fn test_public_status_tolerates_missing_lists() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET)
                .path("/api/queues/public-status")
                .query_param("branchId", "B1");
            then.status(200).json_body(json!({"branchName": "Central"}));
        });

        let board = client_for(&server)
            .queues()
            .public_status("B1", None)
            .await
            .unwrap();
        assert!(board.waiting_entries.is_empty());
        assert_eq!(board.branch_name.as_deref(), Some("Central"));
    }
}
