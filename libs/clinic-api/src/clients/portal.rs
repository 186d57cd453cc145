use bytes::Bytes;
use chrono::NaiveDate;
use clinic_http::Multipart;
use serde::Serialize;
use std::path::PathBuf;

use super::short_id;
use crate::error::ApiError;
use crate::models::{
    AiChatRequest, AiChatResponse, AppointmentDto, ChangePasswordRequest, ChatDoctorDto,
    ConsultationDetailDto, ConsultationDto, CreateAppointmentRequest, InvoiceDto,
    MedicationDosageLogDto, MedicationReminderDto, PatientChatMessageDto, PatientDashboardDto,
    PatientDto, PatientInsuranceDto, PatientNotificationDto, PatientPortalStatusDto,
    PatientRelativeDto, PatientVitalLogDto, PaymentUrlDto, QueueEntryDto,
    RegisterDeviceTokenRequest, SendChatMessageRequest, SlotAvailabilityDto, TenantBranchDto,
    UpdatePatientProfileRequest,
};
use crate::query::{QueryParams, segment};
use crate::tenant::TenantHeaders;
use crate::transport::{ApiClient, RequestDescriptor};

/// Patient self-service
#[derive(Debug, Clone, Copy)]
pub struct PortalClient<'a> {
    api: &'a ApiClient,
}

impl ApiClient {
    #[must_use]
    pub fn portal(&self) -> PortalClient<'_> {
        PortalClient { api: self }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ReminderToggle {
    is_active: bool,
}

impl PortalClient<'_> {
    // Profile

    /// # Errors
    /// Any transport error.
    pub async fn profile(&self, tenant: Option<&TenantHeaders>) -> Result<PatientDto, ApiError> {
        self.api.get("/portal/profile", tenant).await
    }

    /// # Errors
    /// Any transport error.
    pub async fn update_profile(
        &self,
        request: &UpdatePatientProfileRequest,
        tenant: Option<&TenantHeaders>,
    ) -> Result<PatientDto, ApiError> {
        self.api.put("/portal/profile", request, tenant).await
    }

    /// # Errors
    /// Any transport error; the server rejects a wrong old password.
    pub async fn change_password(
        &self,
        request: &ChangePasswordRequest,
        tenant: Option<&TenantHeaders>,
    ) -> Result<(), ApiError> {
        let req = RequestDescriptor::post("/portal/profile/change-password")
            .json(request)?
            .tenant(tenant);
        self.api.ack(req).await
    }

    /// Upload a new avatar image as the `file` part of a multipart form
    ///
    /// # Errors
    /// Any transport error.
    pub async fn upload_avatar(
        &self,
        filename: &str,
        content_type: &str,
        data: Bytes,
        tenant: Option<&TenantHeaders>,
    ) -> Result<PatientDto, ApiError> {
        let form = Multipart::new().file("file", filename, content_type, data);
        self.api
            .post_multipart("/portal/profile/avatar", form, tenant)
            .await
    }

    /// # Errors
    /// Any transport error.
    pub async fn family(
        &self,
        tenant: Option<&TenantHeaders>,
    ) -> Result<Vec<PatientRelativeDto>, ApiError> {
        self.api.get("/portal/profile/family", tenant).await
    }

    /// # Errors
    /// Any transport error.
    pub async fn add_relative(
        &self,
        relative: &PatientRelativeDto,
        tenant: Option<&TenantHeaders>,
    ) -> Result<PatientRelativeDto, ApiError> {
        self.api
            .post("/portal/profile/family", relative, tenant)
            .await
    }

    /// # Errors
    /// Any transport error.
    pub async fn update_relative(
        &self,
        id: &str,
        relative: &PatientRelativeDto,
        tenant: Option<&TenantHeaders>,
    ) -> Result<PatientRelativeDto, ApiError> {
        self.api
            .put(
                &format!("/portal/profile/family/{}", segment(id)),
                relative,
                tenant,
            )
            .await
    }

    /// # Errors
    /// Any transport error.
    pub async fn delete_relative(
        &self,
        id: &str,
        tenant: Option<&TenantHeaders>,
    ) -> Result<(), ApiError> {
        let path = format!("/portal/profile/family/{}", segment(id));
        self.api
            .ack(RequestDescriptor::delete(path).tenant(tenant))
            .await
    }

    /// # Errors
    /// Any transport error.
    pub async fn insurance(
        &self,
        tenant: Option<&TenantHeaders>,
    ) -> Result<Vec<PatientInsuranceDto>, ApiError> {
        self.api.get("/portal/profile/insurance", tenant).await
    }

    /// # Errors
    /// Any transport error.
    pub async fn add_insurance(
        &self,
        insurance: &PatientInsuranceDto,
        tenant: Option<&TenantHeaders>,
    ) -> Result<PatientInsuranceDto, ApiError> {
        self.api
            .post("/portal/profile/insurance", insurance, tenant)
            .await
    }

    /// # Errors
    /// Any transport error.
    pub async fn delete_insurance(
        &self,
        id: &str,
        tenant: Option<&TenantHeaders>,
    ) -> Result<(), ApiError> {
        let path = format!("/portal/profile/insurance/{}", segment(id));
        self.api
            .ack(RequestDescriptor::delete(path).tenant(tenant))
            .await
    }

    /// Portal account state of a patient, as seen by staff
    ///
    /// # Errors
    /// Any transport error.
    pub async fn status(
        &self,
        patient_id: &str,
        tenant: Option<&TenantHeaders>,
    ) -> Result<PatientPortalStatusDto, ApiError> {
        self.api
            .get(&format!("/portal/status/{}", segment(patient_id)), tenant)
            .await
    }

    // Clinical record

    /// # Errors
    /// Any transport error.
    pub async fn dashboard(
        &self,
        tenant: Option<&TenantHeaders>,
    ) -> Result<PatientDashboardDto, ApiError> {
        self.api.get("/portal/clinical/dashboard", tenant).await
    }

    /// # Errors
    /// Any transport error.
    pub async fn medical_history(
        &self,
        tenant: Option<&TenantHeaders>,
    ) -> Result<Vec<ConsultationDto>, ApiError> {
        self.api
            .get("/portal/clinical/medical-history", tenant)
            .await
    }

    /// # Errors
    /// Any transport error.
    pub async fn medical_history_detail(
        &self,
        id: &str,
        tenant: Option<&TenantHeaders>,
    ) -> Result<ConsultationDetailDto, ApiError> {
        self.api
            .get(
                &format!("/portal/clinical/medical-history/{}", segment(id)),
                tenant,
            )
            .await
    }

    /// The patient's current queue positions
    ///
    /// # Errors
    /// Any transport error.
    pub async fn queues(
        &self,
        tenant: Option<&TenantHeaders>,
    ) -> Result<Vec<QueueEntryDto>, ApiError> {
        self.api.get("/portal/clinical/queues", tenant).await
    }

    /// # Errors
    /// Any transport error.
    pub async fn log_vital(
        &self,
        vital: &PatientVitalLogDto,
        tenant: Option<&TenantHeaders>,
    ) -> Result<PatientVitalLogDto, ApiError> {
        self.api
            .post("/portal/clinical/vitals", vital, tenant)
            .await
    }

    /// Save a prescription PDF as `Don_thuoc_<id prefix>.pdf`
    ///
    /// # Errors
    /// `ApiError::DownloadFailed` for non-2xx, `ApiError::Io` if it cannot be saved.
    pub async fn download_prescription_pdf(
        &self,
        id: &str,
        tenant: Option<&TenantHeaders>,
    ) -> Result<PathBuf, ApiError> {
        self.api
            .download(
                &format!("/portal/prescriptions/{}/pdf", segment(id)),
                tenant,
                &format!("Don_thuoc_{}.pdf", short_id(id)),
            )
            .await
    }

    /// Save a visit summary PDF as `Tom_tat_kham_benh_<id prefix>.pdf`
    ///
    /// # Errors
    /// `ApiError::DownloadFailed` for non-2xx, `ApiError::Io` if it cannot be saved.
    pub async fn download_consultation_pdf(
        &self,
        id: &str,
        tenant: Option<&TenantHeaders>,
    ) -> Result<PathBuf, ApiError> {
        self.api
            .download(
                &format!("/portal/medical-history/{}/pdf", segment(id)),
                tenant,
                &format!("Tom_tat_kham_benh_{}.pdf", short_id(id)),
            )
            .await
    }

    // Appointments

    /// # Errors
    /// Any transport error.
    pub async fn appointments(
        &self,
        tenant: Option<&TenantHeaders>,
    ) -> Result<Vec<AppointmentDto>, ApiError> {
        self.api.get("/portal/appointments", tenant).await
    }

    /// # Errors
    /// Any transport error.
    pub async fn branches(
        &self,
        tenant: Option<&TenantHeaders>,
    ) -> Result<Vec<TenantBranchDto>, ApiError> {
        self.api.get("/portal/branches", tenant).await
    }

    /// # Errors
    /// Any transport error.
    pub async fn slots(
        &self,
        branch_id: &str,
        date: NaiveDate,
        tenant: Option<&TenantHeaders>,
    ) -> Result<Vec<SlotAvailabilityDto>, ApiError> {
        let path = QueryParams::new()
            .push("branchId", branch_id)
            .push("date", date)
            .append_to("/portal/appointments/slots");
        self.api.get(&path, tenant).await
    }

    /// # Errors
    /// Any transport error; 409 when the slot is already taken.
    pub async fn book_appointment(
        &self,
        request: &CreateAppointmentRequest,
        tenant: Option<&TenantHeaders>,
    ) -> Result<AppointmentDto, ApiError> {
        self.api
            .post("/portal/appointments", request, tenant)
            .await
    }

    // Billing

    /// # Errors
    /// Any transport error.
    pub async fn invoices(
        &self,
        tenant: Option<&TenantHeaders>,
    ) -> Result<Vec<InvoiceDto>, ApiError> {
        self.api.get("/portal/billing/invoices", tenant).await
    }

    /// Pay an invoice; the method is sent as a bare JSON string
    ///
    /// # Errors
    /// Any transport error.
    pub async fn pay_invoice(
        &self,
        id: &str,
        method: &str,
        tenant: Option<&TenantHeaders>,
    ) -> Result<InvoiceDto, ApiError> {
        self.api
            .post(
                &format!("/portal/billing/invoices/{}/pay", segment(id)),
                method,
                tenant,
            )
            .await
    }

    /// Hosted VNPay checkout URL for an invoice
    ///
    /// # Errors
    /// Any transport error.
    pub async fn vnpay_payment_url(
        &self,
        id: &str,
        return_url: &str,
        tenant: Option<&TenantHeaders>,
    ) -> Result<String, ApiError> {
        let path = QueryParams::new()
            .push("returnUrl", return_url)
            .append_to(&format!(
                "/portal/billing/invoices/{}/vnpay-url",
                segment(id)
            ));
        let response: PaymentUrlDto = self.api.get(&path, tenant).await?;
        Ok(response.payment_url)
    }

    // Notifications

    /// Register a push notification token for this device
    ///
    /// # Errors
    /// Any transport error.
    pub async fn register_device_token(
        &self,
        token: &str,
        device_type: &str,
        tenant: Option<&TenantHeaders>,
    ) -> Result<(), ApiError> {
        let body = RegisterDeviceTokenRequest {
            token: token.to_owned(),
            device_type: device_type.to_owned(),
        };
        let req = RequestDescriptor::post("/portal/notifications/register-token")
            .json(&body)?
            .tenant(tenant);
        self.api.ack(req).await
    }

    /// # Errors
    /// Any transport error.
    pub async fn notifications(
        &self,
        tenant: Option<&TenantHeaders>,
    ) -> Result<Vec<PatientNotificationDto>, ApiError> {
        self.api.get("/portal/notifications", tenant).await
    }

    /// # Errors
    /// Any transport error.
    pub async fn mark_notification_read(
        &self,
        id: &str,
        tenant: Option<&TenantHeaders>,
    ) -> Result<(), ApiError> {
        let req = RequestDescriptor::post(format!("/portal/notifications/{}/read", segment(id)))
            .json(&serde_json::json!({}))?
            .tenant(tenant);
        self.api.ack(req).await
    }

    /// # Errors
    /// Any transport error.
    pub async fn mark_all_notifications_read(
        &self,
        tenant: Option<&TenantHeaders>,
    ) -> Result<(), ApiError> {
        let req = RequestDescriptor::post("/portal/notifications/read-all")
            .json(&serde_json::json!({}))?
            .tenant(tenant);
        self.api.ack(req).await
    }

    // AI assistant

    /// # Errors
    /// Any transport error.
    pub async fn ai_chat(
        &self,
        request: &AiChatRequest,
        tenant: Option<&TenantHeaders>,
    ) -> Result<AiChatResponse, ApiError> {
        self.api
            .post("/portal/ai/assistant", request, tenant)
            .await
    }

    /// Pre-triage from free-text symptoms, sent as a bare JSON string
    ///
    /// # Errors
    /// Any transport error.
    pub async fn ai_pre_triage(
        &self,
        symptoms: &str,
        tenant: Option<&TenantHeaders>,
    ) -> Result<serde_json::Value, ApiError> {
        self.api
            .post("/portal/ai/pre-triage", symptoms, tenant)
            .await
    }

    /// # Errors
    /// Any transport error.
    pub async fn ai_health_summary(
        &self,
        tenant: Option<&TenantHeaders>,
    ) -> Result<serde_json::Value, ApiError> {
        self.api.get("/portal/ai/health-summary", tenant).await
    }

    /// Populate demo medical data for the signed-in patient
    ///
    /// # Errors
    /// Any transport error.
    pub async fn seed_medical_data(&self, tenant: Option<&TenantHeaders>) -> Result<(), ApiError> {
        let req = RequestDescriptor::post("/portal/ai/seed-medical-data")
            .json(&serde_json::json!({}))?
            .tenant(tenant);
        self.api.ack(req).await
    }

    // Chat with doctors

    /// # Errors
    /// Any transport error.
    pub async fn chat_doctors(
        &self,
        tenant: Option<&TenantHeaders>,
    ) -> Result<Vec<ChatDoctorDto>, ApiError> {
        self.api.get("/portal/chat/doctors", tenant).await
    }

    /// # Errors
    /// Any transport error.
    pub async fn chat_history(
        &self,
        doctor_id: &str,
        tenant: Option<&TenantHeaders>,
    ) -> Result<Vec<PatientChatMessageDto>, ApiError> {
        self.api
            .get(
                &format!("/portal/chat/history/{}", segment(doctor_id)),
                tenant,
            )
            .await
    }

    /// # Errors
    /// Any transport error.
    pub async fn send_chat_message(
        &self,
        doctor_id: &str,
        content: &str,
        tenant: Option<&TenantHeaders>,
    ) -> Result<PatientChatMessageDto, ApiError> {
        let body = SendChatMessageRequest {
            doctor_user_id: doctor_id.to_owned(),
            content: content.to_owned(),
        };
        self.api.post("/portal/chat/send", &body, tenant).await
    }

    // Medication reminders

    /// # Errors
    /// Any transport error.
    pub async fn medication_reminders(
        &self,
        tenant: Option<&TenantHeaders>,
    ) -> Result<Vec<MedicationReminderDto>, ApiError> {
        self.api.get("/portal/medication-reminders", tenant).await
    }

    /// # Errors
    /// Any transport error.
    pub async fn create_medication_reminder(
        &self,
        reminder: &MedicationReminderDto,
        tenant: Option<&TenantHeaders>,
    ) -> Result<MedicationReminderDto, ApiError> {
        self.api
            .post("/portal/medication-reminders", reminder, tenant)
            .await
    }

    /// # Errors
    /// Any transport error.
    pub async fn toggle_medication_reminder(
        &self,
        id: &str,
        active: bool,
        tenant: Option<&TenantHeaders>,
    ) -> Result<MedicationReminderDto, ApiError> {
        self.api
            .put(
                &format!("/portal/medication-reminders/{}", segment(id)),
                &ReminderToggle { is_active: active },
                tenant,
            )
            .await
    }

    /// # Errors
    /// Any transport error.
    pub async fn delete_medication_reminder(
        &self,
        id: &str,
        tenant: Option<&TenantHeaders>,
    ) -> Result<(), ApiError> {
        let path = format!("/portal/medication-reminders/{}", segment(id));
        self.api
            .ack(RequestDescriptor::delete(path).tenant(tenant))
            .await
    }

    /// # Errors
    /// Any transport error.
    pub async fn log_medication_taken(
        &self,
        entry: &MedicationDosageLogDto,
        tenant: Option<&TenantHeaders>,
    ) -> Result<MedicationDosageLogDto, ApiError> {
        self.api
            .post("/portal/medication-reminders/log", entry, tenant)
            .await
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::clients::test_support::client_for;
    use crate::config::ApiClientConfig;
    use crate::credentials::MemoryCredentialStore;
    use httpmock::prelude::*;
    use serde_json::json;
    use std::sync::Arc;

    fn tenant() -> TenantHeaders {
        TenantHeaders::new("T1").with_branch("B1")
    }

    fn patient_json() -> serde_json::Value {
        json!({
            "id": "p1",
            "tenantId": "T1",
            "fullNameVi": "Tran Thi B",
            "dateOfBirth": "1990-05-01",
            "avatarUrl": "https://cdn.example.com/p1.png"
        })
    }

    #[tokio::test]
    async fn test_avatar_upload_is_multipart() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/api/portal/profile/avatar")
                .header_exists("content-type")
                .body_includes("Content-Disposition: form-data; name=\"file\"; filename=\"me.png\"")
                .body_includes("Content-Type: image/png");
            then.status(200).json_body(patient_json());
        });

        let patient = client_for(&server)
            .portal()
            .upload_avatar(
                "me.png",
                "image/png",
                Bytes::from_static(b"PNGDATA"),
                Some(&tenant()),
            )
            .await
            .unwrap();
        mock.assert();
        assert_eq!(
            patient.avatar_url.as_deref(),
            Some("https://cdn.example.com/p1.png")
        );
    }

    #[tokio::test]
    async fn test_pay_invoice_sends_bare_string() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/api/portal/billing/invoices/inv-1/pay")
                .header("content-type", "application/json")
                .body("\"VNPAY\"");
            then.status(200).json_body(json!({"id": "inv-1", "status": "PAID"}));
        });

        let invoice = client_for(&server)
            .portal()
            .pay_invoice("inv-1", "VNPAY", Some(&tenant()))
            .await
            .unwrap();
        mock.assert();
        assert_eq!(invoice.status, "PAID");
    }

    #[tokio::test]
    async fn test_vnpay_url_unwrapped() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/api/portal/billing/invoices/inv-1/vnpay-url")
                .query_param("returnUrl", "https://portal.example.com/pay?ok=1");
            then.status(200)
                .json_body(json!({"paymentUrl": "https://sandbox.vnpay.vn/x"}));
        });

        let url = client_for(&server)
            .portal()
            .vnpay_payment_url("inv-1", "https://portal.example.com/pay?ok=1", None)
            .await
            .unwrap();
        mock.assert();
        assert_eq!(url, "https://sandbox.vnpay.vn/x");
    }

    #[tokio::test]
    async fn test_slots_query() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/api/portal/appointments/slots")
                .query_param("branchId", "B1")
                .query_param("date", "2024-03-15");
            then.status(200).json_body(json!([
                {"startTime": "08:00", "endTime": "08:30", "available": true},
                {"startTime": "08:30", "endTime": "09:00", "available": false}
            ]));
        });

        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let slots = client_for(&server)
            .portal()
            .slots("B1", date, Some(&tenant()))
            .await
            .unwrap();
        mock.assert();
        assert_eq!(slots.iter().filter(|s| s.available).count(), 1);
    }

    #[tokio::test]
    async fn test_notification_read_no_content() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/api/portal/notifications/n1/read")
                .body("{}");
            then.status(204);
        });

        client_for(&server)
            .portal()
            .mark_notification_read("n1", Some(&tenant()))
            .await
            .unwrap();
        mock.assert();
    }

    #[tokio::test]
    async fn test_toggle_reminder_body() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(PUT)
                .path("/api/portal/medication-reminders/r1")
                .json_body(json!({"isActive": false}));
            then.status(200).json_body(json!({
                "id": "r1", "medicineName": "Metformin", "reminderTime": "08:00:00", "isActive": false
            }));
        });

        let reminder = client_for(&server)
            .portal()
            .toggle_medication_reminder("r1", false, None)
            .await
            .unwrap();
        mock.assert();
        assert_eq!(reminder.is_active, Some(false));
    }

    #[tokio::test]
    async fn test_prescription_pdf_file_name() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/api/portal/prescriptions/0123456789abcdef/pdf")
                .header("x-tenant-id", "T1");
            then.status(200).body("%PDF");
        });
        let dir = tempfile::tempdir().unwrap();
        let config = ApiClientConfig {
            download_dir: Some(dir.path().to_path_buf()),
            ..ApiClientConfig::with_base_url(server.url("/api"))
        };
        let api =
            ApiClient::with_credentials(&config, Arc::new(MemoryCredentialStore::new())).unwrap();

        let saved = api
            .portal()
            .download_prescription_pdf("0123456789abcdef", Some(&tenant()))
            .await
            .unwrap();
        mock.assert();
        assert_eq!(saved, dir.path().join("Don_thuoc_01234567.pdf"));
    }

    #[tokio::test]
    async fn test_consultation_pdf_failure() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/portal/medical-history/c1/pdf");
            then.status(500).json_body(json!({"message": "Renderer crashed"}));
        });

        let err = client_for(&server)
            .portal()
            .download_consultation_pdf("c1", None)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Download failed");
    }
}
