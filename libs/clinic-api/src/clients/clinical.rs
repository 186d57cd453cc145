use bytes::Bytes;
use std::path::PathBuf;

use crate::error::ApiError;
use crate::models::{
    AiChatRequest, ApiEnvelope, ConsultationDto, CreateConsultationRequest,
    CreatePrescriptionItem, CreatePrescriptionRequest, DiagnosticImageDto, DoctorDashboardDto,
    LabResultDto, MedicationReminderDto, PrescriptionDto, QueueEntryDto, TriageVitalDto,
};
use crate::query::{QueryParams, segment};
use crate::tenant::TenantHeaders;
use crate::transport::{ApiClient, RequestDescriptor};

/// Consultations and the doctor portal, AI clinical support included.
///
/// AI payloads whose shape the backend does not pin down are returned as
/// [`serde_json::Value`].
#[derive(Debug, Clone, Copy)]
pub struct ClinicalClient<'a> {
    api: &'a ApiClient,
}

impl ApiClient {
    #[must_use]
    pub fn clinical(&self) -> ClinicalClient<'_> {
        ClinicalClient { api: self }
    }
}

fn ai_support_path(consultation_id: &str, action: &str) -> String {
    format!(
        "/doctor-portal/ai-support/{}/{action}",
        segment(consultation_id)
    )
}

fn doctor_consultation_path(consultation_id: &str, action: &str) -> String {
    format!(
        "/doctor-portal/consultations/{}/{action}",
        segment(consultation_id)
    )
}

impl ClinicalClient<'_> {
    /// # Errors
    /// Any transport error.
    pub async fn consultation(
        &self,
        id: &str,
        tenant: Option<&TenantHeaders>,
    ) -> Result<ConsultationDto, ApiError> {
        self.api
            .get(&format!("/clinical/consultations/{}", segment(id)), tenant)
            .await
    }

    /// All consultations of one patient
    ///
    /// # Errors
    /// Any transport error.
    pub async fn patient_history(
        &self,
        patient_id: &str,
        tenant: Option<&TenantHeaders>,
    ) -> Result<Vec<ConsultationDto>, ApiError> {
        let path = QueryParams::new()
            .push("patientId", patient_id)
            .append_to("/clinical/consultations/history");
        self.api.get(&path, tenant).await
    }

    /// # Errors
    /// Any transport error.
    pub async fn start_consultation(
        &self,
        request: &CreateConsultationRequest,
        tenant: Option<&TenantHeaders>,
    ) -> Result<ConsultationDto, ApiError> {
        self.api
            .post("/clinical/consultations", request, tenant)
            .await
    }

    /// # Errors
    /// Any transport error.
    pub async fn update_consultation(
        &self,
        id: &str,
        request: &CreateConsultationRequest,
        tenant: Option<&TenantHeaders>,
    ) -> Result<ConsultationDto, ApiError> {
        self.api
            .patch(
                &format!("/clinical/consultations/{}", segment(id)),
                request,
                tenant,
            )
            .await
    }

    /// # Errors
    /// Any transport error.
    pub async fn complete_consultation(
        &self,
        id: &str,
        tenant: Option<&TenantHeaders>,
    ) -> Result<ConsultationDto, ApiError> {
        self.api
            .post_empty(
                &format!("/clinical/consultations/{}/complete", segment(id)),
                tenant,
            )
            .await
    }

    /// # Errors
    /// Any transport error.
    pub async fn vitals(
        &self,
        consultation_id: &str,
        tenant: Option<&TenantHeaders>,
    ) -> Result<Vec<TriageVitalDto>, ApiError> {
        self.api
            .get(
                &format!("/clinical/consultations/{}/vitals", segment(consultation_id)),
                tenant,
            )
            .await
    }

    /// # Errors
    /// Any transport error.
    pub async fn create_prescription(
        &self,
        request: &CreatePrescriptionRequest,
        tenant: Option<&TenantHeaders>,
    ) -> Result<PrescriptionDto, ApiError> {
        self.api.post("/prescriptions", request, tenant).await
    }

    // Doctor portal

    /// # Errors
    /// Any transport error.
    pub async fn doctor_dashboard(
        &self,
        tenant: Option<&TenantHeaders>,
    ) -> Result<DoctorDashboardDto, ApiError> {
        self.api.get("/doctor-portal/dashboard", tenant).await
    }

    /// # Errors
    /// Any transport error.
    pub async fn active_queue(
        &self,
        tenant: Option<&TenantHeaders>,
    ) -> Result<Vec<QueueEntryDto>, ApiError> {
        self.api
            .get("/doctor-portal/dashboard/active-queue", tenant)
            .await
    }

    /// # Errors
    /// Any transport error.
    pub async fn cds_advice(
        &self,
        id: &str,
        tenant: Option<&TenantHeaders>,
    ) -> Result<serde_json::Value, ApiError> {
        self.api
            .get(&doctor_consultation_path(id, "cds-advice"), tenant)
            .await
    }

    /// # Errors
    /// Any transport error.
    pub async fn early_warning(
        &self,
        id: &str,
        tenant: Option<&TenantHeaders>,
    ) -> Result<serde_json::Value, ApiError> {
        self.api
            .get(&doctor_consultation_path(id, "early-warning"), tenant)
            .await
    }

    /// # Errors
    /// Any transport error.
    pub async fn lab_results(
        &self,
        id: &str,
        tenant: Option<&TenantHeaders>,
    ) -> Result<Vec<LabResultDto>, ApiError> {
        self.api
            .get(&doctor_consultation_path(id, "lab-results"), tenant)
            .await
    }

    /// # Errors
    /// Any transport error.
    pub async fn diagnostic_images(
        &self,
        id: &str,
        tenant: Option<&TenantHeaders>,
    ) -> Result<Vec<DiagnosticImageDto>, ApiError> {
        self.api
            .get(&doctor_consultation_path(id, "diagnostic-images"), tenant)
            .await
    }

    /// Order an imaging study; the title is sent as a bare JSON string
    ///
    /// # Errors
    /// Any transport error.
    pub async fn order_diagnostic_image(
        &self,
        id: &str,
        title: &str,
        tenant: Option<&TenantHeaders>,
    ) -> Result<(), ApiError> {
        let req = RequestDescriptor::post(doctor_consultation_path(id, "diagnostic-images/order"))
            .json(title)?
            .tenant(tenant);
        self.api.ack(req).await
    }

    /// Save the consultation summary as `consultation_summary_<id>.pdf`
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
                &doctor_consultation_path(id, "pdf"),
                tenant,
                &format!("consultation_summary_{id}.pdf"),
            )
            .await
    }

    // AI clinical support

    /// # Errors
    /// Any transport error.
    pub async fn ai_clinical_support(
        &self,
        id: &str,
        tenant: Option<&TenantHeaders>,
    ) -> Result<String, ApiError> {
        let req = RequestDescriptor::post(ai_support_path(id, "ai-clinical-support"))
            .json(&serde_json::json!({}))?
            .tenant(tenant);
        self.api.api_text(req).await
    }

    /// # Errors
    /// Any transport error.
    pub async fn suggested_templates(
        &self,
        id: &str,
        tenant: Option<&TenantHeaders>,
    ) -> Result<String, ApiError> {
        let req = RequestDescriptor::get(ai_support_path(id, "suggested-templates")).tenant(tenant);
        self.api.api_text(req).await
    }

    /// One-shot question about a consultation; no history is carried
    ///
    /// # Errors
    /// Any transport error.
    pub async fn ai_chat(
        &self,
        id: &str,
        message: &str,
        tenant: Option<&TenantHeaders>,
    ) -> Result<String, ApiError> {
        let req = RequestDescriptor::post(ai_support_path(id, "ai-chat"))
            .json(&AiChatRequest::new(message))?
            .tenant(tenant);
        self.api.api_text(req).await
    }

    /// # Errors
    /// Any transport error.
    pub async fn verify_prescription(
        &self,
        id: &str,
        items: &[CreatePrescriptionItem],
        tenant: Option<&TenantHeaders>,
    ) -> Result<String, ApiError> {
        let req = RequestDescriptor::post(ai_support_path(id, "verify-prescription"))
            .json(items)?
            .tenant(tenant);
        self.api.api_text(req).await
    }

    /// # Errors
    /// Any transport error.
    pub async fn care_plan(
        &self,
        id: &str,
        tenant: Option<&TenantHeaders>,
    ) -> Result<String, ApiError> {
        let req = RequestDescriptor::get(ai_support_path(id, "care-plan")).tenant(tenant);
        self.api.api_text(req).await
    }

    /// Render the chronic disease management report as a PDF.
    ///
    /// The care plan travels as a bare JSON string; `None` sends `""`.
    ///
    /// # Errors
    /// `ApiError::DownloadFailed` for non-2xx.
    pub async fn cdm_report(
        &self,
        id: &str,
        care_plan: Option<&str>,
        tenant: Option<&TenantHeaders>,
    ) -> Result<Bytes, ApiError> {
        self.api
            .post_download(
                &ai_support_path(id, "cdm-report"),
                care_plan.unwrap_or_default(),
                tenant,
            )
            .await
    }

    /// Send the chronic disease management report to the patient.
    ///
    /// Returns the `data` field of the server's answer.
    ///
    /// # Errors
    /// Any transport error; the server's `message` on rejection.
    pub async fn send_cdm_report(
        &self,
        id: &str,
        care_plan: Option<&str>,
        tenant: Option<&TenantHeaders>,
    ) -> Result<Option<String>, ApiError> {
        let envelope: ApiEnvelope<String> = self
            .api
            .post(
                &ai_support_path(id, "cdm-report/send"),
                care_plan.unwrap_or_default(),
                tenant,
            )
            .await?;
        Ok(envelope.data)
    }

    /// # Errors
    /// Any transport error.
    pub async fn follow_up_suggestion(
        &self,
        id: &str,
        tenant: Option<&TenantHeaders>,
    ) -> Result<serde_json::Value, ApiError> {
        self.api
            .get(&ai_support_path(id, "follow-up-suggestion"), tenant)
            .await
    }

    /// # Errors
    /// Any transport error.
    pub async fn treatment_efficacy(
        &self,
        id: &str,
        tenant: Option<&TenantHeaders>,
    ) -> Result<serde_json::Value, ApiError> {
        self.api
            .get(&ai_support_path(id, "treatment-efficacy"), tenant)
            .await
    }

    /// # Errors
    /// Any transport error.
    pub async fn complication_risk(
        &self,
        id: &str,
        tenant: Option<&TenantHeaders>,
    ) -> Result<serde_json::Value, ApiError> {
        self.api
            .get(&ai_support_path(id, "complication-risk"), tenant)
            .await
    }

    /// # Errors
    /// Any transport error.
    pub async fn standardized_note(
        &self,
        id: &str,
        tenant: Option<&TenantHeaders>,
    ) -> Result<serde_json::Value, ApiError> {
        self.api
            .get(&ai_support_path(id, "standardized-note"), tenant)
            .await
    }

    /// Push a medication reminder to the patient now
    ///
    /// # Errors
    /// Any transport error.
    pub async fn trigger_medication_reminder(
        &self,
        reminder_id: &str,
        tenant: Option<&TenantHeaders>,
    ) -> Result<String, ApiError> {
        let path = format!(
            "/doctor-portal/ai-support/reminders/{}/trigger",
            segment(reminder_id)
        );
        let req = RequestDescriptor::post(path)
            .json(&serde_json::json!({}))?
            .tenant(tenant);
        self.api.api_text(req).await
    }

    // Chronic disease tracking

    /// # Errors
    /// Any transport error.
    pub async fn chronic_conditions(
        &self,
        patient_id: &str,
        tenant: Option<&TenantHeaders>,
    ) -> Result<Vec<serde_json::Value>, ApiError> {
        self.patient_scoped("/staff/chronic/conditions", patient_id, tenant)
            .await
    }

    /// # Errors
    /// Any transport error.
    pub async fn vital_targets(
        &self,
        patient_id: &str,
        tenant: Option<&TenantHeaders>,
    ) -> Result<Vec<serde_json::Value>, ApiError> {
        self.patient_scoped("/staff/chronic/targets", patient_id, tenant)
            .await
    }

    /// # Errors
    /// Any transport error.
    pub async fn vital_history(
        &self,
        patient_id: &str,
        tenant: Option<&TenantHeaders>,
    ) -> Result<Vec<serde_json::Value>, ApiError> {
        self.patient_scoped("/staff/chronic/vitals", patient_id, tenant)
            .await
    }

    /// # Errors
    /// Any transport error.
    pub async fn medication_reminders(
        &self,
        patient_id: &str,
        tenant: Option<&TenantHeaders>,
    ) -> Result<Vec<MedicationReminderDto>, ApiError> {
        self.patient_scoped("/patient/medication-reminders", patient_id, tenant)
            .await
    }

    async fn patient_scoped<T: serde::de::DeserializeOwned>(
        &self,
        base: &str,
        patient_id: &str,
        tenant: Option<&TenantHeaders>,
    ) -> Result<T, ApiError> {
        let path = QueryParams::new()
            .push("patientId", patient_id)
            .append_to(base);
        self.api.get(&path, tenant).await
    }
}
