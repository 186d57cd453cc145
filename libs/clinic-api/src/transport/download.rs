//! Binary endpoints: PDFs, Excel exports, report documents.

use bytes::Bytes;
use serde::Serialize;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use super::{ApiClient, RequestDescriptor};
use crate::error::ApiError;
use crate::tenant::TenantHeaders;

impl ApiClient {
    /// Fetch `req` as raw bytes.
    ///
    /// Uses the same header policy as JSON calls. Any non-2xx answer becomes
    /// `ApiError::DownloadFailed`; the error body is not inspected.
    ///
    /// # Errors
    /// `ApiError::DownloadFailed` for non-2xx, `ApiError::Transport` otherwise.
    pub async fn fetch_bytes(&self, req: RequestDescriptor) -> Result<Bytes, ApiError> {
        let path = req.path.clone();
        let response = self.execute(req).await?;
        let status = response.status();
        if !status.is_success() {
            tracing::debug!(path = %path, status = status.as_u16(), "download rejected");
            return Err(ApiError::DownloadFailed { status });
        }
        Ok(response.bytes().await?)
    }

    /// GET a document as bytes
    ///
    /// # Errors
    /// See [`ApiClient::fetch_bytes`].
    pub async fn download_bytes(
        &self,
        path: &str,
        tenant: Option<&TenantHeaders>,
    ) -> Result<Bytes, ApiError> {
        self.fetch_bytes(RequestDescriptor::get(path).tenant(tenant))
            .await
    }

    /// POST a JSON body and receive a document as bytes
    ///
    /// # Errors
    /// See [`ApiClient::fetch_bytes`]; `ApiError::Serialize` for an
    /// unrepresentable body.
    pub async fn post_download<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
        tenant: Option<&TenantHeaders>,
    ) -> Result<Bytes, ApiError> {
        self.fetch_bytes(RequestDescriptor::post(path).json(body)?.tenant(tenant))
            .await
    }

    /// GET a document and save it as `filename` in the download directory.
    ///
    /// Only the last component of `filename` is used. Returns the saved path.
    ///
    /// # Errors
    /// See [`ApiClient::fetch_bytes`]; `ApiError::Io` if the file cannot be written.
    pub async fn download(
        &self,
        path: &str,
        tenant: Option<&TenantHeaders>,
        filename: &str,
    ) -> Result<PathBuf, ApiError> {
        let bytes = self.download_bytes(path, tenant).await?;
        self.save_download(filename, &bytes).await
    }

    /// Write `bytes` into the download directory under `filename`.
    ///
    /// # Errors
    /// `ApiError::Io` if the name is unusable or the file cannot be written.
    pub async fn save_download(&self, filename: &str, bytes: &[u8]) -> Result<PathBuf, ApiError> {
        let name = Path::new(filename).file_name().ok_or_else(|| ApiError::Io {
            path: PathBuf::from(filename),
            source: std::io::Error::new(std::io::ErrorKind::InvalidInput, "empty file name"),
        })?;
        let target = self.download_dir.join(name);
        let io_err = |path: &Path| {
            let path = path.to_path_buf();
            move |source: std::io::Error| ApiError::Io { path, source }
        };

        tokio::fs::create_dir_all(&self.download_dir)
            .await
            .map_err(io_err(&self.download_dir))?;

        let mut partial: OsString = target.clone().into_os_string();
        partial.push(".part");
        let partial = PathBuf::from(partial);

        tokio::fs::write(&partial, bytes)
            .await
            .map_err(io_err(&partial))?;
        if let Err(source) = tokio::fs::rename(&partial, &target).await {
            if let Err(e) = tokio::fs::remove_file(&partial).await {
                tracing::debug!(path = %partial.display(), error = %e, "failed to remove partial download");
            }
            return Err(ApiError::Io {
                path: target,
                source,
            });
        }

        tracing::info!(path = %target.display(), size = bytes.len(), "document saved");
        Ok(target)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use crate::config::ApiClientConfig;
    use crate::credentials::MemoryCredentialStore;
    use crate::error::ApiError;
    use crate::tenant::TenantHeaders;
    use crate::transport::ApiClient;
    use clinic_http::StatusCode;
    use httpmock::prelude::*;
    use serde_json::json;
    use std::sync::Arc;

    fn client_for(server: &MockServer, dir: &std::path::Path) -> ApiClient {
        let config = ApiClientConfig {
            download_dir: Some(dir.to_path_buf()),
            ..ApiClientConfig::with_base_url(server.url("/api"))
        };
        ApiClient::with_credentials(&config, Arc::new(MemoryCredentialStore::with_token("tok")))
            .unwrap()
    }

    #[tokio::test]
    async fn test_download_saves_named_file() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/api/portal/consultations/abc/pdf")
                .header("authorization", "Bearer tok")
                .header("x-tenant-id", "T1");
            then.status(200)
                .header("content-type", "application/pdf")
                .body("%PDF-1.7 body");
        });
        let dir = tempfile::tempdir().unwrap();
        let api = client_for(&server, dir.path());

        let tenant = TenantHeaders::new("T1");
        let saved = api
            .download(
                "/portal/consultations/abc/pdf",
                Some(&tenant),
                "Tom_tat_kham_benh_abc.pdf",
            )
            .await
            .unwrap();

        mock.assert();
        assert_eq!(saved, dir.path().join("Tom_tat_kham_benh_abc.pdf"));
        assert_eq!(std::fs::read(&saved).unwrap(), b"%PDF-1.7 body");
    }

    #[tokio::test]
    async fn test_download_failure_ignores_error_body() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/admin/reports/revenue/export");
            then.status(403).json_body(json!({"message": "Access denied"}));
        });
        let dir = tempfile::tempdir().unwrap();
        let api = client_for(&server, dir.path());

        let err = api
            .download("/admin/reports/revenue/export", None, "revenue.xlsx")
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Download failed");
        assert_eq!(err.status(), Some(StatusCode::FORBIDDEN));
        assert!(!dir.path().join("revenue.xlsx").exists());
    }

    #[tokio::test]
    async fn test_post_download_sends_json_string() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/api/clinical/consultations/c1/cdm-report")
                .body("\"\"");
            then.status(200).body("PDF");
        });
        let dir = tempfile::tempdir().unwrap();
        let api = client_for(&server, dir.path());

        let bytes = api
            .post_download("/clinical/consultations/c1/cdm-report", "", None)
            .await
            .unwrap();
        mock.assert();
        assert_eq!(&bytes[..], b"PDF");
    }

    #[tokio::test]
    async fn test_save_strips_directories_from_name() {
        let server = MockServer::start();
        let dir = tempfile::tempdir().unwrap();
        let api = client_for(&server, dir.path());

        let saved = api
            .save_download("../../etc/report.pdf", b"x")
            .await
            .unwrap();
        assert_eq!(saved, dir.path().join("report.pdf"));

        let err = api.save_download("..", b"x").await.unwrap_err();
        assert!(matches!(err, ApiError::Io { .. }));
    }
}
