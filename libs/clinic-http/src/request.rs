use crate::client::{BufferedService, map_buffer_error, try_acquire_buffer_slot};
use crate::config::TransportSecurity;
use crate::error::{HttpError, InvalidUriKind};
use crate::multipart::Multipart;
use crate::response::HttpResponse;
use bytes::Bytes;
use http::header::{CONTENT_TYPE, HeaderValue};
use http::{HeaderMap, Request};
use http_body_util::Full;
use serde::Serialize;
use tower::Service;

#[derive(Clone, Debug)]
enum BodyKind {
    Empty,
    /// Serialized JSON
    Json(Bytes),
    /// Encoded form plus its `Content-Type` (carries the boundary)
    Multipart { body: Bytes, content_type: String },
}

/// One outgoing request, created by [`HttpClient::request`](crate::HttpClient::request)
///
/// ```ignore
/// let resp = client
///     .request(Method::POST, "https://clinic.example.com/api/portal/appointments")
///     .headers(headers)
///     .json(&booking)?
///     .send()
///     .await?;
/// ```
#[must_use = "RequestBuilder does nothing until .send() is called"]
pub struct RequestBuilder {
    service: BufferedService,
    max_body_size: usize,
    method: http::Method,
    url: String,
    headers: HeaderMap,
    body: BodyKind,
    transport_security: TransportSecurity,
}

impl RequestBuilder {
    pub(crate) fn new(
        service: BufferedService,
        max_body_size: usize,
        method: http::Method,
        url: String,
        transport_security: TransportSecurity,
    ) -> Self {
        Self {
            service,
            max_body_size,
            method,
            url,
            headers: HeaderMap::new(),
            body: BodyKind::Empty,
            transport_security,
        }
    }

    /// Merge a prepared header map; later names replace earlier ones
    pub fn headers(mut self, headers: HeaderMap) -> Self {
        let mut last_name = None;
        for (name, value) in headers {
            // Repeated values of one name arrive with `name == None`
            if let Some(name) = name {
                self.headers.insert(name.clone(), value);
                last_name = Some(name);
            } else if let Some(name) = &last_name {
                self.headers.append(name.clone(), value);
            }
        }
        self
    }

    /// Serialize `body` as JSON
    ///
    /// `Content-Type: application/json` is added at send time unless the
    /// caller already set one.
    ///
    /// # Errors
    /// Returns `HttpError::Json` if serialization fails.
    pub fn json<T: Serialize + ?Sized>(mut self, body: &T) -> Result<Self, HttpError> {
        self.body = BodyKind::Json(Bytes::from(serde_json::to_vec(body)?));
        Ok(self)
    }

    /// Send a `multipart/form-data` body
    ///
    /// The form's boundary always wins over a caller-supplied `Content-Type`.
    pub fn multipart(mut self, form: Multipart) -> Self {
        let content_type = form.content_type();
        self.body = BodyKind::Multipart {
            body: form.into_bytes(),
            content_type,
        };
        self
    }

    fn validate_url(&self) -> Result<http::Uri, HttpError> {
        let uri: http::Uri =
            self.url
                .parse()
                .map_err(|e: http::uri::InvalidUri| HttpError::InvalidUri {
                    url: self.url.clone(),
                    kind: InvalidUriKind::ParseError,
                    reason: e.to_string(),
                })?;

        if uri.authority().is_none() {
            return Err(HttpError::InvalidUri {
                url: self.url.clone(),
                kind: InvalidUriKind::MissingAuthority,
                reason: "missing host/authority".to_owned(),
            });
        }

        match (uri.scheme_str(), self.transport_security) {
            (Some("https"), _) | (Some("http"), TransportSecurity::AllowInsecureHttp) => Ok(uri),
            (Some("http"), TransportSecurity::TlsOnly) => Err(HttpError::InvalidScheme {
                scheme: "http".to_owned(),
                reason: "HTTPS required (transport security is TlsOnly)".to_owned(),
            }),
            (Some(scheme), _) => Err(HttpError::InvalidScheme {
                scheme: scheme.to_owned(),
                reason: "only http:// and https:// schemes are supported".to_owned(),
            }),
            (None, _) => Err(HttpError::InvalidUri {
                url: self.url.clone(),
                kind: InvalidUriKind::MissingScheme,
                reason: "missing scheme".to_owned(),
            }),
        }
    }

    /// Send the request
    ///
    /// Resolves with the response for every HTTP status; only transport
    /// failures are errors here.
    ///
    /// # Errors
    /// Returns `HttpError` for an invalid URL or scheme, transport/TLS failures, a configured timeout, or a full
    /// request buffer (`Overloaded`).
    pub async fn send(mut self) -> Result<HttpResponse, HttpError> {
        let uri = self.validate_url()?;

        let mut headers = self.headers;
        let body = match self.body {
            BodyKind::Empty => Bytes::new(),
            BodyKind::Json(body) => {
                if !headers.contains_key(CONTENT_TYPE) {
                    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
                }
                body
            }
            BodyKind::Multipart { body, content_type } => {
                headers.insert(CONTENT_TYPE, HeaderValue::try_from(content_type)?);
                body
            }
        };

        let mut request = Request::builder()
            .method(self.method)
            .uri(uri)
            .body(Full::new(body))?;
        *request.headers_mut() = headers;

        try_acquire_buffer_slot(&mut self.service).await?;

        tracing::trace!(
            method = %request.method(),
            uri = %request.uri(),
            "sending request"
        );
        let inner = self.service.call(request).await.map_err(map_buffer_error)?;

        Ok(HttpResponse {
            inner,
            max_body_size: self.max_body_size,
        })
    }
}
