use crate::error::HttpError;
use http::header::USER_AGENT;
use http::{HeaderMap, HeaderValue, Request};
use std::task::{Context, Poll};
use tower::{Layer, Service};

/// Fills in client-wide headers the request does not already carry.
///
/// Used for `User-Agent`; per-request values always win.
#[derive(Clone, Debug, Default)]
pub struct DefaultHeadersLayer {
    defaults: HeaderMap,
}

impl DefaultHeadersLayer {
    /// Layer that only supplies `User-Agent`
    ///
    /// # Errors
    /// `HttpError::InvalidHeaderValue` if `user_agent` is not a valid header value.
    pub fn user_agent(user_agent: &str) -> Result<Self, HttpError> {
        let mut defaults = HeaderMap::new();
        defaults.insert(USER_AGENT, HeaderValue::try_from(user_agent)?);
        Ok(Self { defaults })
    }

    #[must_use]
    pub fn with(mut self, name: http::HeaderName, value: HeaderValue) -> Self {
        self.defaults.insert(name, value);
        self
    }
}

impl<S> Layer<S> for DefaultHeadersLayer {
    type Service = DefaultHeaders<S>;

    fn layer(&self, inner: S) -> Self::Service {
        DefaultHeaders {
            inner,
            defaults: self.defaults.clone(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct DefaultHeaders<S> {
    inner: S,
    defaults: HeaderMap,
}

impl<S, B> Service<Request<B>> for DefaultHeaders<S>
where
    S: Service<Request<B>>,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: Request<B>) -> Self::Future {
        let headers = req.headers_mut();
        for (name, value) in &self.defaults {
            if !headers.contains_key(name) {
                headers.insert(name.clone(), value.clone());
            }
        }
        self.inner.call(req)
    }
}
