//! Session-verification adapter backed by the browser `fetch` API.

use platform_host::{SessionError, SessionFuture, SessionIdentity, SessionService};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Browser session service issuing one credentialed `GET` against the role endpoint.
pub struct WebSessionService {
    endpoint: String,
}

impl WebSessionService {
    /// Creates a service targeting `endpoint` (for example `/api/auth/verify`).
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    /// Returns the configured endpoint path.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl SessionService for WebSessionService {
    fn verify_session<'a>(&'a self) -> SessionFuture<'a, Result<SessionIdentity, SessionError>> {
        Box::pin(async move { imp::fetch_identity(&self.endpoint).await })
    }
}

#[cfg(target_arch = "wasm32")]
mod imp {
    use platform_host::{SessionError, SessionIdentity};
    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{Request, RequestCredentials, RequestInit, Response};

    pub(super) async fn fetch_identity(endpoint: &str) -> Result<SessionIdentity, SessionError> {
        let window = web_sys::window().ok_or(SessionError::Unavailable)?;

        let init = RequestInit::new();
        init.set_method("GET");
        init.set_credentials(RequestCredentials::Include);
        let request = Request::new_with_str_and_init(endpoint, &init)
            .map_err(|err| SessionError::Network(js_error_to_string(err)))?;

        let response = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(|err| SessionError::Network(js_error_to_string(err)))?;
        let response: Response = response
            .dyn_into()
            .map_err(|err| SessionError::Network(js_error_to_string(err)))?;
        if !response.ok() {
            return Err(SessionError::Status(response.status()));
        }

        let body = response
            .json()
            .map_err(|err| SessionError::Decode(js_error_to_string(err)))?;
        let value = JsFuture::from(body)
            .await
            .map_err(|err| SessionError::Decode(js_error_to_string(err)))?;
        serde_wasm_bindgen::from_value(value).map_err(|err| SessionError::Decode(err.to_string()))
    }

    fn js_error_to_string(err: JsValue) -> String {
        if let Some(text) = err.as_string() {
            return text;
        }
        if let Ok(message) = js_sys::Reflect::get(&err, &JsValue::from_str("message")) {
            if let Some(text) = message.as_string() {
                return text;
            }
        }
        format!("{err:?}")
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod imp {
    use platform_host::{SessionError, SessionIdentity};

    pub(super) async fn fetch_identity(_endpoint: &str) -> Result<SessionIdentity, SessionError> {
        Err(SessionError::Unavailable)
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;

    #[test]
    fn native_builds_report_the_session_service_unavailable() {
        let service = WebSessionService::new("/api/auth/verify");
        assert_eq!(service.endpoint(), "/api/auth/verify");
        assert_eq!(
            block_on(service.verify_session()),
            Err(SessionError::Unavailable)
        );
    }
}
