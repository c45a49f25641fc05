use super::*;

pub(super) const API_KEY_HEADER: &str = "X-API-Key";

impl RemoteClient {
    pub(super) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub(super) fn send(
        &self,
        req: reqwest::blocking::RequestBuilder,
        api_key: &str,
        label: &str,
    ) -> ApiResult<reqwest::blocking::Response> {
        if api_key.is_empty() {
            return Err(ApiError::MissingCredential);
        }
        let resp = req
            .header(API_KEY_HEADER, api_key)
            .send()
            .map_err(ApiError::Transport)?;
        tracing::debug!(status = resp.status().as_u16(), "{}", label);
        self.ensure_ok(resp, label)
    }

    pub(super) fn ensure_ok(
        &self,
        resp: reqwest::blocking::Response,
        label: &str,
    ) -> ApiResult<reqwest::blocking::Response> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        // An unreadable body is treated like one without a message.
        let bytes = resp.bytes().unwrap_or_default();
        let message = error_body_message(&bytes);
        tracing::warn!(
            status = status.as_u16(),
            message = message.as_deref().unwrap_or(""),
            "{} failed",
            label
        );
        Err(ApiError::Status {
            status: status.as_u16(),
            message,
        })
    }

    pub(super) fn read_json<T: serde::de::DeserializeOwned>(
        &self,
        resp: reqwest::blocking::Response,
    ) -> ApiResult<T> {
        let bytes = resp.bytes().map_err(ApiError::Transport)?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}
