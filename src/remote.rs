use std::time::Duration;

use anyhow::{Context, Result};

use crate::model::{Template, TemplateDraft, TemplateId};

mod http_client;
mod templates;

mod types;
pub use self::types::*;

/// The template service as seen by the panel. `RemoteClient` talks HTTP;
/// tests substitute recording fakes.
pub trait TemplateApi {
    fn list_templates(&self, api_key: &str) -> ApiResult<Vec<Template>>;
    fn get_template(&self, api_key: &str, id: TemplateId) -> ApiResult<Template>;
    fn create_template(&self, api_key: &str, draft: &TemplateDraft) -> ApiResult<()>;
    fn update_template(
        &self,
        api_key: &str,
        id: TemplateId,
        draft: &TemplateDraft,
    ) -> ApiResult<()>;
    fn delete_template(&self, api_key: &str, id: TemplateId) -> ApiResult<()>;
}

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub struct RemoteClient {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl RemoteClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("template-admin/", env!("CARGO_PKG_VERSION")))
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("build reqwest client")?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
