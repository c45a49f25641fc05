//! The API key for the running client.
//!
//! A `Session` is loaded once at startup from its `CredentialStore`, replaced
//! whenever the user submits a new key, and never expires on its own.

use anyhow::{Context, Result};

use crate::store::CredentialStore;

pub struct Session {
    store: Box<dyn CredentialStore>,
    api_key: Option<String>,
}

impl Session {
    pub fn load(store: Box<dyn CredentialStore>) -> Result<Self> {
        let api_key = store
            .load_api_key()
            .context("load stored api key")?
            .filter(|k| !k.is_empty());
        Ok(Self { store, api_key })
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Persists `api_key` and makes it current. The caller validates it.
    pub fn set_api_key(&mut self, api_key: &str) -> Result<()> {
        self.store
            .save_api_key(api_key)
            .context("persist api key")?;
        self.api_key = Some(api_key.to_string());
        Ok(())
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("api_key", &self.api_key.as_ref().map(|_| "<set>"))
            .finish()
    }
}
