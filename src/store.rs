use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result, anyhow};

use crate::model::{ClientConfig, ClientState};

pub const DEFAULT_DIR_NAME: &str = ".template-admin";
pub const LOG_FILE_NAME: &str = "template-admin.log";

/// Where the API key lives between runs.
pub trait CredentialStore {
    fn load_api_key(&self) -> Result<Option<String>>;
    fn save_api_key(&self, api_key: &str) -> Result<()>;
}

#[derive(Clone, Debug)]
pub struct LocalStore {
    root: PathBuf,
}

impl LocalStore {
    /// `$HOME/.template-admin`, or `./.template-admin` when no home is set.
    pub fn default_dir() -> Result<PathBuf> {
        match std::env::var_os("HOME") {
            Some(home) if !home.is_empty() => Ok(PathBuf::from(home).join(DEFAULT_DIR_NAME)),
            _ => Ok(std::env::current_dir()
                .context("get current dir")?
                .join(DEFAULT_DIR_NAME)),
        }
    }

    /// Opens (creating if needed) the config directory.
    pub fn open(root: &Path) -> Result<Self> {
        if root.exists() && !root.is_dir() {
            return Err(anyhow!("{} exists but is not a directory", root.display()));
        }
        fs::create_dir_all(root)
            .with_context(|| format!("create config dir {}", root.display()))?;
        Ok(Self {
            root: root.to_path_buf(),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn log_path(&self) -> PathBuf {
        self.root.join(LOG_FILE_NAME)
    }

    pub fn read_config(&self) -> Result<ClientConfig> {
        let path = self.root.join("config.json");
        if !path.exists() {
            return Ok(ClientConfig::default());
        }
        let bytes = fs::read(&path).context("read config.json")?;
        let cfg: ClientConfig = serde_json::from_slice(&bytes).context("parse config.json")?;
        if cfg.version != 1 {
            anyhow::bail!("unsupported config version {}", cfg.version);
        }
        Ok(cfg)
    }

    pub fn write_config(&self, cfg: &ClientConfig) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(cfg).context("serialize config")?;
        write_atomic(&self.root.join("config.json"), &bytes).context("write config.json")?;
        Ok(())
    }

    pub fn set_base_url(&self, base_url: &str) -> Result<()> {
        let url = base_url.trim().trim_end_matches('/');
        if url.is_empty() {
            anyhow::bail!("base url cannot be empty");
        }
        let mut cfg = self.read_config()?;
        cfg.base_url = Some(url.to_string());
        self.write_config(&cfg)
    }

    pub fn read_state(&self) -> Result<ClientState> {
        let path = self.root.join("state.json");
        if !path.exists() {
            return Ok(ClientState::default());
        }
        let bytes = fs::read(&path).context("read state.json")?;
        let st: ClientState = serde_json::from_slice(&bytes).context("parse state.json")?;
        if st.version != 1 {
            anyhow::bail!("unsupported state version {}", st.version);
        }
        Ok(st)
    }

    pub fn write_state(&self, st: &ClientState) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(st).context("serialize state")?;
        write_atomic(&self.root.join("state.json"), &bytes).context("write state.json")?;
        Ok(())
    }
}

impl CredentialStore for LocalStore {
    fn load_api_key(&self) -> Result<Option<String>> {
        Ok(self.read_state()?.api_key)
    }

    fn save_api_key(&self, api_key: &str) -> Result<()> {
        let mut st = self.read_state()?;
        st.api_key = Some(api_key.to_string());
        self.write_state(&st)
    }
}

/// Keeps the key in memory only; used when nothing should touch disk.
#[derive(Debug, Default)]
pub struct MemoryCredentials {
    api_key: Mutex<Option<String>>,
}

impl MemoryCredentials {
    pub fn new(initial: Option<&str>) -> Self {
        Self {
            api_key: Mutex::new(initial.map(str::to_string)),
        }
    }
}

impl CredentialStore for MemoryCredentials {
    fn load_api_key(&self) -> Result<Option<String>> {
        let guard = self
            .api_key
            .lock()
            .map_err(|_| anyhow!("credential lock poisoned"))?;
        Ok(guard.clone())
    }

    fn save_api_key(&self, api_key: &str) -> Result<()> {
        let mut guard = self
            .api_key
            .lock()
            .map_err(|_| anyhow!("credential lock poisoned"))?;
        *guard = Some(api_key.to_string());
        Ok(())
    }
}

fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("create parent directories")?;
    }
    let tmp = path.with_extension(format!("tmp.{}", std::process::id()));
    fs::write(&tmp, bytes).with_context(|| format!("write temp file {}", tmp.display()))?;
    fs::rename(&tmp, path)
        .with_context(|| format!("rename {} -> {}", tmp.display(), path.display()))?;
    Ok(())
}

#[cfg(test)]
#[path = "tests/store_tests.rs"]
mod tests;
