//! Asset probing capability.

use async_trait::async_trait;
use std::path::PathBuf;

use crate::error::{PokedexError, Result};

// == Probe Trait ==
/// Loads an asset by relative path and returns the URL it is served under.
///
/// A missing asset is reported as `PokedexError::AssetNotFound`.
#[async_trait]
pub trait AssetProbe: Send + Sync {
    async fn load(&self, path: &str) -> Result<String>;
}

// == Filesystem Probe ==
/// Probe over a directory of static files published under `url_prefix`.
#[derive(Debug, Clone)]
pub struct FsAssetProbe {
    root: PathBuf,
    url_prefix: String,
}

impl FsAssetProbe {
    pub fn new(root: impl Into<PathBuf>, url_prefix: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            url_prefix: url_prefix.into().trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl AssetProbe for FsAssetProbe {
    async fn load(&self, path: &str) -> Result<String> {
        let file = self.root.join(path);
        match tokio::fs::try_exists(&file).await {
            Ok(true) => Ok(format!("{}/{}", self.url_prefix, path)),
            Ok(false) => Err(PokedexError::AssetNotFound(path.to_string())),
            Err(e) => Err(PokedexError::AssetNotFound(format!("{}: {}", path, e))),
        }
    }
}
