//! Images Module
//!
//! Lazy resolution of entity artwork with a permanent in-memory cache.

mod candidate;
mod probe;
mod resolver;

pub use candidate::{ImageKey, EXTENSIONS, PLACEHOLDER_PATH};
pub use probe::{AssetProbe, FsAssetProbe};
pub use resolver::ImageResolver;
