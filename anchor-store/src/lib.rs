pub mod app_config;
pub mod blob;
pub mod events;
pub mod overrides;

pub use blob::{BlobStore, FileBlobStore, MemoryBlobStore, StoreError};
pub use events::ConfigUpdate;
pub use overrides::{OverrideStore, CONFIG_KEY, LEGACY_EDITOR_KEY};
