pub mod config;
pub mod emit;
pub mod error;
pub mod manifest;
pub mod model;
pub mod naming;
pub mod store;
pub mod version;
pub mod writer;

pub use emit::{DocumentEmitter, Emitter};
pub use error::{ConfigError, ManifestError, ModelError, WriteError};
pub use store::{FileStore, MemoryStore, SwaggerStore};
pub use version::SchemaVersion;
pub use writer::{SwaggerFormat, SwaggerWriter};
