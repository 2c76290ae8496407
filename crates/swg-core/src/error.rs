use thiserror::Error;

/// Misuse of the description model.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("api already exists at path [{0}]")]
    DuplicatePath(String),

    #[error("no api at path [{0}]")]
    UnknownApi(String),

    #[error("listing paths [{first}] and [{second}] both resolve to resource [{name}]")]
    DuplicateResource {
        name: String,
        first: String,
        second: String,
    },
}

/// A schema version, format or config file that cannot be used.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unsupported swagger version: {0}")]
    UnsupportedVersion(String),

    #[error("unsupported document format: {0}")]
    UnsupportedFormat(String),

    #[error("failed to read config {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: String,
        source: serde_yaml_ng::Error,
    },
}

/// Failure while encoding a document or writing it to its sink.
#[derive(Debug, Error)]
pub enum WriteError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to encode YAML: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    #[error(transparent)]
    Model(#[from] ModelError),
}

/// Failure while turning an authoring manifest into the model.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("model error: {0}")]
    Model(#[from] ModelError),
}
