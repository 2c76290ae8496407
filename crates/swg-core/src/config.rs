use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::version::SchemaVersion;
use crate::writer::SwaggerFormat;

/// Project configuration loaded from `.swg.yaml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SwgConfig {
    /// Authoring manifest to read.
    pub input: String,
    /// Directory the documents are written to.
    pub output: String,
    pub format: SwaggerFormat,
    /// Overrides the version declared in the manifest.
    pub schema_version: Option<SchemaVersion>,
}

impl Default for SwgConfig {
    fn default() -> Self {
        Self {
            input: "swagger.yaml".to_string(),
            output: "api-docs".to_string(),
            format: SwaggerFormat::Json,
            schema_version: None,
        }
    }
}

/// Default config file name.
pub const CONFIG_FILE_NAME: &str = ".swg.yaml";

/// Load config from a YAML file. Returns `None` if the file doesn't exist.
pub fn load_config(path: &Path) -> Result<Option<SwgConfig>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.display().to_string(),
        source,
    })?;
    let config: SwgConfig = serde_yaml_ng::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.display().to_string(),
        source,
    })?;
    Ok(Some(config))
}

/// Generate the default config file content.
pub fn default_config_content() -> &'static str {
    r#"# swg configuration
input: swagger.yaml     # authoring manifest
output: api-docs        # directory for api-docs.<ext> and the declarations
format: json            # json | yaml | xml
# schema_version: "1.1" # override the manifest's swaggerVersion ("1.1" | "1.2")
"#
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SwgConfig::default();
        assert_eq!(config.input, "swagger.yaml");
        assert_eq!(config.output, "api-docs");
        assert_eq!(config.format, SwaggerFormat::Json);
        assert!(config.schema_version.is_none());
    }

    #[test]
    fn test_parse_config_yaml() {
        let yaml = r#"
input: petstore.yaml
output: out
format: xml
schema_version: "1.1"
"#;
        let config: SwgConfig = serde_yaml_ng::from_str(yaml).unwrap();
        assert_eq!(config.input, "petstore.yaml");
        assert_eq!(config.output, "out");
        assert_eq!(config.format, SwaggerFormat::Xml);
        assert_eq!(config.schema_version, Some(SchemaVersion::V1_1));
    }

    #[test]
    fn test_parse_minimal_config() {
        let yaml = "input: api.yaml\n";
        let config: SwgConfig = serde_yaml_ng::from_str(yaml).unwrap();
        assert_eq!(config.input, "api.yaml");
        // Defaults applied
        assert_eq!(config.output, "api-docs");
        assert_eq!(config.format, SwaggerFormat::Json);
    }

    #[test]
    fn test_default_content_parses() {
        let config: SwgConfig = serde_yaml_ng::from_str(default_config_content()).unwrap();
        assert_eq!(config.input, "swagger.yaml");
    }

    #[test]
    fn test_missing_file_is_none() {
        let tmp = tempfile::tempdir().unwrap();
        assert!(load_config(&tmp.path().join(CONFIG_FILE_NAME)).unwrap().is_none());
    }

    #[test]
    fn test_invalid_file_is_parse_error() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "format: toml\n").unwrap();
        assert!(matches!(load_config(&path), Err(ConfigError::Parse { .. })));
    }
}
