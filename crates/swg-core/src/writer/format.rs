use std::fmt;
use std::io::Write;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::emit::{DocumentEmitter, JsonEmitter, XmlEmitter, YamlEmitter};
use crate::error::ConfigError;

/// Concrete document syntax.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SwaggerFormat {
    #[default]
    Json,
    Yaml,
    Xml,
}

impl SwaggerFormat {
    pub const ALL: [SwaggerFormat; 3] = [SwaggerFormat::Json, SwaggerFormat::Yaml, SwaggerFormat::Xml];

    /// Canonical file extension, without the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            SwaggerFormat::Json => "json",
            SwaggerFormat::Yaml => "yaml",
            SwaggerFormat::Xml => "xml",
        }
    }

    /// A fresh root emitter for this syntax. `root` names the document element
    /// where the syntax has one.
    pub fn emitter<'w>(&self, sink: impl Write + 'w, root: &str) -> Box<dyn DocumentEmitter + 'w> {
        match self {
            SwaggerFormat::Json => Box::new(JsonEmitter::new(sink)),
            SwaggerFormat::Yaml => Box::new(YamlEmitter::new(sink)),
            SwaggerFormat::Xml => Box::new(XmlEmitter::new(sink, root)),
        }
    }
}

impl fmt::Display for SwaggerFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for SwaggerFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(SwaggerFormat::Json),
            "yaml" | "yml" => Ok(SwaggerFormat::Yaml),
            "xml" => Ok(SwaggerFormat::Xml),
            _ => Err(ConfigError::UnsupportedFormat(s.to_string())),
        }
    }
}
