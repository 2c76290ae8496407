pub mod field_map;

pub use field_map::{FieldMap, FieldNames};

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// A Swagger 1.x schema version. Ordered oldest first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SchemaVersion {
    #[serde(rename = "1.1")]
    V1_1,
    #[default]
    #[serde(rename = "1.2")]
    V1_2,
}

impl SchemaVersion {
    /// The legacy version, which lacks media types, response models and the info block.
    pub const LEGACY: SchemaVersion = SchemaVersion::V1_1;

    pub const ALL: [SchemaVersion; 2] = [SchemaVersion::V1_1, SchemaVersion::V1_2];

    /// Value written under the `swaggerVersion` marker.
    pub fn identifier(&self) -> &'static str {
        match self {
            SchemaVersion::V1_1 => "1.1",
            SchemaVersion::V1_2 => "1.2",
        }
    }

    pub fn is_legacy(&self) -> bool {
        *self == Self::LEGACY
    }

    pub fn field_map(&self) -> &'static FieldMap {
        FieldMap::for_version(*self)
    }
}

impl fmt::Display for SchemaVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

impl FromStr for SchemaVersion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SchemaVersion::ALL
            .into_iter()
            .find(|v| v.identifier() == s.trim())
            .ok_or_else(|| ConfigError::UnsupportedVersion(s.to_string()))
    }
}
