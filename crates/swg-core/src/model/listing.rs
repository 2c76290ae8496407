use super::declaration::{ApiDeclaration, DEFAULT_API_VERSION};
use crate::error::ModelError;
use crate::version::SchemaVersion;

/// Top-level metadata of a resource listing. Written for 1.2 and later.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Info {
    pub title: Option<String>,
    pub description: Option<String>,
    pub terms_of_service_url: Option<String>,
    pub contact: Option<String>,
    pub license: Option<String>,
    pub license_url: Option<String>,
}

/// An entry of the listing pointing at one declaration.
#[derive(Debug, Clone)]
pub struct ResourceListingApi {
    pub path: String,
    pub description: Option<String>,
    pub declaration: ApiDeclaration,
}

/// The index document enumerating every declaration of a service.
#[derive(Debug, Clone)]
pub struct ResourceListing {
    pub schema_version: SchemaVersion,
    pub api_version: String,
    pub base_path: Option<String>,
    pub info: Info,
    apis: Vec<ResourceListingApi>,
}

impl Default for ResourceListing {
    fn default() -> Self {
        Self {
            schema_version: SchemaVersion::default(),
            api_version: DEFAULT_API_VERSION.to_string(),
            base_path: None,
            info: Info::default(),
            apis: Vec::new(),
        }
    }
}

impl ResourceListing {
    pub fn new(api_version: impl Into<String>, schema_version: SchemaVersion) -> Self {
        Self {
            schema_version,
            api_version: api_version.into(),
            ..Self::default()
        }
    }

    /// Register `declaration` under `path`. Paths name output files, so they must be unique.
    pub fn add_api(
        &mut self,
        path: impl Into<String>,
        description: Option<String>,
        declaration: ApiDeclaration,
    ) -> Result<&mut ResourceListingApi, ModelError> {
        let path = path.into();
        if self.get_api(&path).is_some() {
            return Err(ModelError::DuplicatePath(path));
        }
        self.apis.push(ResourceListingApi {
            path,
            description,
            declaration,
        });
        let last = self.apis.len() - 1;
        Ok(&mut self.apis[last])
    }

    pub fn get_api(&self, path: &str) -> Option<&ResourceListingApi> {
        self.apis.iter().find(|a| a.path == path)
    }

    pub fn remove_api(&mut self, path: &str) -> Option<ResourceListingApi> {
        let idx = self.apis.iter().position(|a| a.path == path)?;
        Some(self.apis.remove(idx))
    }

    pub fn apis(&self) -> &[ResourceListingApi] {
        &self.apis
    }
}
