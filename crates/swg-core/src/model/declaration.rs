use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use indexmap::{IndexMap, IndexSet};

use super::operations::Api;
use crate::error::ModelError;
use crate::version::SchemaVersion;

/// API version used until one is set.
pub const DEFAULT_API_VERSION: &str = "1.0";

/// A model definition referenced by id from operations and parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Model {
    pub id: String,
    pub definition: serde_json::Value,
}

impl Model {
    pub fn new(id: impl Into<String>, definition: serde_json::Value) -> Self {
        Self {
            id: id.into(),
            definition,
        }
    }
}

/// One API declaration: the apis, operations and models under a resource path.
///
/// The api list is guarded by a per-declaration lock, so apis can be added or
/// removed while another thread serializes the declaration. Adding checks for
/// an existing path and inserts under the same write lock.
#[derive(Debug)]
pub struct ApiDeclaration {
    schema_version: SchemaVersion,
    api_version: String,
    base_path: String,
    resource_path: Option<String>,
    apis: RwLock<Vec<Api>>,
    produces: IndexSet<String>,
    consumes: IndexSet<String>,
    models: IndexMap<String, Model>,
}

impl ApiDeclaration {
    pub fn new(base_path: impl Into<String>, resource_path: Option<String>) -> Self {
        Self {
            schema_version: SchemaVersion::default(),
            api_version: DEFAULT_API_VERSION.to_string(),
            base_path: base_path.into(),
            resource_path,
            apis: RwLock::new(Vec::new()),
            produces: IndexSet::new(),
            consumes: IndexSet::new(),
            models: IndexMap::new(),
        }
    }

    pub fn schema_version(&self) -> SchemaVersion {
        self.schema_version
    }

    pub fn set_schema_version(&mut self, schema_version: SchemaVersion) {
        self.schema_version = schema_version;
    }

    pub fn api_version(&self) -> &str {
        &self.api_version
    }

    pub fn set_api_version(&mut self, api_version: impl Into<String>) {
        self.api_version = api_version.into();
    }

    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    pub fn set_base_path(&mut self, base_path: impl Into<String>) {
        self.base_path = base_path.into();
    }

    pub fn resource_path(&self) -> Option<&str> {
        self.resource_path.as_deref()
    }

    pub fn set_resource_path(&mut self, resource_path: Option<String>) {
        self.resource_path = resource_path;
    }

    // The list holds plain data, so a panic in another holder leaves it usable.
    fn read(&self) -> RwLockReadGuard<'_, Vec<Api>> {
        self.apis.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Api>> {
        self.apis.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Add an empty api at `path`.
    pub fn add_api(&self, path: impl Into<String>) -> Result<(), ModelError> {
        self.insert_api(Api::new(path))
    }

    /// Append `api`, failing without touching the list if its path is taken.
    pub fn insert_api(&self, api: Api) -> Result<(), ModelError> {
        let mut apis = self.write();
        if apis.iter().any(|a| a.path == api.path) {
            return Err(ModelError::DuplicatePath(api.path));
        }
        apis.push(api);
        Ok(())
    }

    pub fn get_api(&self, path: &str) -> Option<Api> {
        self.read().iter().find(|a| a.path == path).cloned()
    }

    /// Run `f` on the api at `path` while holding the write lock.
    pub fn update_api<R>(&self, path: &str, f: impl FnOnce(&mut Api) -> R) -> Result<R, ModelError> {
        let mut apis = self.write();
        let api = apis
            .iter_mut()
            .find(|a| a.path == path)
            .ok_or_else(|| ModelError::UnknownApi(path.to_string()))?;
        Ok(f(api))
    }

    pub fn remove_api(&self, path: &str) -> Option<Api> {
        let mut apis = self.write();
        let idx = apis.iter().position(|a| a.path == path)?;
        Some(apis.remove(idx))
    }

    /// Snapshot of the apis in insertion order.
    pub fn apis(&self) -> Vec<Api> {
        self.read().clone()
    }

    pub fn api_count(&self) -> usize {
        self.read().len()
    }

    pub fn produces(&self) -> &IndexSet<String> {
        &self.produces
    }

    pub fn add_produces(&mut self, media_type: impl Into<String>) -> bool {
        self.produces.insert(media_type.into())
    }

    pub fn remove_produces(&mut self, media_type: &str) -> bool {
        self.produces.shift_remove(media_type)
    }

    pub fn consumes(&self) -> &IndexSet<String> {
        &self.consumes
    }

    pub fn add_consumes(&mut self, media_type: impl Into<String>) -> bool {
        self.consumes.insert(media_type.into())
    }

    pub fn remove_consumes(&mut self, media_type: &str) -> bool {
        self.consumes.shift_remove(media_type)
    }

    /// Add or replace the model with the same id.
    pub fn add_model(&mut self, model: Model) {
        self.models.insert(model.id.clone(), model);
    }

    pub fn get_model(&self, id: &str) -> Option<&Model> {
        self.models.get(id)
    }

    pub fn models(&self) -> impl Iterator<Item = &Model> {
        self.models.values()
    }
}

impl Clone for ApiDeclaration {
    fn clone(&self) -> Self {
        Self {
            schema_version: self.schema_version,
            api_version: self.api_version.clone(),
            base_path: self.base_path.clone(),
            resource_path: self.resource_path.clone(),
            apis: RwLock::new(self.apis()),
            produces: self.produces.clone(),
            consumes: self.consumes.clone(),
            models: self.models.clone(),
        }
    }
}
