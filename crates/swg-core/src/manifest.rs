//! Authoring manifests: a compact YAML/JSON description of a service that is
//! turned into a [`ResourceListing`] through the model's own accessors.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::ManifestError;
use crate::model::{
    Api, ApiDeclaration, DEFAULT_API_VERSION, HttpMethod, Info, Model, Operation, ParamType,
    Parameter, ResourceListing, ResponseMessage,
};
use crate::version::SchemaVersion;

/// A whole service: listing metadata plus one declaration per resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingManifest {
    /// Checked when the listing is built, so an unknown version is a config error.
    #[serde(default = "default_swagger_version")]
    pub swagger_version: String,

    #[serde(default = "default_api_version")]
    pub api_version: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_path: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub info: Option<InfoManifest>,

    #[serde(default)]
    pub resources: Vec<ResourceManifest>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InfoManifest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub terms_of_service_url: Option<String>,
    pub contact: Option<String>,
    pub license: Option<String>,
    pub license_url: Option<String>,
}

/// One listing entry and the declaration behind it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceManifest {
    pub path: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Defaults to the listing base path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_path: Option<String>,

    /// Defaults to the listing path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_path: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub produces: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub consumes: Vec<String>,

    #[serde(default)]
    pub apis: Vec<ApiManifest>,

    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub models: IndexMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiManifest {
    pub path: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default)]
    pub operations: Vec<OperationManifest>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationManifest {
    pub method: HttpMethod,
    pub nickname: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_class: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<ParameterManifest>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub response_messages: Vec<ResponseMessageManifest>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub produces: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub consumes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterManifest {
    pub name: String,

    #[serde(rename = "in")]
    pub param_type: ParamType,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub data_type: Option<String>,

    /// Defaults to `true` for path parameters, `false` otherwise.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,

    #[serde(default)]
    pub allow_multiple: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseMessageManifest {
    pub code: i64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_model: Option<String>,
}

fn default_swagger_version() -> String {
    SchemaVersion::default().to_string()
}

fn default_api_version() -> String {
    DEFAULT_API_VERSION.to_string()
}

/// Parse a manifest from YAML.
pub fn from_yaml(input: &str) -> Result<ListingManifest, ManifestError> {
    Ok(serde_yaml_ng::from_str(input)?)
}

/// Parse a manifest from JSON.
pub fn from_json(input: &str) -> Result<ListingManifest, ManifestError> {
    Ok(serde_json::from_str(input)?)
}

impl ListingManifest {
    /// Build the listing. Duplicate listing or api paths are rejected.
    pub fn into_listing(self) -> Result<ResourceListing, ManifestError> {
        let version: SchemaVersion = self.swagger_version.parse()?;
        let mut listing = ResourceListing::new(self.api_version.clone(), version);
        listing.base_path = self.base_path.clone();
        if let Some(info) = self.info {
            listing.info = Info {
                title: info.title,
                description: info.description,
                terms_of_service_url: info.terms_of_service_url,
                contact: info.contact,
                license: info.license,
                license_url: info.license_url,
            };
        }

        for resource in self.resources {
            let declaration = build_declaration(
                &resource,
                version,
                &self.api_version,
                self.base_path.as_deref(),
            )?;
            listing.add_api(resource.path, resource.description, declaration)?;
        }

        Ok(listing)
    }
}

fn build_declaration(
    resource: &ResourceManifest,
    version: SchemaVersion,
    api_version: &str,
    listing_base_path: Option<&str>,
) -> Result<ApiDeclaration, ManifestError> {
    let base_path = resource
        .base_path
        .as_deref()
        .or(listing_base_path)
        .unwrap_or_default();
    let resource_path = resource
        .resource_path
        .clone()
        .unwrap_or_else(|| resource.path.clone());

    let mut declaration = ApiDeclaration::new(base_path, Some(resource_path));
    declaration.set_schema_version(version);
    declaration.set_api_version(api_version);
    for media_type in &resource.produces {
        declaration.add_produces(media_type.clone());
    }
    for media_type in &resource.consumes {
        declaration.add_consumes(media_type.clone());
    }
    for (id, definition) in &resource.models {
        declaration.add_model(Model::new(id.clone(), definition.clone()));
    }

    for api in &resource.apis {
        let mut built = Api::new(api.path.clone());
        built.description = api.description.clone();
        built.operations = api.operations.iter().map(build_operation).collect();
        declaration.insert_api(built)?;
    }

    Ok(declaration)
}

fn build_operation(op: &OperationManifest) -> Operation {
    let mut operation = Operation::new(op.method, op.nickname.clone());
    operation.summary = op.summary.clone();
    operation.notes = op.notes.clone();
    operation.response_class = op.response_class.clone();

    for p in &op.parameters {
        let mut parameter = Parameter::new(p.name.clone(), p.param_type);
        parameter.data_type = p.data_type.clone();
        parameter.allow_multiple = p.allow_multiple;
        parameter.description = p.description.clone();
        if let Some(required) = p.required {
            parameter.required = required;
        }
        operation.add_parameter(parameter);
    }

    operation.response_messages = op
        .response_messages
        .iter()
        .map(|m| ResponseMessage {
            code: m.code,
            message: m.message.clone(),
            response_model: m.response_model.clone(),
        })
        .collect();

    for media_type in &op.produces {
        operation.add_produces(media_type.clone());
    }
    for media_type in &op.consumes {
        operation.add_consumes(media_type.clone());
    }
    operation
}
