//! Per-version field names used when writing Swagger documents.
//!
//! The writer never spells a field name itself: every key it emits comes from
//! the [`FieldMap`] resolved for the document's [`SchemaVersion`], and every
//! structural difference between versions is one of the presence flags here.

use super::SchemaVersion;

/// Marker carrying the schema version identifier. Same name in every version.
pub const SWAGGER_VERSION: &str = "swaggerVersion";

/// Root element name for declarations in element-based syntaxes.
pub const DECLARATION_ROOT: &str = "apiDeclaration";

/// Root element name for resource listings in element-based syntaxes.
pub const LISTING_ROOT: &str = "resourceListing";

/// Wire names of every logical field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldNames {
    pub api_version: &'static str,
    pub base_path: &'static str,
    pub resource_path: &'static str,
    pub produces: &'static str,
    pub consumes: &'static str,
    pub apis: &'static str,
    pub path: &'static str,
    pub description: &'static str,
    pub operations: &'static str,
    pub method: &'static str,
    pub nickname: &'static str,
    pub summary: &'static str,
    pub notes: &'static str,
    pub response_class: &'static str,
    pub parameters: &'static str,
    pub name: &'static str,
    pub param_type: &'static str,
    pub data_type: &'static str,
    pub allow_multiple: &'static str,
    pub required: &'static str,
    pub response_messages: &'static str,
    pub code: &'static str,
    pub message: &'static str,
    pub response_model: &'static str,
    pub info: &'static str,
    pub info_title: &'static str,
    pub info_description: &'static str,
    pub info_terms_of_service_url: &'static str,
    pub info_contact: &'static str,
    pub info_license: &'static str,
    pub info_license_url: &'static str,
}

/// Field names plus the optional structures a version supports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldMap {
    pub version: SchemaVersion,
    pub names: FieldNames,
    /// `produces`/`consumes` at declaration and operation level.
    pub media_types: bool,
    /// `responseModel` on response messages.
    pub response_model: bool,
    /// The `info` block of the resource listing.
    pub info: bool,
}

impl FieldMap {
    pub fn for_version(version: SchemaVersion) -> &'static FieldMap {
        match version {
            SchemaVersion::V1_1 => &V1_1,
            SchemaVersion::V1_2 => &V1_2,
        }
    }
}

static V1_1: FieldMap = FieldMap {
    version: SchemaVersion::V1_1,
    names: FieldNames {
        api_version: "apiVersion",
        base_path: "basePath",
        resource_path: "resourcePath",
        produces: "produces",
        consumes: "consumes",
        apis: "apis",
        path: "path",
        description: "description",
        operations: "operations",
        method: "httpMethod",
        nickname: "nickname",
        summary: "summary",
        notes: "notes",
        response_class: "responseClass",
        parameters: "parameters",
        name: "name",
        param_type: "paramType",
        data_type: "dataType",
        allow_multiple: "allowMultiple",
        required: "required",
        response_messages: "errorResponses",
        code: "code",
        message: "reason",
        response_model: "responseModel",
        info: "info",
        info_title: "title",
        info_description: "description",
        info_terms_of_service_url: "termsOfServiceUrl",
        info_contact: "contact",
        info_license: "license",
        info_license_url: "licenseUrl",
    },
    media_types: false,
    response_model: false,
    info: false,
};

static V1_2: FieldMap = FieldMap {
    version: SchemaVersion::V1_2,
    names: FieldNames {
        api_version: "apiVersion",
        base_path: "basePath",
        resource_path: "resourcePath",
        produces: "produces",
        consumes: "consumes",
        apis: "apis",
        path: "path",
        description: "description",
        operations: "operations",
        method: "method",
        nickname: "nickname",
        summary: "summary",
        notes: "notes",
        response_class: "type",
        parameters: "parameters",
        name: "name",
        param_type: "paramType",
        data_type: "type",
        allow_multiple: "allowMultiple",
        required: "required",
        response_messages: "responseMessages",
        code: "code",
        message: "message",
        response_model: "responseModel",
        info: "info",
        info_title: "title",
        info_description: "description",
        info_terms_of_service_url: "termsOfServiceUrl",
        info_contact: "contact",
        info_license: "license",
        info_license_url: "licenseUrl",
    },
    media_types: true,
    response_model: true,
    info: true,
};
