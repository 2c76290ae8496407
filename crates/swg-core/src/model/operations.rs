use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// HTTP method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
    Patch,
    Options,
    Head,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Options => "OPTIONS",
            HttpMethod::Head => "HEAD",
        }
    }
}

/// Where a parameter is carried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamType {
    Query,
    Path,
    Body,
    Header,
    Form,
}

impl ParamType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParamType::Query => "query",
            ParamType::Path => "path",
            ParamType::Body => "body",
            ParamType::Header => "header",
            ParamType::Form => "form",
        }
    }
}

/// One path of a declaration and the operations available on it.
#[derive(Debug, Clone, PartialEq)]
pub struct Api {
    pub path: String,
    pub description: Option<String>,
    pub operations: Vec<Operation>,
}

impl Api {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            description: None,
            operations: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn add_operation(&mut self, operation: Operation) -> &mut Operation {
        self.operations.push(operation);
        let last = self.operations.len() - 1;
        &mut self.operations[last]
    }

    pub fn get_operation(&self, nickname: &str) -> Option<&Operation> {
        self.operations.iter().find(|op| op.nickname == nickname)
    }

    pub fn remove_operation(&mut self, nickname: &str) -> Option<Operation> {
        let idx = self.operations.iter().position(|op| op.nickname == nickname)?;
        Some(self.operations.remove(idx))
    }
}

/// A single HTTP operation. Its media types override the declaration's.
#[derive(Debug, Clone, PartialEq)]
pub struct Operation {
    pub method: HttpMethod,
    pub nickname: String,
    pub summary: Option<String>,
    pub notes: Option<String>,
    pub response_class: Option<String>,
    pub parameters: Vec<Parameter>,
    pub response_messages: Vec<ResponseMessage>,
    pub produces: IndexSet<String>,
    pub consumes: IndexSet<String>,
}

impl Operation {
    pub fn new(method: HttpMethod, nickname: impl Into<String>) -> Self {
        Self {
            method,
            nickname: nickname.into(),
            summary: None,
            notes: None,
            response_class: None,
            parameters: Vec::new(),
            response_messages: Vec::new(),
            produces: IndexSet::new(),
            consumes: IndexSet::new(),
        }
    }

    pub fn add_parameter(&mut self, parameter: Parameter) -> &mut Parameter {
        self.parameters.push(parameter);
        let last = self.parameters.len() - 1;
        &mut self.parameters[last]
    }

    pub fn get_parameter(&self, name: &str) -> Option<&Parameter> {
        self.parameters.iter().find(|p| p.name == name)
    }

    pub fn add_response_message(&mut self, code: i64, message: impl Into<String>) -> &mut ResponseMessage {
        self.response_messages.push(ResponseMessage {
            code,
            message: Some(message.into()),
            response_model: None,
        });
        let last = self.response_messages.len() - 1;
        &mut self.response_messages[last]
    }

    pub fn get_response_message(&self, code: i64) -> Option<&ResponseMessage> {
        self.response_messages.iter().find(|m| m.code == code)
    }

    /// Returns `false` if the media type was already present.
    pub fn add_produces(&mut self, media_type: impl Into<String>) -> bool {
        self.produces.insert(media_type.into())
    }

    pub fn remove_produces(&mut self, media_type: &str) -> bool {
        self.produces.shift_remove(media_type)
    }

    /// Returns `false` if the media type was already present.
    pub fn add_consumes(&mut self, media_type: impl Into<String>) -> bool {
        self.consumes.insert(media_type.into())
    }

    pub fn remove_consumes(&mut self, media_type: &str) -> bool {
        self.consumes.shift_remove(media_type)
    }
}

/// An operation parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub name: String,
    pub param_type: ParamType,
    /// Data type or model id of the value.
    pub data_type: Option<String>,
    pub required: bool,
    pub allow_multiple: bool,
    pub description: Option<String>,
}

impl Parameter {
    pub fn new(name: impl Into<String>, param_type: ParamType) -> Self {
        Self {
            name: name.into(),
            param_type,
            data_type: None,
            // path parameters are always required
            required: param_type == ParamType::Path,
            allow_multiple: false,
            description: None,
        }
    }
}

/// A documented response status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseMessage {
    pub code: i64,
    pub message: Option<String>,
    /// Model id of the response body. Only written for 1.2 and later.
    pub response_model: Option<String>,
}
