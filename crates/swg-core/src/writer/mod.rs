pub mod format;

pub use format::SwaggerFormat;

use std::collections::HashMap;
use std::io::Write;

use crate::emit::{Emitter, to_values};
use crate::error::{ModelError, WriteError};
use crate::model::{Api, ApiDeclaration, Info, Operation, ResourceListing};
use crate::naming::{file_name_from_path, listing_file_name};
use crate::store::SwaggerStore;
use crate::version::field_map::{DECLARATION_ROOT, LISTING_ROOT, SWAGGER_VERSION};
use crate::version::{FieldMap, FieldNames};

/// Writes resource listings and API declarations in one concrete syntax.
///
/// The walk is the same for every syntax; field names and the optional
/// structures come from the [`FieldMap`] of the document's schema version.
#[derive(Debug, Clone, Copy)]
pub struct SwaggerWriter {
    format: SwaggerFormat,
}

impl SwaggerWriter {
    pub fn new(format: SwaggerFormat) -> Self {
        Self { format }
    }

    pub fn format(&self) -> SwaggerFormat {
        self.format
    }

    pub fn write_api_declaration(
        &self,
        declaration: &ApiDeclaration,
        sink: &mut dyn Write,
    ) -> Result<(), WriteError> {
        let version = declaration.schema_version();
        let map = FieldMap::for_version(version);
        let f = &map.names;
        let mut w = self.format.emitter(sink, DECLARATION_ROOT);

        w.add_string(SWAGGER_VERSION, Some(version.identifier()));
        w.add_string(f.api_version, Some(declaration.api_version()));
        w.add_string(f.base_path, Some(declaration.base_path()));
        w.add_string(f.resource_path, declaration.resource_path());

        if map.media_types {
            if !declaration.produces().is_empty() {
                w.add_array(f.produces, &to_values(declaration.produces()));
            }
            if !declaration.consumes().is_empty() {
                w.add_array(f.consumes, &to_values(declaration.consumes()));
            }
        }

        for api in declaration.apis() {
            let mut aw = w.add_array_object(f.apis);
            write_api(aw.as_mut(), map, &api);
        }

        w.finish()
    }

    pub fn write_resource_listing(
        &self,
        listing: &ResourceListing,
        sink: &mut dyn Write,
    ) -> Result<(), WriteError> {
        let map = FieldMap::for_version(listing.schema_version);
        let f = &map.names;
        let mut w = self.format.emitter(sink, LISTING_ROOT);

        w.add_string(f.api_version, Some(&listing.api_version));
        w.add_string(SWAGGER_VERSION, Some(listing.schema_version.identifier()));
        w.add_string(f.base_path, listing.base_path.as_deref());

        for entry in listing.apis() {
            let mut sw = w.add_array_object(f.apis);
            sw.add_string(f.description, entry.description.as_deref());
            sw.add_string(f.path, Some(&entry.path));
        }

        if map.info {
            let mut iw = w.add_object(f.info);
            write_info(iw.as_mut(), f, &listing.info);
        }

        w.finish()
    }

    /// Write `api-docs.<ext>` and one declaration per listing entry into `store`.
    pub fn write_swagger(
        &self,
        store: &mut dyn SwaggerStore,
        listing: &ResourceListing,
    ) -> Result<(), WriteError> {
        let names = resource_names(listing, self.format)?;

        let name = listing_file_name(self.format);
        log::debug!("writing resource listing to {name}");
        let mut sink = store.create_resource(&name)?;
        self.write_resource_listing(listing, &mut sink)?;
        drop(sink);

        for (entry, name) in listing.apis().iter().zip(names) {
            log::debug!("writing declaration {} to {name}", entry.path);
            let mut sink = store.create_resource(&name)?;
            self.write_api_declaration(&entry.declaration, &mut sink)?;
        }

        Ok(())
    }
}

/// File name of every listing entry, in listing order. Fails before anything is
/// written if two entries would share a resource.
fn resource_names(
    listing: &ResourceListing,
    format: SwaggerFormat,
) -> Result<Vec<String>, ModelError> {
    let mut seen: HashMap<String, &str> = HashMap::new();
    seen.insert(listing_file_name(format), "<resource listing>");

    let mut names = Vec::with_capacity(listing.apis().len());
    for entry in listing.apis() {
        let name = file_name_from_path(&entry.path, format);
        if let Some(first) = seen.insert(name.clone(), &entry.path) {
            return Err(ModelError::DuplicateResource {
                name,
                first: first.to_string(),
                second: entry.path.clone(),
            });
        }
        names.push(name);
    }
    Ok(names)
}

fn write_api(w: &mut dyn Emitter, map: &FieldMap, api: &Api) {
    let f = &map.names;
    w.add_string(f.path, Some(&api.path));
    w.add_string(f.description, api.description.as_deref());

    for operation in &api.operations {
        let mut ow = w.add_array_object(f.operations);
        write_operation(ow.as_mut(), map, operation);
    }
}

fn write_operation(w: &mut dyn Emitter, map: &FieldMap, operation: &Operation) {
    let f = &map.names;
    w.add_string(f.nickname, Some(&operation.nickname));
    w.add_string(f.method, Some(operation.method.as_str()));
    w.add_string(f.summary, operation.summary.as_deref());
    w.add_string(f.notes, operation.notes.as_deref());
    w.add_string(f.response_class, operation.response_class.as_deref());

    for parameter in &operation.parameters {
        let mut pw = w.add_array_object(f.parameters);
        pw.add_string(f.name, Some(&parameter.name));
        pw.add_string(f.param_type, Some(parameter.param_type.as_str()));
        pw.add_boolean(f.allow_multiple, parameter.allow_multiple);
        pw.add_string(f.description, parameter.description.as_deref());
        pw.add_boolean(f.required, parameter.required);
        pw.add_string(f.data_type, parameter.data_type.as_deref());
    }

    for message in &operation.response_messages {
        let mut ew = w.add_array_object(f.response_messages);
        ew.add_int(f.code, message.code);
        ew.add_string(f.message, message.message.as_deref());
        if map.response_model {
            ew.add_string(f.response_model, message.response_model.as_deref());
        }
    }

    if map.media_types {
        if !operation.produces.is_empty() {
            w.add_array(f.produces, &to_values(&operation.produces));
        }
        if !operation.consumes.is_empty() {
            w.add_array(f.consumes, &to_values(&operation.consumes));
        }
    }
}

fn write_info(w: &mut dyn Emitter, f: &FieldNames, info: &Info) {
    w.add_string(f.info_title, info.title.as_deref());
    w.add_string(f.info_description, info.description.as_deref());
    w.add_string(f.info_terms_of_service_url, info.terms_of_service_url.as_deref());
    w.add_string(f.info_contact, info.contact.as_deref());
    w.add_string(f.info_license, info.license.as_deref());
    w.add_string(f.info_license_url, info.license_url.as_deref());
}
