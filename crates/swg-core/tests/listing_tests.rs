use serde_json::Value;
use swg_core::manifest;
use swg_core::model::{ApiDeclaration, Info, ResourceListing};
use swg_core::naming::file_name_from_path;
use swg_core::{
    FileStore, MemoryStore, ModelError, SchemaVersion, SwaggerFormat, SwaggerWriter, WriteError,
};

const PETSTORE: &str = include_str!("fixtures/petstore.yaml");

fn listing(version: SchemaVersion) -> ResourceListing {
    let mut listing = ResourceListing::new("1.0", version);
    listing.base_path = Some("http://x/api".to_string());
    listing.info = Info {
        title: Some("Petstore".to_string()),
        license: Some("Apache 2.0".to_string()),
        ..Info::default()
    };
    for path in ["/pets", "/pets/{id}"] {
        let mut decl = ApiDeclaration::new("http://x/api", Some(path.to_string()));
        decl.set_schema_version(version);
        decl.add_api(path).unwrap();
        listing.add_api(path, None, decl).unwrap();
    }
    listing
}

fn write_listing(listing: &ResourceListing) -> Value {
    let mut out = Vec::new();
    SwaggerWriter::new(SwaggerFormat::Json)
        .write_resource_listing(listing, &mut out)
        .unwrap();
    serde_json::from_slice(&out).unwrap()
}

#[test]
fn current_listing_has_info_block() {
    let doc = write_listing(&listing(SchemaVersion::V1_2));
    assert_eq!(doc["apiVersion"], "1.0");
    assert_eq!(doc["swaggerVersion"], "1.2");
    assert_eq!(doc["basePath"], "http://x/api");
    assert_eq!(doc["apis"][1]["path"], "/pets/{id}");
    assert!(doc["apis"][0].get("description").is_none());

    let info = doc["info"].as_object().unwrap();
    assert_eq!(info["title"], "Petstore");
    assert_eq!(info["license"], "Apache 2.0");
    assert_eq!(info.len(), 2);
}

#[test]
fn legacy_listing_has_no_info_block() {
    let doc = write_listing(&listing(SchemaVersion::V1_1));
    assert_eq!(doc["swaggerVersion"], "1.1");
    assert!(doc.get("info").is_none());
}

#[test]
fn listing_field_order() {
    let mut out = Vec::new();
    SwaggerWriter::new(SwaggerFormat::Json)
        .write_resource_listing(&listing(SchemaVersion::V1_2), &mut out)
        .unwrap();
    let text = String::from_utf8(out).unwrap();
    let keys = ["\"apiVersion\"", "\"swaggerVersion\"", "\"basePath\"", "\"apis\"", "\"info\""];
    let positions: Vec<_> = keys.iter().map(|k| text.find(k).unwrap()).collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn write_swagger_names_resources() {
    let mut store = MemoryStore::new();
    SwaggerWriter::new(SwaggerFormat::Json)
        .write_swagger(&mut store, &listing(SchemaVersion::V1_2))
        .unwrap();

    let names: Vec<_> = store.names().collect();
    assert_eq!(names, vec!["api-docs.json", "pets.json", "pets_{id}.json"]);

    let decl: Value = serde_json::from_str(store.get_str("pets_{id}.json").unwrap()).unwrap();
    assert_eq!(decl["resourcePath"], "/pets/{id}");
    assert_eq!(decl["apis"][0]["path"], "/pets/{id}");
}

#[test]
fn write_swagger_uses_format_extension() {
    let mut store = MemoryStore::new();
    SwaggerWriter::new(SwaggerFormat::Xml)
        .write_swagger(&mut store, &listing(SchemaVersion::V1_2))
        .unwrap();

    let listing_doc = store.get_str("api-docs.xml").unwrap();
    assert!(listing_doc.contains("<resourceListing>"));
    assert!(listing_doc.contains("<title>Petstore</title>"));
    assert!(store.get_str("pets.xml").unwrap().contains("<apiDeclaration>"));
}

#[test]
fn distinct_paths_get_distinct_names() {
    let paths = [
        "/pets",
        "/pets/{id}",
        "/pets_{id}",
        "/pets/id",
        "/pets_id",
        "/",
        "/a/{format}",
        "/a/json",
        "/pet.{format}",
        "/pet",
        "/pet.json",
    ];
    let mut names: Vec<_> = paths
        .iter()
        .map(|p| file_name_from_path(p, SwaggerFormat::Json))
        .collect();
    names.sort();
    names.dedup();
    assert_eq!(names.len(), paths.len());
}

fn listing_with_paths(paths: &[(&str, &str)]) -> ResourceListing {
    let mut listing = ResourceListing::new("1.0", SchemaVersion::V1_2);
    for (path, base_path) in paths {
        let decl = ApiDeclaration::new(*base_path, Some(path.to_string()));
        listing.add_api(*path, None, decl).unwrap();
    }
    listing
}

#[test]
fn placeholder_paths_keep_their_own_resources() {
    let listing = listing_with_paths(&[
        ("/a/{format}", "http://one"),
        ("/a/json", "http://two"),
        ("/pet.{format}", "http://three"),
        ("/pet", "http://four"),
    ]);
    let mut store = MemoryStore::new();
    SwaggerWriter::new(SwaggerFormat::Json)
        .write_swagger(&mut store, &listing)
        .unwrap();

    assert_eq!(store.len(), 5);
    let base_path = |name: &str| -> Value {
        let doc: Value = serde_json::from_str(store.get_str(name).unwrap()).unwrap();
        doc["basePath"].clone()
    };
    assert_eq!(base_path("a_{format}.json"), "http://one");
    assert_eq!(base_path("a_json.json"), "http://two");
    assert_eq!(base_path("pet.{format}.json"), "http://three");
    assert_eq!(base_path("pet.json"), "http://four");
}

#[test]
fn shared_resource_name_fails_before_writing() {
    let listing = listing_with_paths(&[("/pets", "http://one"), ("pets", "http://two")]);
    let mut store = MemoryStore::new();
    let err = SwaggerWriter::new(SwaggerFormat::Json)
        .write_swagger(&mut store, &listing)
        .unwrap_err();

    assert!(matches!(
        err,
        WriteError::Model(ModelError::DuplicateResource { ref name, ref first, ref second })
            if name == "pets.json" && first == "/pets" && second == "pets"
    ));
    assert!(store.is_empty());
}

#[test]
fn entry_cannot_overwrite_the_listing() {
    let listing = listing_with_paths(&[("/api-docs", "http://one")]);
    let mut store = MemoryStore::new();
    let err = SwaggerWriter::new(SwaggerFormat::Json)
        .write_swagger(&mut store, &listing)
        .unwrap_err();
    assert!(matches!(err, WriteError::Model(ModelError::DuplicateResource { .. })));
    assert!(store.is_empty());
}

#[test]
fn petstore_manifest_to_files() {
    let listing = manifest::from_yaml(PETSTORE)
        .unwrap()
        .into_listing()
        .unwrap();

    let tmp = tempfile::tempdir().unwrap();
    let mut store = FileStore::new(tmp.path());
    SwaggerWriter::new(SwaggerFormat::Json)
        .write_swagger(&mut store, &listing)
        .unwrap();

    let read = |name: &str| -> Value {
        let text = std::fs::read_to_string(tmp.path().join(name)).unwrap();
        serde_json::from_str(&text).unwrap()
    };

    let docs = read("api-docs.json");
    assert_eq!(docs["info"]["title"], "Swagger Sample App");
    assert_eq!(docs["apis"].as_array().unwrap().len(), 2);

    let pet = read("pet.json");
    assert_eq!(pet["basePath"], "http://petstore.swagger.io/api");
    assert_eq!(pet["produces"], serde_json::json!(["application/json", "application/xml"]));

    let get = &pet["apis"][0]["operations"][0];
    assert_eq!(get["nickname"], "getPetById");
    assert_eq!(get["responseMessages"][1]["responseModel"], "ApiError");

    let find = &pet["apis"][2]["operations"][0];
    assert_eq!(find["produces"], serde_json::json!(["text/plain"]));
    assert_eq!(find["parameters"][0]["allowMultiple"], true);

    let user = read("user.json");
    assert_eq!(user["apis"][0]["operations"][0]["type"], "User");
    assert!(user.get("produces").is_none());
}

#[test]
fn petstore_manifest_as_legacy() {
    let mut parsed = manifest::from_yaml(PETSTORE).unwrap();
    parsed.swagger_version = SchemaVersion::V1_1.to_string();
    let listing = parsed.into_listing().unwrap();

    let mut store = MemoryStore::new();
    SwaggerWriter::new(SwaggerFormat::Yaml)
        .write_swagger(&mut store, &listing)
        .unwrap();

    let docs: Value = serde_yaml_ng::from_str(store.get_str("api-docs.yaml").unwrap()).unwrap();
    assert!(docs.get("info").is_none());

    let pet: Value = serde_yaml_ng::from_str(store.get_str("pet.yaml").unwrap()).unwrap();
    assert!(pet.get("produces").is_none());
    let op = &pet["apis"][0]["operations"][0];
    assert_eq!(op["httpMethod"], "GET");
    assert!(op["errorResponses"][1].get("responseModel").is_none());
}
