//! Emitters for syntaxes that map onto a JSON value tree (JSON and YAML).
//!
//! Both build an insertion-ordered `serde_json` map and only differ in the
//! encoder run by `finish`.

use std::io::Write;

use serde_json::{Map, Value};

use super::{DocumentEmitter, Emitter};
use crate::error::WriteError;

/// Emitter scoped to one object of the tree.
struct ValueObject<'a> {
    map: &'a mut Map<String, Value>,
}

fn add_string(map: &mut Map<String, Value>, field: &str, value: Option<&str>) {
    if let Some(value) = value {
        map.insert(field.to_string(), Value::String(value.to_string()));
    }
}

fn add_array(map: &mut Map<String, Value>, field: &str, values: &[String]) {
    if values.is_empty() {
        return;
    }
    let items = values.iter().cloned().map(Value::String).collect();
    map.insert(field.to_string(), Value::Array(items));
}

fn open_object<'a>(map: &'a mut Map<String, Value>, field: &str) -> Box<dyn Emitter + 'a> {
    let slot = map.entry(field).or_insert(Value::Null);
    if !slot.is_object() {
        *slot = Value::Object(Map::new());
    }
    let map = slot.as_object_mut().expect("slot was set to an object");
    Box::new(ValueObject { map })
}

fn open_array_object<'a>(map: &'a mut Map<String, Value>, field: &str) -> Box<dyn Emitter + 'a> {
    let slot = map.entry(field).or_insert(Value::Null);
    if !slot.is_array() {
        *slot = Value::Array(Vec::new());
    }
    let items = slot.as_array_mut().expect("slot was set to an array");
    items.push(Value::Object(Map::new()));
    let map = items
        .last_mut()
        .and_then(Value::as_object_mut)
        .expect("an object was just pushed");
    Box::new(ValueObject { map })
}

impl Emitter for ValueObject<'_> {
    fn add_string(&mut self, field: &str, value: Option<&str>) {
        add_string(self.map, field, value);
    }

    fn add_int(&mut self, field: &str, value: i64) {
        self.map.insert(field.to_string(), Value::from(value));
    }

    fn add_boolean(&mut self, field: &str, value: bool) {
        self.map.insert(field.to_string(), Value::Bool(value));
    }

    fn add_array(&mut self, field: &str, values: &[String]) {
        add_array(self.map, field, values);
    }

    fn add_object(&mut self, field: &str) -> Box<dyn Emitter + '_> {
        open_object(self.map, field)
    }

    fn add_array_object(&mut self, field: &str) -> Box<dyn Emitter + '_> {
        open_array_object(self.map, field)
    }
}

macro_rules! value_root_emitter {
    ($name:ident) => {
        impl Emitter for $name<'_> {
            fn add_string(&mut self, field: &str, value: Option<&str>) {
                add_string(&mut self.root, field, value);
            }

            fn add_int(&mut self, field: &str, value: i64) {
                self.root.insert(field.to_string(), Value::from(value));
            }

            fn add_boolean(&mut self, field: &str, value: bool) {
                self.root.insert(field.to_string(), Value::Bool(value));
            }

            fn add_array(&mut self, field: &str, values: &[String]) {
                add_array(&mut self.root, field, values);
            }

            fn add_object(&mut self, field: &str) -> Box<dyn Emitter + '_> {
                open_object(&mut self.root, field)
            }

            fn add_array_object(&mut self, field: &str) -> Box<dyn Emitter + '_> {
                open_array_object(&mut self.root, field)
            }
        }
    };
}

/// Pretty-printed JSON document.
pub struct JsonEmitter<'w> {
    root: Map<String, Value>,
    sink: Box<dyn Write + 'w>,
}

impl<'w> JsonEmitter<'w> {
    pub fn new(sink: impl Write + 'w) -> Self {
        Self {
            root: Map::new(),
            sink: Box::new(sink),
        }
    }
}

value_root_emitter!(JsonEmitter);

impl DocumentEmitter for JsonEmitter<'_> {
    fn finish(self: Box<Self>) -> Result<(), WriteError> {
        let JsonEmitter { root, mut sink } = *self;
        serde_json::to_writer_pretty(&mut sink, &Value::Object(root))?;
        sink.write_all(b"\n")?;
        sink.flush()?;
        Ok(())
    }
}

/// Block-style YAML document.
pub struct YamlEmitter<'w> {
    root: Map<String, Value>,
    sink: Box<dyn Write + 'w>,
}

impl<'w> YamlEmitter<'w> {
    pub fn new(sink: impl Write + 'w) -> Self {
        Self {
            root: Map::new(),
            sink: Box::new(sink),
        }
    }
}

value_root_emitter!(YamlEmitter);

impl DocumentEmitter for YamlEmitter<'_> {
    fn finish(self: Box<Self>) -> Result<(), WriteError> {
        let YamlEmitter { root, mut sink } = *self;
        serde_yaml_ng::to_writer(&mut sink, &Value::Object(root))?;
        sink.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn json(build: impl FnOnce(&mut dyn Emitter)) -> Value {
        let mut out = Vec::new();
        let mut emitter = Box::new(JsonEmitter::new(&mut out));
        build(&mut *emitter);
        emitter.finish().unwrap();
        serde_json::from_slice(&out).unwrap()
    }

    #[test]
    fn test_absent_string_is_omitted() {
        let doc = json(|e| {
            e.add_string("present", Some("yes"));
            e.add_string("absent", None);
        });
        assert_eq!(doc["present"], "yes");
        assert!(doc.get("absent").is_none());
    }

    #[test]
    fn test_scalars_and_arrays() {
        let doc = json(|e| {
            e.add_int("code", 404);
            e.add_boolean("required", false);
            e.add_array("produces", &["a".to_string(), "b".to_string()]);
            e.add_array("consumes", &[]);
        });
        assert_eq!(doc["code"], 404);
        assert_eq!(doc["required"], false);
        assert_eq!(doc["produces"], serde_json::json!(["a", "b"]));
        assert!(doc.get("consumes").is_none());
    }

    #[test]
    fn test_nested_objects_and_arrays() {
        let doc = json(|e| {
            e.add_object("info").add_string("title", Some("Pets"));
            for path in ["/a", "/b"] {
                let mut api = e.add_array_object("apis");
                api.add_string("path", Some(path));
                api.add_array_object("operations").add_string("nickname", Some("op"));
            }
        });
        assert_eq!(doc["info"]["title"], "Pets");
        assert_eq!(doc["apis"][0]["path"], "/a");
        assert_eq!(doc["apis"][1]["path"], "/b");
        assert_eq!(doc["apis"][1]["operations"][0]["nickname"], "op");
    }

    #[test]
    fn test_field_order_follows_emission() {
        let mut out = Vec::new();
        let mut emitter = Box::new(JsonEmitter::new(&mut out));
        emitter.add_string("zeta", Some("1"));
        emitter.add_string("alpha", Some("2"));
        emitter.finish().unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.find("zeta").unwrap() < text.find("alpha").unwrap());
    }

    #[test]
    fn test_yaml_encoding() {
        let mut out = Vec::new();
        let mut emitter = Box::new(YamlEmitter::new(&mut out));
        emitter.add_string("basePath", Some("http://x/api"));
        emitter.add_array_object("apis").add_string("path", Some("/pets"));
        emitter.finish().unwrap();

        let text = String::from_utf8(out).unwrap();
        let doc: Value = serde_yaml_ng::from_str(&text).unwrap();
        assert_eq!(doc["basePath"], "http://x/api");
        assert_eq!(doc["apis"][0]["path"], "/pets");
    }

    #[test]
    fn test_nothing_written_before_finish() {
        let mut out = Vec::new();
        {
            let mut emitter = JsonEmitter::new(&mut out);
            emitter.add_string("basePath", Some("http://x/api"));
        }
        assert!(out.is_empty());
    }
}
