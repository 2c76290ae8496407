//! Element-based emitter.
//!
//! Scalars become child elements holding text. Arrays, of scalars or of
//! objects, become one repeated child element per item. The tree is kept in
//! memory and encoded with `quick-xml` on `finish`.

use std::io::Write;

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use super::{DocumentEmitter, Emitter};
use crate::error::WriteError;

#[derive(Debug, Default)]
struct Element {
    name: String,
    text: Option<String>,
    children: Vec<Element>,
}

impl Element {
    fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }

    fn push_text(&mut self, name: &str, text: String) {
        self.children.push(Element {
            name: name.to_string(),
            text: Some(text),
            children: Vec::new(),
        });
    }

    fn push_child(&mut self, name: &str) -> &mut Element {
        self.children.push(Element::named(name));
        let last = self.children.len() - 1;
        &mut self.children[last]
    }
}

struct XmlObject<'a> {
    element: &'a mut Element,
}

impl Emitter for XmlObject<'_> {
    fn add_string(&mut self, field: &str, value: Option<&str>) {
        if let Some(value) = value {
            self.element.push_text(field, value.to_string());
        }
    }

    fn add_int(&mut self, field: &str, value: i64) {
        self.element.push_text(field, value.to_string());
    }

    fn add_boolean(&mut self, field: &str, value: bool) {
        self.element.push_text(field, value.to_string());
    }

    fn add_array(&mut self, field: &str, values: &[String]) {
        for value in values {
            self.element.push_text(field, value.clone());
        }
    }

    fn add_object(&mut self, field: &str) -> Box<dyn Emitter + '_> {
        Box::new(XmlObject {
            element: self.element.push_child(field),
        })
    }

    fn add_array_object(&mut self, field: &str) -> Box<dyn Emitter + '_> {
        // repeated elements are the array
        self.add_object(field)
    }
}

/// XML document under a named root element.
pub struct XmlEmitter<'w> {
    root: Element,
    sink: Box<dyn Write + 'w>,
}

impl<'w> XmlEmitter<'w> {
    pub fn new(sink: impl Write + 'w, root: &str) -> Self {
        Self {
            root: Element::named(root),
            sink: Box::new(sink),
        }
    }

    fn object(&mut self) -> XmlObject<'_> {
        XmlObject {
            element: &mut self.root,
        }
    }
}

impl Emitter for XmlEmitter<'_> {
    fn add_string(&mut self, field: &str, value: Option<&str>) {
        self.object().add_string(field, value);
    }

    fn add_int(&mut self, field: &str, value: i64) {
        self.object().add_int(field, value);
    }

    fn add_boolean(&mut self, field: &str, value: bool) {
        self.object().add_boolean(field, value);
    }

    fn add_array(&mut self, field: &str, values: &[String]) {
        self.object().add_array(field, values);
    }

    fn add_object(&mut self, field: &str) -> Box<dyn Emitter + '_> {
        Box::new(XmlObject {
            element: self.root.push_child(field),
        })
    }

    fn add_array_object(&mut self, field: &str) -> Box<dyn Emitter + '_> {
        self.add_object(field)
    }
}

impl DocumentEmitter for XmlEmitter<'_> {
    fn finish(self: Box<Self>) -> Result<(), WriteError> {
        let XmlEmitter { root, mut sink } = *self;
        {
            let mut writer = Writer::new_with_indent(&mut sink, b' ', 2);
            writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
            write_element(&mut writer, &root)?;
        }
        sink.write_all(b"\n")?;
        sink.flush()?;
        Ok(())
    }
}

fn write_element<W: Write>(writer: &mut Writer<W>, element: &Element) -> Result<(), WriteError> {
    let name = element.name.as_str();
    match &element.text {
        Some(text) => {
            writer.write_event(Event::Start(BytesStart::new(name)))?;
            writer.write_event(Event::Text(BytesText::new(text)))?;
            writer.write_event(Event::End(BytesEnd::new(name)))?;
        }
        None if element.children.is_empty() => {
            writer.write_event(Event::Empty(BytesStart::new(name)))?;
        }
        None => {
            writer.write_event(Event::Start(BytesStart::new(name)))?;
            for child in &element.children {
                write_element(writer, child)?;
            }
            writer.write_event(Event::End(BytesEnd::new(name)))?;
        }
    }
    Ok(())
}
