//! Incremental builders for nested documents.
//!
//! A document is a tree of named scalar fields, named scalar arrays, named
//! sub-objects and named arrays of sub-objects. [`Emitter`] builds one object
//! of that tree; [`DocumentEmitter`] is the root and owns the sink. Each
//! concrete syntax implements both, and callers only ever see the traits.

pub mod value;
pub mod xml;

pub use value::{JsonEmitter, YamlEmitter};
pub use xml::XmlEmitter;

use crate::error::WriteError;

/// Builder for one object of a document.
pub trait Emitter {
    /// Add a scalar string. `None` adds nothing: absent values never appear as null or empty.
    fn add_string(&mut self, field: &str, value: Option<&str>);

    fn add_int(&mut self, field: &str, value: i64);

    fn add_boolean(&mut self, field: &str, value: bool);

    /// Add an array of strings. An empty slice adds nothing, so every syntax agrees.
    fn add_array(&mut self, field: &str, values: &[String]);

    /// Open a single nested object under `field`.
    fn add_object(&mut self, field: &str) -> Box<dyn Emitter + '_>;

    /// Append a new object to the array under `field`, creating the array on first use.
    fn add_array_object(&mut self, field: &str) -> Box<dyn Emitter + '_>;
}

/// Root of a document. Nothing reaches the sink until [`finish`](Self::finish).
pub trait DocumentEmitter: Emitter {
    /// Encode the document and flush the sink.
    fn finish(self: Box<Self>) -> Result<(), WriteError>;
}

/// Convenience for collecting an `IndexSet` or any other iterable into `add_array` input.
pub(crate) fn to_values<'a>(items: impl IntoIterator<Item = &'a String>) -> Vec<String> {
    items.into_iter().cloned().collect()
}
