use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use indexmap::IndexMap;

/// Factory for the writable destinations of a Swagger document set.
pub trait SwaggerStore {
    /// Open a sink for the resource called `name`, replacing any previous content.
    fn create_resource(&mut self, name: &str) -> io::Result<Box<dyn Write + '_>>;
}

/// Writes each resource as a file in one directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl SwaggerStore for FileStore {
    fn create_resource(&mut self, name: &str) -> io::Result<Box<dyn Write + '_>> {
        fs::create_dir_all(&self.root)?;
        let path = self.root.join(name);
        log::debug!("creating {}", path.display());
        Ok(Box::new(BufWriter::new(File::create(path)?)))
    }
}

/// Keeps every resource in memory, in creation order.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    resources: IndexMap<String, Vec<u8>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&[u8]> {
        self.resources.get(name).map(Vec::as_slice)
    }

    /// Resource content as UTF-8, if present and valid.
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(|bytes| std::str::from_utf8(bytes).ok())
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.resources.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }
}

impl SwaggerStore for MemoryStore {
    fn create_resource(&mut self, name: &str) -> io::Result<Box<dyn Write + '_>> {
        let buf = self.resources.entry(name.to_string()).or_default();
        buf.clear();
        Ok(Box::new(buf))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_replaces_content() {
        let mut store = MemoryStore::new();
        store.create_resource("a.json").unwrap().write_all(b"first").unwrap();
        store.create_resource("b.json").unwrap().write_all(b"b").unwrap();
        store.create_resource("a.json").unwrap().write_all(b"second").unwrap();

        assert_eq!(store.get_str("a.json"), Some("second"));
        assert_eq!(store.names().collect::<Vec<_>>(), vec!["a.json", "b.json"]);
        assert!(store.get("c.json").is_none());
    }

    #[test]
    fn test_file_store_creates_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(tmp.path().join("docs"));
        {
            let mut sink = store.create_resource("api-docs.json").unwrap();
            sink.write_all(b"{}").unwrap();
            sink.flush().unwrap();
        }
        let written = fs::read_to_string(tmp.path().join("docs/api-docs.json")).unwrap();
        assert_eq!(written, "{}");
    }
}
