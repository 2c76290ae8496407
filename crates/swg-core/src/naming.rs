use crate::writer::SwaggerFormat;

/// Name of the resource listing document, e.g. `api-docs.json`.
pub fn listing_file_name(format: SwaggerFormat) -> String {
    format!("api-docs.{}", format.extension())
}

/// Derive a flat, filesystem-safe file name for the declaration at `path`.
///
/// Examples for JSON:
/// - `/pets` → `pets.json`
/// - `/pets/{id}` → `pets_{id}.json`
/// - `/pet.{format}` → `pet.{format}.json`
/// - `/user_admin` → `user%5Fadmin.json`
///
/// `/` becomes `_`, so a literal `_` is escaped to keep distinct paths apart.
/// Placeholders such as `{format}` are kept verbatim, never expanded, so every
/// distinct path starting with `/` gets a distinct name.
pub fn file_name_from_path(path: &str, format: SwaggerFormat) -> String {
    let trimmed = path.strip_prefix('/').unwrap_or(path);

    let mut name = if trimmed.is_empty() {
        // only reachable for the root path, since `/` never escapes to %2F
        "%2F".to_string()
    } else {
        escape_segment(trimmed)
    };

    name.push('.');
    name.push_str(format.extension());
    name
}

fn escape_segment(path: &str) -> String {
    let mut out = String::with_capacity(path.len());
    for ch in path.chars() {
        match ch {
            '/' => out.push('_'),
            c if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '{' | '}') => out.push(c),
            c => {
                let mut buf = [0u8; 4];
                for byte in c.encode_utf8(&mut buf).bytes() {
                    out.push_str(&format!("%{byte:02X}"));
                }
            }
        }
    }
    out
}
