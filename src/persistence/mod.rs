use std::{
    fs,
    io::Write,
    path::{
        Path,
        PathBuf,
    },
};

use serde::{
    de::DeserializeOwned,
    Serialize,
};
use serde_json::ser::PrettyFormatter;
use tempfile::NamedTempFile;

use crate::core::TaggerError;

const APP_NAME: &str = "deck-tagger";
const INDENT: &[u8] = b"    ";

pub fn get_app_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_NAME))
}

pub fn get_config_file_path(filename: &str) -> Option<PathBuf> {
    get_app_config_dir().map(|dir| dir.join(filename))
}

pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, TaggerError> {
    let json = fs::read_to_string(path)?;
    let data: T = serde_json::from_str(&json)?;
    Ok(data)
}

/// Four-space indentation with non-ASCII text left unescaped, the layout the decks are
/// authored in.
pub fn to_pretty_json<T: Serialize>(data: &T) -> Result<Vec<u8>, TaggerError> {
    let mut buffer = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(INDENT));
    data.serialize(&mut serializer)?;
    Ok(buffer)
}

/// Writes to a temporary file next to `path` and renames it into place, so readers see either
/// the old document or the complete new one.
pub fn write_json_atomic<T: Serialize>(path: &Path, data: &T) -> Result<(), TaggerError> {
    let bytes = to_pretty_json(data)?;
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = NamedTempFile::new_in(dir)?;
    temp.write_all(&bytes)?;
    temp.as_file().sync_all()?;

    // The temp file is created owner-only; keep the mode of the document it replaces.
    if let Ok(metadata) = fs::metadata(path) {
        temp.as_file().set_permissions(metadata.permissions())?;
    }

    temp.persist(path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_pretty_json_layout() {
        let bytes = to_pretty_json(&json!({ "cards": [{ "wordTarget": "niño" }] })).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert_eq!(
            text,
            "{\n    \"cards\": [\n        {\n            \"wordTarget\": \"niño\"\n        }\n    ]\n}"
        );
    }

    #[test]
    fn test_atomic_write_replaces_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deck.json");
        fs::write(&path, "{}").unwrap();

        write_json_atomic(&path, &json!({ "cards": [] })).unwrap();

        let reloaded: serde_json::Value = read_json(&path).unwrap();
        assert_eq!(reloaded, json!({ "cards": [] }));
        let leftovers = fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(leftovers, 1);
    }

    #[cfg(unix)]
    #[test]
    fn test_atomic_write_keeps_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deck.json");
        fs::write(&path, "{}").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o644)).unwrap();

        write_json_atomic(&path, &json!({ "cards": [] })).unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o644);
    }
}
