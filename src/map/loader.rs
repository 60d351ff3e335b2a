use std::fs;
use std::path::Path;

use super::model::MapDocument;
use crate::error::{MapCleanError, Result};

/// Public API: load a map snapshot from a .json file on disk.
///
/// The whole file is read before parsing starts. Unreadable files and
/// non-UTF-8 content surface as [`MapCleanError::InputRead`], bad JSON or a
/// missing `rooms` array as [`MapCleanError::Parse`].
pub fn load_map_from_file(path: &Path) -> Result<MapDocument> {
    let contents = fs::read_to_string(path).map_err(|source| MapCleanError::InputRead {
        path: path.to_path_buf(),
        source,
    })?;

    parse_map(&contents, path)
}

/// Public API: load a map snapshot from an in-memory JSON string.
pub fn load_map_from_str(contents: &str) -> Result<MapDocument> {
    parse_map(contents, Path::new("<string>"))
}

fn parse_map(contents: &str, origin: &Path) -> Result<MapDocument> {
    let document: MapDocument =
        serde_json::from_str(contents).map_err(|source| MapCleanError::Parse {
            path: origin.to_path_buf(),
            source,
        })?;

    tracing::debug!(
        rooms = document.rooms.len(),
        origin = %origin.display(),
        "loaded map document"
    );
    Ok(document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_rooms_in_order() {
        let doc = load_map_from_str(
            r#"{"rooms":[{"room":"W1N1","objects":[]},{"room":"E2S2","objects":[{"type":"source"}]}]}"#,
        )
        .unwrap();

        let names: Vec<&str> = doc.rooms.iter().map(|r| r.room.as_str()).collect();
        assert_eq!(names, ["W1N1", "E2S2"]);
        assert_eq!(doc.rooms[1].objects[0].kind(), Some("source"));
    }

    #[test]
    fn invalid_json_is_a_parse_error() {
        let err = load_map_from_str("{\"rooms\": [").unwrap_err();
        assert!(matches!(err, MapCleanError::Parse { .. }));
    }

    #[test]
    fn missing_rooms_is_a_parse_error() {
        let err = load_map_from_str(r#"{"description":"empty"}"#).unwrap_err();
        assert!(matches!(err, MapCleanError::Parse { .. }));

        let err = load_map_from_str(r#"{"rooms":{"W1N1":{}}}"#).unwrap_err();
        assert!(matches!(err, MapCleanError::Parse { .. }));
    }

    #[test]
    fn room_without_objects_is_a_parse_error() {
        let err = load_map_from_str(r#"{"rooms":[{"room":"W1N1"}]}"#).unwrap_err();
        assert!(matches!(err, MapCleanError::Parse { .. }));
    }

    #[test]
    fn missing_file_is_an_input_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("season_map_rawdata.json");

        let err = load_map_from_file(&path).unwrap_err();
        match err {
            MapCleanError::InputRead { path: p, .. } => assert_eq!(p, path),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn non_utf8_file_is_an_input_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[b'{', 0xff, 0xfe, b'}']).unwrap();

        let err = load_map_from_file(file.path()).unwrap_err();
        assert!(matches!(err, MapCleanError::InputRead { .. }));
    }
}
