use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

////////////////////////////
/// MAP DOCUMENT STRUCTS ///
////////////////////////////

/// A whole map snapshot: `{"rooms": [...], ...}`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MapDocument {
    pub rooms: Vec<RoomEntry>,

    /// Top-level fields other than `rooms` (e.g. `description`), kept verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomEntry {
    pub room: String,
    pub objects: Vec<ObjectEntry>,

    /// `terrain`, `status`, `bus`, `depositType`, ... in input order.
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

/// One room object. Opaque apart from the keys the sanitizer looks at.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObjectEntry(Map<String, Value>);

impl MapDocument {
    pub fn new(rooms: Vec<RoomEntry>) -> Self {
        MapDocument {
            rooms,
            extra: Map::new(),
        }
    }
}

impl RoomEntry {
    pub fn new(room: impl Into<String>, objects: Vec<ObjectEntry>) -> Self {
        RoomEntry {
            room: room.into(),
            objects,
            fields: Map::new(),
        }
    }
}

impl ObjectEntry {
    pub fn new(fields: Map<String, Value>) -> Self {
        ObjectEntry(fields)
    }

    /// The `type` discriminator, if present and a string.
    pub fn kind(&self) -> Option<&str> {
        self.0.get("type").and_then(Value::as_str)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_fields(self) -> Map<String, Value> {
        self.0
    }
}

impl From<Map<String, Value>> for ObjectEntry {
    fn from(fields: Map<String, Value>) -> Self {
        ObjectEntry(fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn room_fields_keep_input_order() {
        let room: RoomEntry = serde_json::from_value(json!({
            "room": "W10N3",
            "terrain": "0000",
            "objects": [],
            "status": "normal",
            "bus": true,
            "depositType": "silicon"
        }))
        .unwrap();

        let keys: Vec<&str> = room.fields.keys().map(String::as_str).collect();
        assert_eq!(keys, ["terrain", "status", "bus", "depositType"]);
    }

    #[test]
    fn object_kind_requires_string_type() {
        let obj: ObjectEntry = serde_json::from_value(json!({"type": 3})).unwrap();
        assert_eq!(obj.kind(), None);

        let obj: ObjectEntry = serde_json::from_value(json!({"type": "source"})).unwrap();
        assert_eq!(obj.kind(), Some("source"));
    }

    #[test]
    fn document_keeps_top_level_extras() {
        let doc: MapDocument = serde_json::from_value(json!({
            "description": "Season 5",
            "rooms": []
        }))
        .unwrap();

        assert!(doc.rooms.is_empty());
        assert_eq!(doc.extra.get("description"), Some(&json!("Season 5")));
    }
}
