//! The sanitization pass itself: a pure `MapDocument -> MapDocument` rewrite.
//!
//! Rooms keep their order and identity. Inside a room, objects are filtered
//! with a stable filter and controllers are rebuilt with their ownership and
//! progression state removed.

mod report;
mod rules;

use serde_json::{Map, Value};

use crate::map::{MapDocument, ObjectEntry, RoomEntry, RoomName};

pub use report::SanitizeReport;
pub use rules::{
    CONTROLLER_RESET_FIELDS, HIGHWAY_FIELDS, Preset, RuleOverrides, RuleSet, THORIUM,
    TRANSIENT_TYPES,
};

/// Apply `rules` to every room of `document`.
pub fn sanitize(document: MapDocument, rules: &RuleSet) -> MapDocument {
    sanitize_with_report(document, rules).0
}

/// Same as [`sanitize`], also returning what was dropped and reset.
pub fn sanitize_with_report(
    document: MapDocument,
    rules: &RuleSet,
) -> (MapDocument, SanitizeReport) {
    let mut report = SanitizeReport::new();

    let MapDocument { rooms, extra } = document;
    let rooms = rooms
        .into_iter()
        .map(|room| sanitize_room(room, rules, &mut report))
        .collect();

    (MapDocument { rooms, extra }, report)
}

fn sanitize_room(room: RoomEntry, rules: &RuleSet, report: &mut SanitizeReport) -> RoomEntry {
    let RoomEntry {
        room: name,
        objects,
        mut fields,
    } = room;
    report.rooms += 1;

    let highway = match name.parse::<RoomName>() {
        Ok(parsed) => parsed.is_highway(),
        Err(_) => {
            report.malformed_room_names += 1;
            false
        }
    };
    if highway {
        report.highway_rooms += 1;
    }

    if rules.strip_non_highway_fields && !highway {
        let before = fields.len();
        fields = without_keys(fields, &rules.highway_fields);
        if fields.len() != before {
            report.rooms_stripped += 1;
        }
    }

    let objects_in = objects.len();
    let objects: Vec<ObjectEntry> = objects
        .into_iter()
        .filter_map(|object| {
            if rules.drops(&object) {
                report.record_drop(object.kind().unwrap_or_default());
                return None;
            }
            if object.kind() == Some("controller") {
                report.controllers_reset += 1;
                return Some(reset_controller(object, rules));
            }
            Some(object)
        })
        .collect();
    report.objects_kept += objects.len();

    tracing::debug!(
        room = %name,
        highway,
        kept = objects.len(),
        dropped = objects_in - objects.len(),
        "sanitized room"
    );

    RoomEntry {
        room: name,
        objects,
        fields,
    }
}

/// Rebuild a controller without its reset fields and with `level` forced to 0.
fn reset_controller(object: ObjectEntry, rules: &RuleSet) -> ObjectEntry {
    let kept = without_keys(object.into_fields(), &rules.controller_reset_fields);
    let mut fields: Map<String, Value> = kept
        .into_iter()
        .map(|(key, value)| {
            if key == "level" {
                (key, Value::from(0))
            } else {
                (key, value)
            }
        })
        .collect();

    if !fields.contains_key("level") {
        fields.insert("level".to_string(), Value::from(0));
    }
    ObjectEntry::new(fields)
}

fn without_keys(fields: Map<String, Value>, keys: &[String]) -> Map<String, Value> {
    fields
        .into_iter()
        .filter(|(key, _)| !keys.contains(key))
        .collect()
}
