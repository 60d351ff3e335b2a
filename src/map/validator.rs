use std::collections::HashSet;

use super::model::MapDocument;
use super::room_name::RoomName;

/// A non-fatal observation about an input map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub room: String,
    pub message: String,
}

impl ValidationError {
    fn new(room: &str, msg: impl Into<String>) -> Self {
        ValidationError {
            room: room.to_string(),
            message: msg.into(),
        }
    }
}

/// Collect findings that are worth a warning but never stop a pass.
pub fn validate_map(document: &MapDocument) -> Vec<ValidationError> {
    let mut errors: Vec<ValidationError> = Vec::new();
    let mut seen_rooms: HashSet<&str> = HashSet::new();

    for room in &document.rooms {
        if !seen_rooms.insert(room.room.as_str()) {
            errors.push(ValidationError::new(&room.room, "duplicate room entry"));
        }

        match room.room.parse::<RoomName>() {
            Ok(name) => {
                // Deposit type only matters on highways; elsewhere it gets stripped.
                if name.is_highway() {
                    if let Some(deposit) = room.fields.get("depositType").and_then(|v| v.as_str())
                    {
                        let expected = name.quadrant_deposit();
                        if deposit != expected {
                            errors.push(ValidationError::new(
                                &room.room,
                                format!(
                                    "depositType '{}' does not match quadrant deposit '{}'",
                                    deposit, expected
                                ),
                            ));
                        }
                    }
                }
            }
            Err(e) => {
                errors.push(ValidationError::new(
                    &room.room,
                    format!("{}; treated as a non-highway room", e.reason),
                ));
            }
        }

        let untyped = room.objects.iter().filter(|o| o.kind().is_none()).count();
        if untyped > 0 {
            errors.push(ValidationError::new(
                &room.room,
                format!("{} object(s) without a string 'type' are kept as-is", untyped),
            ));
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::load_map_from_str;

    #[test]
    fn clean_map_has_no_findings() {
        let doc = load_map_from_str(
            r#"{"rooms":[
                {"room":"W10N5","objects":[{"type":"source"}],"bus":true,"depositType":"silicon"},
                {"room":"E3S4","objects":[{"type":"controller"}]}
            ]}"#,
        )
        .unwrap();

        assert!(validate_map(&doc).is_empty());
    }

    #[test]
    fn reports_each_problem() {
        let doc = load_map_from_str(
            r#"{"rooms":[
                {"room":"W1N1","objects":[]},
                {"room":"W1N1","objects":[]},
                {"room":"nowhere","objects":[]},
                {"room":"E20S1","objects":[],"depositType":"silicon"},
                {"room":"W2N2","objects":[{"x":1},{"type":"source"},{"type":null}]}
            ]}"#,
        )
        .unwrap();

        let findings = validate_map(&doc);
        let rooms: Vec<&str> = findings.iter().map(|f| f.room.as_str()).collect();
        assert_eq!(rooms, ["W1N1", "nowhere", "E20S1", "W2N2"]);

        assert_eq!(findings[0].message, "duplicate room entry");
        assert!(findings[1].message.contains("non-highway"));
        assert!(findings[2].message.contains("'mist'"));
        assert!(findings[3].message.starts_with("2 object(s)"));
    }

    #[test]
    fn deposit_on_normal_room_is_not_checked() {
        let doc = load_map_from_str(
            r#"{"rooms":[{"room":"E3S3","objects":[],"depositType":"silicon"}]}"#,
        )
        .unwrap();

        assert!(validate_map(&doc).is_empty());
    }
}
