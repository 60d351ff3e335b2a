use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

/// Counters collected during one sanitization pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SanitizeReport {
    pub rooms: usize,
    pub highway_rooms: usize,
    /// Non-highway rooms that actually lost a field.
    pub rooms_stripped: usize,
    pub malformed_room_names: usize,
    pub objects_kept: usize,
    pub controllers_reset: usize,
    /// Dropped objects keyed by `type`.
    pub dropped: BTreeMap<String, usize>,
}

impl SanitizeReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_drop(&mut self, kind: &str) {
        *self.dropped.entry(kind.to_string()).or_insert(0) += 1;
    }

    pub fn objects_dropped(&self) -> usize {
        self.dropped.values().sum()
    }
}

impl fmt::Display for SanitizeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} rooms ({} highway, {} stripped), {} objects kept, {} dropped",
            self.rooms,
            self.highway_rooms,
            self.rooms_stripped,
            self.objects_kept,
            self.objects_dropped()
        )?;

        if !self.dropped.is_empty() {
            let parts: Vec<String> = self
                .dropped
                .iter()
                .map(|(kind, n)| format!("{kind}: {n}"))
                .collect();
            write!(f, " [{}]", parts.join(", "))?;
        }

        write!(f, ", {} controllers reset", self.controllers_reset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_lists_drops_by_type() {
        let mut report = SanitizeReport::new();
        report.rooms = 2;
        report.objects_kept = 5;
        report.controllers_reset = 1;
        report.record_drop("spawn");
        report.record_drop("ruin");
        report.record_drop("spawn");

        assert_eq!(report.objects_dropped(), 3);
        assert_eq!(
            report.to_string(),
            "2 rooms (0 highway, 0 stripped), 5 objects kept, 3 dropped [ruin: 1, spawn: 2], 1 controllers reset"
        );
    }
}
