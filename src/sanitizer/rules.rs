use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::MapCleanError;
use crate::map::ObjectEntry;

/// Objects that only exist while a room is being played.
pub const TRANSIENT_TYPES: [&str; 3] = ["ruin", "spawn", "constructionSite"];

/// Controller keys carrying ownership or progression state.
pub const CONTROLLER_RESET_FIELDS: [&str; 10] = [
    "safeMode",
    "safeModeAvailable",
    "safeModeCooldown",
    "user",
    "isPowerEnabled",
    "downgradeTime",
    "progress",
    "progressTotal",
    "hits",
    "hitsMax",
];

/// Room keys that only make sense on highway rooms.
pub const HIGHWAY_FIELDS: [&str; 2] = ["bus", "depositType"];

/// Mineral type of the thorium season's reactor fuel.
pub const THORIUM: &str = "T";

/// Named built-in rule sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    /// Drop transient objects, reset controllers, strip highway fields off normal rooms.
    #[default]
    Classic,
    /// Like `Classic`, plus reactors and thorium minerals, and room fields left alone.
    Thorium,
}

impl Preset {
    pub fn name(self) -> &'static str {
        match self {
            Preset::Classic => "classic",
            Preset::Thorium => "thorium",
        }
    }

    pub fn rules(self) -> RuleSet {
        match self {
            Preset::Classic => RuleSet::classic(),
            Preset::Thorium => RuleSet::thorium(),
        }
    }
}

impl FromStr for Preset {
    type Err = MapCleanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "classic" => Ok(Preset::Classic),
            "thorium" => Ok(Preset::Thorium),
            _ => Err(MapCleanError::InvalidPreset(s.to_string())),
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Everything the sanitizer needs to know about what to drop and reset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSet {
    /// Object `type`s removed from every room.
    pub drop_types: Vec<String>,
    /// `mineral` objects with this `mineralType` are removed.
    pub excluded_mineral: Option<String>,
    /// Remove `highway_fields` from rooms that are not highways.
    pub strip_non_highway_fields: bool,
    pub highway_fields: Vec<String>,
    /// Keys removed from every controller (which also gets `level: 0`).
    pub controller_reset_fields: Vec<String>,
}

impl RuleSet {
    pub fn classic() -> Self {
        RuleSet {
            drop_types: owned(&TRANSIENT_TYPES),
            excluded_mineral: None,
            strip_non_highway_fields: true,
            highway_fields: owned(&HIGHWAY_FIELDS),
            controller_reset_fields: owned(&CONTROLLER_RESET_FIELDS),
        }
    }

    pub fn thorium() -> Self {
        let mut drop_types = owned(&TRANSIENT_TYPES);
        drop_types.push("reactor".to_string());

        RuleSet {
            drop_types,
            excluded_mineral: Some(THORIUM.to_string()),
            strip_non_highway_fields: false,
            highway_fields: owned(&HIGHWAY_FIELDS),
            controller_reset_fields: owned(&CONTROLLER_RESET_FIELDS),
        }
    }

    /// Returns true if the object must not appear in the output.
    pub fn drops(&self, object: &ObjectEntry) -> bool {
        let Some(kind) = object.kind() else {
            return false;
        };

        if self.drop_types.iter().any(|t| t == kind) {
            return true;
        }

        match (&self.excluded_mineral, kind) {
            (Some(excluded), "mineral") => {
                object.get("mineralType").and_then(|v| v.as_str()) == Some(excluded.as_str())
            }
            _ => false,
        }
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        RuleSet::classic()
    }
}

/// Per-key replacements for a preset, read from the `[rules]` config table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuleOverrides {
    #[serde(default)]
    pub drop_types: Option<Vec<String>>,

    /// An empty string turns the mineral exclusion off.
    #[serde(default)]
    pub excluded_mineral: Option<String>,

    #[serde(default)]
    pub strip_non_highway_fields: Option<bool>,

    #[serde(default)]
    pub highway_fields: Option<Vec<String>>,

    #[serde(default)]
    pub controller_reset_fields: Option<Vec<String>>,
}

impl RuleOverrides {
    pub fn apply(self, mut rules: RuleSet) -> RuleSet {
        if let Some(drop_types) = self.drop_types {
            rules.drop_types = drop_types;
        }
        if let Some(mineral) = self.excluded_mineral {
            rules.excluded_mineral = Some(mineral).filter(|m| !m.is_empty());
        }
        if let Some(strip) = self.strip_non_highway_fields {
            rules.strip_non_highway_fields = strip;
        }
        if let Some(fields) = self.highway_fields {
            rules.highway_fields = fields;
        }
        if let Some(fields) = self.controller_reset_fields {
            rules.controller_reset_fields = fields;
        }
        rules
    }
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
