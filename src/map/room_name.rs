use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Horizontal {
    West,
    East,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Vertical {
    North,
    South,
}

/// A parsed room coordinate such as `W12N7`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RoomName {
    pub horizontal: Horizontal,
    pub x: u8,
    pub vertical: Vertical,
    pub y: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid room name '{name}': {reason}")]
pub struct RoomNameError {
    pub name: String,
    pub reason: &'static str,
}

impl RoomName {
    /// Highway rooms sit on a sector border: either coordinate is a multiple of 10.
    pub fn is_highway(&self) -> bool {
        self.x % 10 == 0 || self.y % 10 == 0
    }

    /// Deposit resource the map generator assigns to this room's quadrant.
    pub fn quadrant_deposit(&self) -> &'static str {
        match (self.horizontal, self.vertical) {
            (Horizontal::West, Vertical::North) => "silicon",
            (Horizontal::West, Vertical::South) => "biomass",
            (Horizontal::East, Vertical::North) => "metal",
            (Horizontal::East, Vertical::South) => "mist",
        }
    }
}

/// Highway check on a raw name. Names that do not parse are not highways.
pub fn is_highway_room(name: &str) -> bool {
    name.parse::<RoomName>()
        .map(|room| room.is_highway())
        .unwrap_or(false)
}

impl FromStr for RoomName {
    type Err = RoomNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason| RoomNameError {
            name: s.to_string(),
            reason,
        };

        let horizontal = match s.as_bytes().first() {
            Some(b'W') => Horizontal::West,
            Some(b'E') => Horizontal::East,
            _ => return Err(invalid("expected 'W' or 'E' prefix")),
        };
        let rest = &s[1..];

        let split = rest
            .find(['N', 'S'])
            .ok_or_else(|| invalid("expected 'N' or 'S' after the x coordinate"))?;
        let (x_digits, rest) = rest.split_at(split);
        let vertical = if rest.starts_with('N') {
            Vertical::North
        } else {
            Vertical::South
        };
        let y_digits = &rest[1..];

        let x = parse_coordinate(x_digits)
            .ok_or_else(|| invalid("x coordinate must be 1-2 digits"))?;
        let y = parse_coordinate(y_digits)
            .ok_or_else(|| invalid("y coordinate must be 1-2 digits"))?;

        Ok(RoomName {
            horizontal,
            x,
            vertical,
            y,
        })
    }
}

fn parse_coordinate(digits: &str) -> Option<u8> {
    if !(1..=2).contains(&digits.len()) || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

impl fmt::Display for RoomName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let h = match self.horizontal {
            Horizontal::West => 'W',
            Horizontal::East => 'E',
        };
        let v = match self.vertical {
            Vertical::North => 'N',
            Vertical::South => 'S',
        };
        write!(f, "{}{}{}{}", h, self.x, v, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_quadrants() {
        let room: RoomName = "W12N7".parse().unwrap();
        assert_eq!(room.horizontal, Horizontal::West);
        assert_eq!(room.x, 12);
        assert_eq!(room.vertical, Vertical::North);
        assert_eq!(room.y, 7);

        let room: RoomName = "E0S99".parse().unwrap();
        assert_eq!(room.horizontal, Horizontal::East);
        assert_eq!(room.x, 0);
        assert_eq!(room.vertical, Vertical::South);
        assert_eq!(room.y, 99);
    }

    #[test]
    fn highway_when_either_coordinate_divisible_by_ten() {
        assert!(is_highway_room("W10N20"));
        assert!(is_highway_room("E10S3"));
        assert!(is_highway_room("W3N0"));
        assert!(is_highway_room("E0S0"));
        assert!(!is_highway_room("W13N27"));
        assert!(!is_highway_room("W5N5"));
    }

    #[test]
    fn malformed_names_are_not_highways() {
        for name in [
            "", "W", "W10", "W10N", "WN10", "W100N10", "W10N100", "w10n10", "X10N10",
            "W10X10", " W10N10", "W10N10 ", "W1aN10", "sim",
        ] {
            assert!(name.parse::<RoomName>().is_err(), "{name:?} should not parse");
            assert!(!is_highway_room(name), "{name:?} should not be a highway");
        }
    }

    #[test]
    fn error_names_the_room() {
        let err = "Q1N1".parse::<RoomName>().unwrap_err();
        assert_eq!(err.name, "Q1N1");
        assert!(err.to_string().contains("'Q1N1'"));
    }

    #[test]
    fn quadrant_deposits() {
        let deposit = |name: &str| name.parse::<RoomName>().unwrap().quadrant_deposit();
        assert_eq!(deposit("W10N1"), "silicon");
        assert_eq!(deposit("W10S1"), "biomass");
        assert_eq!(deposit("E10N1"), "metal");
        assert_eq!(deposit("E10S1"), "mist");
    }

    #[test]
    fn display_round_trips() {
        for name in ["W12N7", "E0S0", "W99S10"] {
            assert_eq!(name.parse::<RoomName>().unwrap().to_string(), name);
        }
    }
}
