use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreErrorCode};

/// Numbering epoch of the item data. The same index names a different
/// item in each generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Generation {
    Gen1,
    Gen2,
}

impl Generation {
    pub const ALL: [Generation; 2] = [Generation::Gen1, Generation::Gen2];

    pub fn number(&self) -> u8 {
        match *self {
            Self::Gen1 => 1,
            Self::Gen2 => 2,
        }
    }

    pub fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(Self::Gen1),
            2 => Some(Self::Gen2),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match *self {
            Self::Gen1 => "Generation 1",
            Self::Gen2 => "Generation 2",
        }
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Generation {
    type Err = CoreError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let normalized = raw.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "1" | "gen1" | "generation1" => Ok(Self::Gen1),
            "2" | "gen2" | "generation2" => Ok(Self::Gen2),
            _ => Err(CoreError::new(
                CoreErrorCode::Parse,
                format!("invalid generation '{raw}'; expected 1|2|gen1|gen2"),
            )),
        }
    }
}
