use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// A point on the EDSS scale, 0 to 10 in half steps.
///
/// Stored as the number of half steps (0..=20). Displays and serialises as
/// its canonical label: whole values have no decimal point (`"5"`), half
/// values carry one digit (`"4.5"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdssScore(u8);

impl EdssScore {
    pub const MAX_HALF_STEPS: u8 = 20;

    pub const ZERO: Self = Self(0);
    pub const ONE: Self = Self(2);
    pub const ONE_HALF: Self = Self(3);
    pub const TWO: Self = Self(4);
    pub const TWO_HALF: Self = Self(5);
    pub const THREE: Self = Self(6);
    pub const THREE_HALF: Self = Self(7);
    pub const FOUR: Self = Self(8);
    pub const FOUR_HALF: Self = Self(9);
    pub const FIVE: Self = Self(10);
    pub const FIVE_HALF: Self = Self(11);
    pub const SIX: Self = Self(12);
    pub const SIX_HALF: Self = Self(13);
    pub const SEVEN: Self = Self(14);
    pub const SEVEN_HALF: Self = Self(15);
    pub const EIGHT: Self = Self(16);
    pub const EIGHT_HALF: Self = Self(17);
    pub const NINE: Self = Self(18);
    pub const NINE_HALF: Self = Self(19);
    pub const TEN: Self = Self(20);

    /// Every point of the scale in ascending order. 0.5 belongs to the
    /// scale even though the decision rules never produce it.
    pub const ALL: [Self; 21] = {
        let mut all = [Self(0); 21];
        let mut i = 0;
        while i < all.len() {
            all[i] = Self(i as u8);
            i += 1;
        }
        all
    };

    pub const fn from_half_steps(half_steps: u8) -> Option<Self> {
        if half_steps <= Self::MAX_HALF_STEPS {
            Some(Self(half_steps))
        } else {
            None
        }
    }

    pub const fn half_steps(self) -> u8 {
        self.0
    }

    pub fn as_f64(self) -> f64 {
        f64::from(self.0) / 2.0
    }
}

impl fmt::Display for EdssScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.0 / 2;
        if self.0 % 2 == 0 {
            write!(f, "{whole}")
        } else {
            write!(f, "{whole}.5")
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("not a point on the EDSS scale: {0:?}")]
pub struct ParseEdssScoreError(String);

impl FromStr for EdssScore {
    type Err = ParseEdssScoreError;

    /// Accepts canonical labels and their padded forms (`"5"`, `"5.0"`,
    /// `"4.5"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseEdssScoreError(s.to_string());
        let trimmed = s.trim();
        let (whole, fraction) = trimmed.split_once('.').unwrap_or((trimmed, "0"));
        let whole: u8 = whole.parse().map_err(|_| err())?;
        let half = match fraction {
            "0" => 0,
            "5" => 1,
            _ => return Err(err()),
        };
        whole
            .checked_mul(2)
            .and_then(|h| h.checked_add(half))
            .and_then(Self::from_half_steps)
            .ok_or_else(err)
    }
}

impl Serialize for EdssScore {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for EdssScore {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        label.parse().map_err(serde::de::Error::custom)
    }
}
