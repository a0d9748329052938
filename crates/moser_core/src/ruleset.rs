//! Birth/survival rulesets in `B…/S…` notation.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{CoreError, Result};

/// Largest neighbor count a Moore neighborhood can produce.
pub const MAX_NEIGHBOR_COUNT: u8 = 8;

/// A set of neighbor counts in `0..=8`, stored as a bitmask.
///
/// Iteration is always ascending, which keeps notation deterministic.
/// Serialized as an ascending list of integers.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Vec<u8>", into = "Vec<u8>")]
pub struct NeighborCounts(u16);

impl NeighborCounts {
    #[must_use]
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Every count from 0 to 8.
    #[must_use]
    pub const fn all() -> Self {
        Self((1 << (MAX_NEIGHBOR_COUNT + 1)) - 1)
    }

    /// Adds `count`; counts above 8 can never occur and are ignored.
    pub fn insert(&mut self, count: u8) -> bool {
        if count > MAX_NEIGHBOR_COUNT {
            return false;
        }
        let had = self.contains(count);
        self.0 |= 1 << count;
        !had
    }

    pub fn remove(&mut self, count: u8) {
        if count <= MAX_NEIGHBOR_COUNT {
            self.0 &= !(1 << count);
        }
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, count: u8) -> bool {
        count <= MAX_NEIGHBOR_COUNT && self.0 & (1 << count) != 0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Counts in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        (0..=MAX_NEIGHBOR_COUNT).filter(move |&n| self.contains(n))
    }

    /// Digits concatenated in ascending order, e.g. `"23"`.
    #[must_use]
    pub fn digits(&self) -> String {
        self.iter().map(|n| char::from(b'0' + n)).collect()
    }

    fn parse_digits(part: &str) -> Result<Self> {
        let mut counts = Self::empty();
        for ch in part.chars() {
            let digit = ch
                .to_digit(10)
                .ok_or_else(|| CoreError::notation(format!("'{ch}' is not a digit")))?;
            if digit > MAX_NEIGHBOR_COUNT as u32 {
                return Err(CoreError::notation(format!(
                    "neighbor count {digit} is out of range 0-8"
                )));
            }
            counts.insert(digit as u8);
        }
        Ok(counts)
    }
}

impl FromIterator<u8> for NeighborCounts {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut counts = Self::empty();
        for n in iter {
            counts.insert(n);
        }
        counts
    }
}

impl<const N: usize> From<[u8; N]> for NeighborCounts {
    fn from(counts: [u8; N]) -> Self {
        counts.into_iter().collect()
    }
}

impl From<Vec<u8>> for NeighborCounts {
    fn from(counts: Vec<u8>) -> Self {
        counts.into_iter().collect()
    }
}

impl From<NeighborCounts> for Vec<u8> {
    fn from(counts: NeighborCounts) -> Self {
        counts.iter().collect()
    }
}

impl fmt::Debug for NeighborCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// A named birth/survival rule pair.
///
/// Fields are private: a ruleset does not change after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ruleset {
    name: String,
    #[serde(rename = "birth_rules")]
    birth: NeighborCounts,
    #[serde(rename = "survival_rules")]
    survival: NeighborCounts,
    #[serde(default)]
    description: String,
}

impl Ruleset {
    pub fn new(
        name: impl Into<String>,
        birth: impl Into<NeighborCounts>,
        survival: impl Into<NeighborCounts>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            birth: birth.into(),
            survival: survival.into(),
            description: description.into(),
        }
    }

    /// Classic Life, B3/S23.
    #[must_use]
    pub fn conway() -> Self {
        Self::new(
            "Conway's Game of Life",
            [3],
            [2, 3],
            "The classic cellular automaton",
        )
    }

    /// Builds a ruleset from `B…/S…` notation.
    ///
    /// Letters are case-insensitive and either half may be empty (`B2/S`).
    pub fn from_notation(
        name: impl Into<String>,
        notation: &str,
        description: impl Into<String>,
    ) -> Result<Self> {
        let trimmed = notation.trim();
        let (birth_part, survival_part) = trimmed
            .split_once('/')
            .ok_or_else(|| CoreError::notation(format!("'{trimmed}' is missing '/'")))?;

        let birth_digits = strip_prefix_ignore_case(birth_part.trim(), 'b')
            .ok_or_else(|| CoreError::notation(format!("'{birth_part}' must start with 'B'")))?;
        let survival_digits = strip_prefix_ignore_case(survival_part.trim(), 's').ok_or_else(
            || CoreError::notation(format!("'{survival_part}' must start with 'S'")),
        )?;

        Ok(Self::new(
            name,
            NeighborCounts::parse_digits(birth_digits)?,
            NeighborCounts::parse_digits(survival_digits)?,
            description,
        ))
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn birth_rules(&self) -> NeighborCounts {
        self.birth
    }

    #[must_use]
    pub fn survival_rules(&self) -> NeighborCounts {
        self.survival
    }

    /// Canonical `B{birth}/S{survival}` string with ascending digits.
    #[must_use]
    pub fn notation(&self) -> String {
        format!("B{}/S{}", self.birth.digits(), self.survival.digits())
    }

    /// True when both rule sets match, whatever the names.
    #[must_use]
    pub fn has_same_rules(&self, other: &Ruleset) -> bool {
        self.birth == other.birth && self.survival == other.survival
    }

    /// Same rules under a different name and description.
    #[must_use]
    pub fn renamed(&self, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(name, self.birth, self.survival, description)
    }
}

impl fmt::Display for Ruleset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.notation())
    }
}

fn strip_prefix_ignore_case(s: &str, prefix: char) -> Option<&str> {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.eq_ignore_ascii_case(&prefix) => Some(chars.as_str()),
        _ => None,
    }
}
