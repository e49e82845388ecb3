//! Item ordering.
//!
//! # Invariants
//! - The sort is stable in both directions: items that compare equal under the
//!   active key keep their input order.
//! - `Descending` negates the comparator. It is not "reverse the ascending
//!   list", so titles without a leading number (the sentinel) come first.

use crate::model::Item;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Rank given to titles that carry no recognizable leading index.
pub const NO_TITLE_NUMBER: u64 = 999_999;

// Digits are ASCII-only on purpose: `\d` would also accept other scripts.
static TITLE_NUMBER_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"^([0-9]+)\.\s*",
        r"^([0-9]+)、\s*",
        r"^([0-9]+)）\s*",
        r"^\(([0-9]+)\)\s*",
        r"^第([0-9]+)[条项]\s*",
        r"^【([0-9]+)】\s*",
        r"^([0-9]+):\s*",
        r"^([0-9]+)-\s*",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("valid title number regex"))
    .collect()
});

/// Field an item listing is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortKey {
    #[default]
    CreatedAt,
    CopyCount,
    TitleNumber,
    /// Every pair compares equal, so input order is kept.
    Unordered,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::CreatedAt => "created_at",
            SortKey::CopyCount => "copy_count",
            SortKey::TitleNumber => "title_number",
            SortKey::Unordered => "none",
        }
    }

    /// Lenient lookup: names that are not recognized fall back to `Unordered`.
    pub fn from_name(name: &str) -> SortKey {
        name.parse().unwrap_or(SortKey::Unordered)
    }

    fn compare(&self, a: &Item, b: &Item) -> Ordering {
        match self {
            SortKey::CreatedAt => a.created_at.cmp(&b.created_at),
            SortKey::CopyCount => a.copy_count.cmp(&b.copy_count),
            SortKey::TitleNumber => {
                extract_title_number(&a.title).cmp(&extract_title_number(&b.title))
            }
            SortKey::Unordered => Ordering::Equal,
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "created_at" | "created" | "date" => Ok(SortKey::CreatedAt),
            "copy_count" | "copies" | "popular" => Ok(SortKey::CopyCount),
            "title_number" | "number" => Ok(SortKey::TitleNumber),
            "none" | "unordered" => Ok(SortKey::Unordered),
            other => Err(format!(
                "Unknown sort key: {} (expected created_at, copy_count, title_number or none)",
                other
            )),
        }
    }
}

impl Serialize for SortKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for SortKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(SortKey::from_name(&name))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SortDirection {
    #[serde(rename = "asc", alias = "ascending")]
    Ascending,
    #[default]
    #[serde(rename = "desc", alias = "descending")]
    Descending,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }

    fn apply(&self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Ascending),
            "desc" | "descending" => Ok(SortDirection::Descending),
            other => Err(format!(
                "Unknown sort order: {} (expected asc or desc)",
                other
            )),
        }
    }
}

/// Returns a newly ordered copy of `items`.
pub fn sort_items(items: &[Item], key: SortKey, direction: SortDirection) -> Vec<Item> {
    let mut sorted = items.to_vec();
    // slice::sort_by is stable
    sorted.sort_by(|a, b| direction.apply(key.compare(a, b)));
    sorted
}

/// Reads a human-authored leading index such as `12. `, `3、`, `(4) `,
/// `第5条` or `【6】` from the start of a title.
///
/// Patterns are tried in a fixed priority order and the first match wins.
/// Titles without one return [`NO_TITLE_NUMBER`]. Digit runs too long for a
/// `u64` saturate to `u64::MAX`.
pub fn extract_title_number(title: &str) -> u64 {
    TITLE_NUMBER_PATTERNS
        .iter()
        .find_map(|pattern| pattern.captures(title))
        .and_then(|caps| caps.get(1))
        .map(|digits| digits.as_str().parse().unwrap_or(u64::MAX))
        .unwrap_or(NO_TITLE_NUMBER)
}
