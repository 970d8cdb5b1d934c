use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordering for a title's review listing.
///
/// Rating orders break ties by creation time, newest first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewSort {
    #[default]
    Newest,
    Oldest,
    Highest,
    Lowest,
}

impl ReviewSort {
    /// Parse a query-string value; anything unrecognised means `Newest`.
    pub fn from_param(value: Option<&str>) -> Self {
        match value.map(|v| v.trim().to_lowercase()).as_deref() {
            Some("oldest") => ReviewSort::Oldest,
            Some("highest") => ReviewSort::Highest,
            Some("lowest") => ReviewSort::Lowest,
            _ => ReviewSort::Newest,
        }
    }
}

impl fmt::Display for ReviewSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ReviewSort::Newest => "newest",
            ReviewSort::Oldest => "oldest",
            ReviewSort::Highest => "highest",
            ReviewSort::Lowest => "lowest",
        };
        write!(f, "{}", name)
    }
}
