use std::fmt;

use serde::{Deserialize, Serialize};

/// Active/inactive selector sent with every search and sub-table request.
///
/// The value is never stored on its own; it is always derived from the two
/// "Active entries" / "Inactive entries" checkboxes via
/// [`ActiveFilter::from_toggles`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ActiveFilter {
    /// Only records whose validity window has not ended.
    #[default]
    #[serde(rename = "Y")]
    Active,
    /// Only records whose validity window has ended.
    #[serde(rename = "N")]
    Inactive,
    /// Everything.
    #[serde(rename = "ALL")]
    All,
}

impl ActiveFilter {
    /// Equal toggles (both checked or both unchecked) mean `ALL`.
    pub fn from_toggles(show_active: bool, show_inactive: bool) -> Self {
        match (show_active, show_inactive) {
            (true, false) => Self::Active,
            (false, true) => Self::Inactive,
            _ => Self::All,
        }
    }

    /// Wire value (`Y`, `N` or `ALL`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "Y",
            Self::Inactive => "N",
            Self::All => "ALL",
        }
    }

    /// Whether a record with the given activity passes this filter.
    pub fn includes(self, is_active: bool) -> bool {
        match self {
            Self::Active => is_active,
            Self::Inactive => !is_active,
            Self::All => true,
        }
    }
}

impl fmt::Display for ActiveFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::ActiveFilter;

    #[test]
    fn equal_toggles_select_everything() {
        assert_eq!(ActiveFilter::from_toggles(true, true), ActiveFilter::All);
        assert_eq!(ActiveFilter::from_toggles(false, false), ActiveFilter::All);
    }

    #[test]
    fn single_toggle_selects_its_side() {
        assert_eq!(ActiveFilter::from_toggles(true, false), ActiveFilter::Active);
        assert_eq!(ActiveFilter::from_toggles(false, true), ActiveFilter::Inactive);
    }

    #[test]
    fn serializes_to_wire_codes() {
        assert_eq!(serde_json::to_string(&ActiveFilter::Active).expect("serialize"), "\"Y\"");
        assert_eq!(serde_json::to_string(&ActiveFilter::Inactive).expect("serialize"), "\"N\"");
        assert_eq!(serde_json::to_string(&ActiveFilter::All).expect("serialize"), "\"ALL\"");
        let parsed: ActiveFilter = serde_json::from_str("\"ALL\"").expect("deserialize");
        assert_eq!(parsed, ActiveFilter::All);
    }

    #[test]
    fn includes_matches_record_activity() {
        assert!(ActiveFilter::Active.includes(true));
        assert!(!ActiveFilter::Active.includes(false));
        assert!(ActiveFilter::Inactive.includes(false));
        assert!(ActiveFilter::All.includes(false) && ActiveFilter::All.includes(true));
    }
}
