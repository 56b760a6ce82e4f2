//! Core value types used by Candidex state.

use chrono::{DateTime, Utc};

/// One job-applicant record from the static dataset.
///
/// Records are loaded once at startup and never mutated afterwards; the
/// engine only ever derives filtered/sorted views of them.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    /// Unique identifier within the dataset.
    pub id: u64,
    /// Full display name.
    pub name: String,
    /// Contact email address.
    pub email: String,
    /// Role applied for (free text drawn from a small set, e.g. "Engineer").
    pub role: String,
    /// Whole years of professional experience.
    pub experience_years: u32,
    /// Whether the candidate has a registered RFC (Mexican taxpayer id).
    #[serde(rename = "hasRFC")]
    pub has_rfc: bool,
    /// Migration status flag.
    pub is_migrant: bool,
    /// Registration timestamp (RFC 3339 in the dataset file).
    pub created_at: DateTime<Utc>,
}

/// Sort direction for the results table, over `created_at`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    /// Most recently registered first (application default).
    #[default]
    Descending,
    /// Oldest registrations first.
    Ascending,
}

impl SortDirection {
    /// Return the string key used in the settings file for this direction.
    ///
    /// Inputs: none
    ///
    /// Output: Static config key string.
    #[must_use]
    pub const fn as_config_key(self) -> &'static str {
        match self {
            Self::Descending => "descending",
            Self::Ascending => "ascending",
        }
    }

    /// Parse a sort direction from its settings key or common aliases.
    ///
    /// Inputs: `s` config string (case-insensitive).
    ///
    /// Output: `Some(SortDirection)` on recognized value; `None` otherwise.
    #[must_use]
    pub fn from_config_key(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "descending" | "desc" | "newest" | "recent" => Some(Self::Descending),
            "ascending" | "asc" | "oldest" => Some(Self::Ascending),
            _ => None,
        }
    }

    /// Return the opposite direction.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Descending => Self::Ascending,
            Self::Ascending => Self::Descending,
        }
    }
}

/// Which text box currently receives typed characters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Focus {
    /// Free-text search over name and email.
    #[default]
    Search,
    /// Minimum-experience numeric box.
    MinExperience,
}

#[cfg(test)]
mod tests {
    use super::SortDirection;

    #[test]
    /// What: SortDirection config key mapping roundtrip and alias handling
    ///
    /// - Input: Known keys and aliases; unknown key
    /// - Output: Correct mapping to enum variants; None for unknown
    fn state_sort_direction_config_roundtrip_and_aliases() {
        assert_eq!(SortDirection::Descending.as_config_key(), "descending");
        assert_eq!(SortDirection::Ascending.as_config_key(), "ascending");
        assert_eq!(
            SortDirection::from_config_key("descending"),
            Some(SortDirection::Descending)
        );
        assert_eq!(
            SortDirection::from_config_key("DESC"),
            Some(SortDirection::Descending)
        );
        assert_eq!(
            SortDirection::from_config_key("newest"),
            Some(SortDirection::Descending)
        );
        assert_eq!(
            SortDirection::from_config_key("asc"),
            Some(SortDirection::Ascending)
        );
        assert_eq!(
            SortDirection::from_config_key(" oldest "),
            Some(SortDirection::Ascending)
        );
        assert_eq!(SortDirection::from_config_key("sideways"), None);
    }

    #[test]
    /// What: flipped inverts the direction both ways
    ///
    /// - Input: Both variants
    /// - Output: The opposite variant each time
    fn state_sort_direction_flipped_is_involutive() {
        assert_eq!(
            SortDirection::Descending.flipped(),
            SortDirection::Ascending
        );
        assert_eq!(
            SortDirection::Ascending.flipped().flipped(),
            SortDirection::Ascending
        );
    }
}
