//! Small presentation helpers shared by the UI panels.

/// What: Render a tri-state boolean filter as a short label.
///
/// Inputs:
/// - `v`: Current filter value
/// - `yes`: Label when filtering for `true`
/// - `no`: Label when filtering for `false`
///
/// Output: "All" when unset, otherwise the matching label.
#[must_use]
pub fn tristate_label(v: Option<bool>, yes: &'static str, no: &'static str) -> &'static str {
    match v {
        None => "All",
        Some(true) => yes,
        Some(false) => no,
    }
}

/// What: Render the experience column cell text.
///
/// Inputs:
/// - `years`: Whole years of experience
///
/// Output: "1 yr" or "N yrs".
#[must_use]
pub fn experience_label(years: u32) -> String {
    if years == 1 {
        "1 yr".to_string()
    } else {
        format!("{years} yrs")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Tri-state labels cover all three states
    ///
    /// - Input: None, Some(true), Some(false)
    /// - Output: "All", yes label, no label
    fn ui_tristate_label_states() {
        assert_eq!(tristate_label(None, "Yes", "No"), "All");
        assert_eq!(tristate_label(Some(true), "Migrant", "Local"), "Migrant");
        assert_eq!(tristate_label(Some(false), "Migrant", "Local"), "Local");
    }

    #[test]
    /// What: Experience labels pluralize correctly
    ///
    /// - Input: 0, 1, 7 years
    /// - Output: "0 yrs", "1 yr", "7 yrs"
    fn ui_experience_label_pluralization() {
        assert_eq!(experience_label(0), "0 yrs");
        assert_eq!(experience_label(1), "1 yr");
        assert_eq!(experience_label(7), "7 yrs");
    }
}
