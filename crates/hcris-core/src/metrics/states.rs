//! Provider-number to state lookup.
//!
//! The first two digits of a Medicare provider number identify the state
//! or territory that certified the provider. The table is an immutable
//! constant owned by this module; prefixes without an entry resolve to
//! [`UNKNOWN_STATE`] rather than being dropped.

use std::collections::BTreeMap;

use hcris_model::ReportRecord;

/// Name reported for provider prefixes with no table entry.
pub const UNKNOWN_STATE: &str = "Unknown";

/// Sorted by prefix for binary search.
const STATE_NAMES: &[(u64, &str)] = &[
    (1, "Alabama"),
    (2, "Alaska"),
    (3, "Arizona"),
    (4, "Arkansas"),
    (5, "California"),
    (6, "Colorado"),
    (7, "Connecticut"),
    (8, "Delaware"),
    (9, "District of Columbia"),
    (10, "Florida"),
    (11, "Georgia"),
    (12, "Hawaii"),
    (13, "Idaho"),
    (14, "Illinois"),
    (15, "Indiana"),
    (16, "Iowa"),
    (17, "Kansas"),
    (18, "Kentucky"),
    (19, "Louisiana"),
    (20, "Maine"),
    (21, "Maryland"),
    (22, "Massachusetts"),
    (23, "Michigan"),
    (24, "Minnesota"),
    (25, "Mississippi"),
    (26, "Missouri"),
    (27, "Montana"),
    (28, "Nebraska"),
    (29, "Nevada"),
    (30, "New Hampshire"),
    (31, "New Jersey"),
    (32, "New Mexico"),
    (33, "New York"),
    (34, "North Carolina"),
    (35, "North Dakota"),
    (36, "Ohio"),
    (37, "Oklahoma"),
    (38, "Oregon"),
    (39, "Pennsylvania"),
    (40, "Puerto Rico"),
    (41, "Rhode Island"),
    (42, "South Carolina"),
    (43, "South Dakota"),
    (44, "Tennessee"),
    (45, "Texas"),
    (46, "Utah"),
    (47, "Vermont"),
    (48, "Virgin Islands"),
    (49, "Virginia"),
    (50, "Washington"),
    (51, "West Virginia"),
    (52, "Wisconsin"),
    (53, "Wyoming"),
    (55, "California"),
    (56, "Canada"),
    (59, "Mexico"),
    (64, "American Samoa"),
    (65, "Guam"),
    (66, "Commonwealth of the Northern Marianas Islands"),
    (67, "Texas"),
    (68, "Florida"),
    (69, "Florida"),
    (70, "Kansas"),
    (71, "Louisiana"),
    (72, "Ohio"),
    (73, "Pennsylvania"),
    (74, "Texas"),
    (75, "California"),
    (76, "Iowa"),
    (77, "Minnesota"),
    (78, "Illinois"),
    (80, "Maryland"),
];

/// State name for a two-digit provider prefix.
pub fn state_for_prefix(prefix: u64) -> Option<&'static str> {
    STATE_NAMES
        .binary_search_by_key(&prefix, |(code, _)| *code)
        .ok()
        .map(|index| STATE_NAMES[index].1)
}

/// State name for a full provider number (`prefix = provider / 10_000`).
pub fn provider_state(provider: u64) -> &'static str {
    state_for_prefix(provider / 10_000).unwrap_or(UNKNOWN_STATE)
}

/// Provider -> state mapping for every provider in the report index.
pub fn provider_states(reports: &[ReportRecord]) -> BTreeMap<u64, &'static str> {
    reports
        .iter()
        .map(|report| (report.prvdr_num, provider_state(report.prvdr_num)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_sorted_for_binary_search() {
        for pair in STATE_NAMES.windows(2) {
            assert!(pair[0].0 < pair[1].0, "{} before {}", pair[0].0, pair[1].0);
        }
    }

    #[test]
    fn known_prefixes_resolve() {
        assert_eq!(provider_state(50001), "California");
        assert_eq!(provider_state(140063), "Illinois");
        assert_eq!(state_for_prefix(40), Some("Puerto Rico"));
    }

    #[test]
    fn unknown_prefix_resolves_to_unknown() {
        assert_eq!(provider_state(990001), UNKNOWN_STATE);
        assert_eq!(state_for_prefix(99), None);
    }
}
