
#[path = "anchors/scanner_max_finding.rs"]
pub mod scanner_max_finding;

#[path = "anchors/medusa_round_trip.rs"]
pub mod medusa_round_trip;

#[path = "anchors/echidna_setup_suppression.rs"]
pub mod echidna_setup_suppression;

#[path = "anchors/empty_failure_policy.rs"]
pub mod empty_failure_policy;

#[path = "anchors/numbering_continuity.rs"]
pub mod numbering_continuity;

#[path = "anchors/dialect_selection.rs"]
pub mod dialect_selection;
