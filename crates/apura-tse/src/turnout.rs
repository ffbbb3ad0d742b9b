//! Consistency summary for the document's two counted-sections figures.

use crate::types::SimplifiedTally;

/// Builds the one-line counted-sections summary.
///
/// `pst` and `psi` describe the same quantity, so agreement is a health
/// signal. The comparison is strict string identity: two spellings of
/// the same number (`"99.5"` vs `"99,5"`) report as a mismatch, which
/// makes representation drift in the feed as visible as value drift.
///
/// Returns `None` when the document carries neither figure.
#[must_use]
pub fn turnout_summary(tally: &SimplifiedTally) -> Option<String> {
    match (tally.pst.as_deref(), tally.psi.as_deref()) {
        (None, None) => None,
        (Some(v), None) | (None, Some(v)) => Some(format!("sections tallied: {v}%")),
        (Some(a), Some(b)) if a == b => Some(format!("sections tallied: {a}%")),
        (Some(a), Some(b)) => Some(format!("sections tallied: {a}% or {b}%")),
    }
}
