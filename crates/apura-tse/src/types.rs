//! Wire types for the TSE "dados simplificados" tally document.
//!
//! Field names mirror the JSON keys served by the endpoint, which uses
//! terse Portuguese abbreviations. The document carries many more keys
//! than modelled here; unmodelled keys are ignored on deserialization.

use serde::Deserialize;

/// Per-candidate totals, one element of the document's `cand` array.
#[derive(Debug, Clone, Deserialize)]
pub struct CandidateTally {
    /// Candidate display name ("nome"). Apostrophes arrive as the
    /// literal `&apos;` entity.
    pub nm: String,
    /// Absolute counted votes ("votos apurados") as decimal text.
    pub vap: String,
    /// Vote percentage ("percentual de votos apurados") as text with a
    /// comma decimal separator, e.g. `"50,90"`.
    pub pvap: String,
}

/// Root of the simplified tally document.
#[derive(Debug, Clone, Deserialize)]
pub struct SimplifiedTally {
    /// Candidate totals in endpoint order.
    pub cand: Vec<CandidateTally>,
    /// Percentage of totalized polling sections ("percentual de seções
    /// totalizadas"), e.g. `"99,89"`.
    #[serde(default)]
    pub pst: Option<String>,
    /// Percentage of installed polling sections. Tracks `pst`; the two
    /// are compared as a consistency signal.
    #[serde(default)]
    pub psi: Option<String>,
    /// Date this snapshot was generated ("data de geração").
    #[serde(default)]
    pub dg: Option<String>,
    /// Time this snapshot was generated ("hora de geração").
    #[serde(default)]
    pub hg: Option<String>,
}
