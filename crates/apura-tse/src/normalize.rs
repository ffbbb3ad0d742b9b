//! Normalization of raw tally documents into ranked, display-ready
//! tables.
//!
//! The pipeline is three pure stages. [`normalize`] decodes names and
//! formats numbers, [`rank`] orders candidates by counted votes, and
//! [`project`] folds the ranked list into a name-keyed table.
//! [`transform`] composes all three.

use apura_core::locale::{group_thousands, Locale};

use crate::types::SimplifiedTally;

/// Rendered in place of a numeric cell when the wire text fails to
/// parse. Keeps a bad candidate row visible instead of failing the
/// whole cycle.
const NAN_SENTINEL: &str = "NaN";

/// A candidate normalized for display, still carrying its parsed count
/// for ranking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedCandidate {
    /// Candidate name with the `&apos;` entity decoded.
    pub name: String,
    /// Parsed vote count, `None` when `vap` is not numeric.
    pub vote_count: Option<u64>,
    /// Locale-grouped vote count, or `"NaN"`.
    pub votes: String,
    /// Renormalized percentage with a `%` suffix, or `"NaN%"`.
    pub percentage: String,
}

/// One row of the final table; the parsed count has been dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub name: String,
    pub votes: String,
    pub percentage: String,
}

/// Result table keyed by candidate name, iterated in rank order.
///
/// Inserting a row under an already-present name overwrites that row's
/// values in place: the first insertion fixes the position, the last
/// one supplies the values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultTable {
    rows: Vec<TableRow>,
}

impl ResultTable {
    fn insert(&mut self, row: TableRow) {
        if let Some(existing) = self.rows.iter_mut().find(|r| r.name == row.name) {
            existing.votes = row.votes;
            existing.percentage = row.percentage;
        } else {
            self.rows.push(row);
        }
    }

    /// Rows in rank order.
    #[must_use]
    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Decodes the escaped apostrophe entity in a candidate name. The
/// endpoint emits no other entity in the name field.
fn decode_name(raw: &str) -> String {
    raw.replace("&apos;", "'")
}

fn parse_votes(raw: &str) -> Option<u64> {
    raw.trim().parse::<u64>().ok()
}

/// Accepts either a comma or a dot decimal separator.
fn parse_percentage(raw: &str) -> Option<f64> {
    raw.trim().replace(',', ".").parse::<f64>().ok()
}

/// Renders a parsed percentage with a `%` suffix. The round-trip
/// through `f64` drops trailing fraction zeros (`"45,50"` becomes
/// `"45.5%"`, `"50,0"` becomes `"50%"`) and always uses a dot decimal
/// separator, whatever the display locale.
fn format_percentage(value: Option<f64>) -> String {
    value.map_or_else(|| format!("{NAN_SENTINEL}%"), |v| format!("{v}%"))
}

fn format_votes(count: Option<u64>, locale: Locale) -> String {
    count.map_or_else(|| NAN_SENTINEL.to_string(), |v| group_thousands(v, locale))
}

/// Stage 1: decodes and formats every candidate in document order.
#[must_use]
pub fn normalize(tally: &SimplifiedTally, locale: Locale) -> Vec<RankedCandidate> {
    tally
        .cand
        .iter()
        .map(|cand| {
            let vote_count = parse_votes(&cand.vap);
            RankedCandidate {
                name: decode_name(&cand.nm),
                vote_count,
                votes: format_votes(vote_count, locale),
                percentage: format_percentage(parse_percentage(&cand.pvap)),
            }
        })
        .collect()
}

/// Stage 2: orders by vote count, highest first. Unparseable counts
/// sort last; ties keep their input order.
#[must_use]
pub fn rank(mut candidates: Vec<RankedCandidate>) -> Vec<RankedCandidate> {
    candidates.sort_by(|a, b| b.vote_count.cmp(&a.vote_count));
    candidates
}

/// Stage 3: folds the ranked list into the name-keyed table.
#[must_use]
pub fn project(candidates: Vec<RankedCandidate>) -> ResultTable {
    let mut table = ResultTable::default();
    for cand in candidates {
        table.insert(TableRow {
            name: cand.name,
            votes: cand.votes,
            percentage: cand.percentage,
        });
    }
    table
}

/// The full pipeline: [`normalize`], then [`rank`], then [`project`].
#[must_use]
pub fn transform(tally: &SimplifiedTally, locale: Locale) -> ResultTable {
    project(rank(normalize(tally, locale)))
}
