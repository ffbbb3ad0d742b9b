//! Console formatting for tally frames.
//!
//! Pure string builders. The watch loop owns the actual writes, so
//! layout is testable without capturing stdout.

use apura_tse::{ResultTable, SimplifiedTally};

const NAME_HEADER: &str = "CANDIDATE";
const VOTES_HEADER: &str = "VOTES";
const PERCENTAGE_HEADER: &str = "PERCENTAGE";

/// Gap between columns.
const COLUMN_GAP: usize = 2;

/// Formats the ranked table with an uppercase header row. Rows appear
/// in the table's iteration order, i.e. rank order. Column widths adapt
/// to the longest cell.
pub(crate) fn format_table(table: &ResultTable) -> String {
    if table.is_empty() {
        return "no candidate totals in this snapshot\n".to_string();
    }

    let name_width = column_width(
        NAME_HEADER,
        table.rows().iter().map(|row| row.name.as_str()),
    );
    let votes_width = column_width(
        VOTES_HEADER,
        table.rows().iter().map(|row| row.votes.as_str()),
    );

    let mut out = String::new();
    out.push_str(&format!(
        "{NAME_HEADER:<name_width$}{VOTES_HEADER:<votes_width$}{PERCENTAGE_HEADER}\n"
    ));
    for row in table.rows() {
        out.push_str(&format!(
            "{:<name_width$}{:<votes_width$}{}\n",
            row.name, row.votes, row.percentage
        ));
    }
    out
}

/// Header line naming when the endpoint generated this snapshot.
/// `None` without a generation date; a bare time is not meaningful.
pub(crate) fn generated_at_line(tally: &SimplifiedTally) -> Option<String> {
    match (tally.dg.as_deref(), tally.hg.as_deref()) {
        (Some(date), Some(time)) => Some(format!("tally generated at {date} {time}")),
        (Some(date), None) => Some(format!("tally generated at {date}")),
        (None, _) => None,
    }
}

fn column_width<'a>(header: &str, cells: impl Iterator<Item = &'a str>) -> usize {
    cells
        .map(|cell| cell.chars().count())
        .chain(std::iter::once(header.chars().count()))
        .max()
        .unwrap_or_default()
        + COLUMN_GAP
}
