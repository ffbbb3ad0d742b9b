//! Client and normalization pipeline for the TSE ("Tribunal Superior
//! Eleitoral") simplified election-tally endpoint.
//!
//! [`client::TseClient`] fetches one tally snapshot; [`normalize`]
//! turns it into a ranked, display-ready table; [`turnout`] summarizes
//! the document's counted-sections figures.

pub mod client;
pub mod error;
pub mod normalize;
pub mod turnout;
pub mod types;

pub use client::TseClient;
pub use error::TseError;
pub use normalize::{normalize, project, rank, transform, RankedCandidate, ResultTable, TableRow};
pub use turnout::turnout_summary;
pub use types::{CandidateTally, SimplifiedTally};
