//! Display locales for vote-count formatting.
//!
//! The tally endpoint serves Brazilian data, so pt-BR grouping is the
//! default. Only the thousands separator varies between locales;
//! percentages always use a dot decimal separator because they are
//! renormalized through numeric parsing rather than locale-formatted.

use std::fmt;

/// Display locale controlling the thousands separator of vote counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    /// Brazilian Portuguese, period-grouped: `60.345.999`.
    #[default]
    PtBr,
    /// US English, comma-grouped: `60,345,999`.
    EnUs,
}

impl Locale {
    /// Parses a BCP 47 tag. Only the two supported tags are recognized,
    /// case-sensitively.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "pt-BR" => Some(Self::PtBr),
            "en-US" => Some(Self::EnUs),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_tag(self) -> &'static str {
        match self {
            Self::PtBr => "pt-BR",
            Self::EnUs => "en-US",
        }
    }

    /// Separator inserted between three-digit groups.
    #[must_use]
    pub fn thousands_separator(self) -> char {
        match self {
            Self::PtBr => '.',
            Self::EnUs => ',',
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

/// Formats an integer with the locale's thousands grouping:
/// `group_thousands(60_345_999, Locale::PtBr)` yields `"60.345.999"`.
///
/// Values below 1000 come back ungrouped.
#[must_use]
pub fn group_thousands(value: u64, locale: Locale) -> String {
    let digits = value.to_string();
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(locale.thousands_separator());
        }
        grouped.push(ch);
    }
    grouped
}
