//! Calendar months and their spreadsheet columns
//!
//! Each sheet lays out one month per column. Months are entered by their
//! three-letter abbreviation, in Portuguese or English.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A calendar month
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

/// (Portuguese, English) abbreviations, in calendar order
const ABBREVIATIONS: [(&str, &str); 12] = [
    ("jan", "jan"),
    ("fev", "feb"),
    ("mar", "mar"),
    ("abr", "apr"),
    ("mai", "may"),
    ("jun", "jun"),
    ("jul", "jul"),
    ("ago", "aug"),
    ("set", "sep"),
    ("out", "oct"),
    ("nov", "nov"),
    ("dez", "dec"),
];

impl Month {
    /// All months in calendar order
    pub const ALL: [Month; 12] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    /// Zero-based position in the year
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Month from a zero-based position in the year
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Month containing the given date
    pub fn of_date(date: NaiveDate) -> Self {
        Self::ALL[date.month0() as usize]
    }

    /// Parse a three-letter abbreviation in either language
    ///
    /// Input is trimmed and matched case-insensitively.
    pub fn parse(token: &str) -> Option<Self> {
        let token = token.trim().to_lowercase();
        ABBREVIATIONS
            .iter()
            .position(|(pt, en)| *pt == token || *en == token)
            .and_then(Self::from_index)
    }

    /// Portuguese abbreviation
    pub fn portuguese(self) -> &'static str {
        ABBREVIATIONS[self.index()].0
    }

    /// English abbreviation
    pub fn english(self) -> &'static str {
        ABBREVIATIONS[self.index()].1
    }

    /// Every accepted token, deduplicated, in calendar order
    pub fn valid_tokens() -> Vec<&'static str> {
        let mut tokens = Vec::with_capacity(24);
        for (pt, en) in ABBREVIATIONS {
            tokens.push(pt);
            if en != pt {
                tokens.push(en);
            }
        }
        tokens
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Month::January => "January",
            Month::February => "February",
            Month::March => "March",
            Month::April => "April",
            Month::May => "May",
            Month::June => "June",
            Month::July => "July",
            Month::August => "August",
            Month::September => "September",
            Month::October => "October",
            Month::November => "November",
            Month::December => "December",
        };
        write!(f, "{}", name)
    }
}

/// Maps month tokens to the spreadsheet columns holding them
///
/// January sits in `first_column`, December eleven columns later.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthColumnMap {
    first_column: u32,
}

impl MonthColumnMap {
    /// Column holding January in the standard layout
    pub const DEFAULT_FIRST_COLUMN: u32 = 3;

    pub fn new(first_column: u32) -> Self {
        Self { first_column }
    }

    /// Column for a month token, or `None` if the token is not a month
    pub fn resolve(&self, token: &str) -> Option<u32> {
        Month::parse(token).map(|month| self.column_of(month))
    }

    /// Column holding the given month
    pub fn column_of(&self, month: Month) -> u32 {
        self.first_column + month.index() as u32
    }

    /// Month stored in the given column, if any
    pub fn month_at(&self, column: u32) -> Option<Month> {
        column
            .checked_sub(self.first_column)
            .and_then(|offset| Month::from_index(offset as usize))
    }

}

impl Default for MonthColumnMap {
    fn default() -> Self {
        Self::new(Self::DEFAULT_FIRST_COLUMN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synonyms_resolve_to_same_column() {
        let map = MonthColumnMap::default();
        for month in Month::ALL {
            assert_eq!(
                map.resolve(month.portuguese()),
                map.resolve(month.english()),
                "{} should resolve identically in both languages",
                month
            );
        }
        assert_eq!(map.resolve("fev"), Some(4));
        assert_eq!(map.resolve("feb"), Some(4));
    }

    #[test]
    fn test_columns_cover_contiguous_range() {
        let map = MonthColumnMap::default();
        let columns: Vec<u32> = Month::ALL.iter().map(|m| map.column_of(*m)).collect();
        assert_eq!(columns, (3..=14).collect::<Vec<_>>());
        assert_eq!(map.resolve("jan"), Some(3));
        assert_eq!(map.resolve("dez"), Some(14));
    }

    #[test]
    fn test_resolve_is_case_insensitive_and_trimmed() {
        let map = MonthColumnMap::default();
        assert_eq!(map.resolve("  MAR "), Some(5));
        assert_eq!(map.resolve("Ago"), Some(10));
        assert_eq!(map.resolve("Aug"), Some(10));
    }

    #[test]
    fn test_unrecognized_token() {
        let map = MonthColumnMap::default();
        assert_eq!(map.resolve("xyz"), None);
        assert_eq!(map.resolve(""), None);
        assert_eq!(map.resolve("march"), None);
    }

    #[test]
    fn test_month_at() {
        let map = MonthColumnMap::default();
        assert_eq!(map.month_at(3), Some(Month::January));
        assert_eq!(map.month_at(14), Some(Month::December));
        assert_eq!(map.month_at(2), None);
        assert_eq!(map.month_at(15), None);
    }

    #[test]
    fn test_valid_tokens() {
        let tokens = Month::valid_tokens();
        assert!(tokens.contains(&"fev"));
        assert!(tokens.contains(&"feb"));
        assert_eq!(tokens.iter().filter(|t| **t == "jan").count(), 1);
        assert_eq!(tokens.len(), 19);
    }

    #[test]
    fn test_of_date() {
        let date = NaiveDate::from_ymd_opt(2025, 10, 17).unwrap();
        assert_eq!(Month::of_date(date), Month::October);
    }
}
