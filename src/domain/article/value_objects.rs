// src/domain/article/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use chrono::{Datelike, NaiveDate};
use std::fmt;

/// Upper bound the catalog uses for "no end date".
pub const OPEN_ENDED: NaiveDate = match NaiveDate::from_ymd_opt(2099, 12, 31) {
    Some(date) => date,
    None => panic!("invalid open-ended sentinel"),
};

/// Level value the level-set procedure reads as "keep the current level".
pub const LEVEL_UNCHANGED: i32 = -1;

const DOTTED_FORMAT: &str = "%d.%m.%Y";
const ISO_FORMAT: &str = "%Y-%m-%d";
const MIN_YEAR: i32 = 1900;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ArticleId(i64);

impl ArticleId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation(
                "article id must be positive".into(),
            ))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<ArticleId> for i64 {
    fn from(value: ArticleId) -> Self {
        value.0
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleName(String);

impl ArticleName {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("article name cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ArticleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<ArticleName> for String {
    fn from(value: ArticleName) -> Self {
        value.0
    }
}

/// Depth of an article in the catalog tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ArticleLevel(i32);

impl ArticleLevel {
    pub fn new(level: i32) -> DomainResult<Self> {
        if level < 0 {
            return Err(DomainError::Validation(format!(
                "article level must not be negative, got {level}"
            )));
        }
        Ok(Self(level))
    }
}

impl From<ArticleLevel> for i32 {
    fn from(value: ArticleLevel) -> Self {
        value.0
    }
}

/// Sort position of an article among its siblings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ArticleOrdinal(i32);

impl ArticleOrdinal {
    pub fn new(ordinal: i32) -> DomainResult<Self> {
        if ordinal < 0 {
            return Err(DomainError::Validation(format!(
                "article ordinal must not be negative, got {ordinal}"
            )));
        }
        Ok(Self(ordinal))
    }
}

impl From<ArticleOrdinal> for i32 {
    fn from(value: ArticleOrdinal) -> Self {
        value.0
    }
}

/// Calendar date an attribute value becomes (or stops being) effective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ValidityDate(NaiveDate);

impl ValidityDate {
    /// Accepts `DD.MM.YYYY` or ISO `YYYY-MM-DD`.
    pub fn parse(input: &str) -> DomainResult<Self> {
        let trimmed = input.trim();
        let format = if has_shape(trimmed, b'.', [2, 5]) {
            DOTTED_FORMAT
        } else if has_shape(trimmed, b'-', [4, 7]) {
            ISO_FORMAT
        } else {
            return Err(invalid_date(trimmed));
        };

        let date = NaiveDate::parse_from_str(trimmed, format).map_err(|_| invalid_date(trimmed))?;
        if date.year() < MIN_YEAR {
            return Err(DomainError::Validation(format!(
                "date '{trimmed}' is before {MIN_YEAR}"
            )));
        }
        Ok(Self(date))
    }

    pub fn open_ended() -> Self {
        Self(OPEN_ENDED)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

// chrono's %Y takes any digit count and a sign, so the four-digit year is
// enforced here: ten ASCII chars, separators at fixed offsets, digits elsewhere.
fn has_shape(input: &str, separator: u8, separator_at: [usize; 2]) -> bool {
    let bytes = input.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| {
            if separator_at.contains(&i) {
                *b == separator
            } else {
                b.is_ascii_digit()
            }
        })
}

fn invalid_date(input: &str) -> DomainError {
    DomainError::Validation(format!(
        "invalid date '{input}', expected DD.MM.YYYY or YYYY-MM-DD"
    ))
}

impl From<NaiveDate> for ValidityDate {
    fn from(value: NaiveDate) -> Self {
        Self(value)
    }
}

impl fmt::Display for ValidityDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(ISO_FORMAT))
    }
}

/// Half-open range `[from, until)` an edit is effective in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ValidityWindow {
    from: ValidityDate,
    until: ValidityDate,
}

impl ValidityWindow {
    pub fn new(from: ValidityDate, until: ValidityDate) -> DomainResult<Self> {
        if from >= until {
            return Err(DomainError::Validation(format!(
                "validity window is empty: {from} is not before {until}"
            )));
        }
        Ok(Self { from, until })
    }

    pub fn open_ended(from: ValidityDate) -> DomainResult<Self> {
        Self::new(from, ValidityDate::open_ended())
    }

    pub fn valid_from(&self) -> ValidityDate {
        self.from
    }

    pub fn valid_until(&self) -> ValidityDate {
        self.until
    }
}
