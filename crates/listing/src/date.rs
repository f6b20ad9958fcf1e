//! Date column detection.
//!
//! The timestamp is the only part of a long listing whose width depends on
//! locale and tool, so it decides where the path starts. Tokens 5, 6 and 7 are
//! joined with single spaces and tried against an ordered table of formats.
//! A format matches when it parses a prefix of that text; whatever follows
//! (usually the start of the path) is ignored. The first match tells the
//! parser which token is the last one belonging to the date.

use logging::debug_log;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::parsing::Parsed;

/// Index of the first token considered part of the date.
pub const DATE_FIRST_TOKEN: usize = 5;
/// Index of the last token fed into the date candidate.
pub const DATE_LAST_CANDIDATE_TOKEN: usize = 7;

const MONTH_DAY_YEAR: &[BorrowedFormatItem<'static>] =
    format_description!("[month repr:short case_sensitive:false] [day padding:none] [year]");
const MONTH_DAY_TIME: &[BorrowedFormatItem<'static>] = format_description!(
    "[month repr:short case_sensitive:false] [day padding:none] [hour padding:none]:[minute]"
);
const ISO_DATE_TIME: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour padding:none]:[minute]");
const DAY_MONTH_TIME: &[BorrowedFormatItem<'static>] = format_description!(
    "[day padding:none] [month repr:short case_sensitive:false] [hour padding:none]:[minute]"
);
const DAY_MONTH_YEAR: &[BorrowedFormatItem<'static>] =
    format_description!("[day padding:none] [month repr:short case_sensitive:false] [year]");

/// One accepted timestamp layout.
#[derive(Clone, Copy, Debug)]
pub struct DateFormat {
    pattern: &'static str,
    items: &'static [BorrowedFormatItem<'static>],
    last_token: usize,
}

impl DateFormat {
    /// `MMM dd yyyy`, used by `ls` for entries older than six months.
    pub const MONTH_DAY_YEAR: Self = Self::new("MMM dd yyyy", MONTH_DAY_YEAR, 7);
    /// `MMM dd HH:mm`, used by `ls` for recent entries.
    pub const MONTH_DAY_TIME: Self = Self::new("MMM dd HH:mm", MONTH_DAY_TIME, 7);
    /// `yyyy-MM-dd HH:mm`, GNU `--time-style=long-iso`. Spans only two tokens.
    pub const ISO_DATE_TIME: Self = Self::new("yyyy-MM-dd HH:mm", ISO_DATE_TIME, 6);
    /// `dd MMM HH:mm`, day-first locales on macOS and FreeBSD.
    pub const DAY_MONTH_TIME: Self = Self::new("dd MMM HH:mm", DAY_MONTH_TIME, 7);
    /// `dd MMM yyyy`, day-first locales on macOS and FreeBSD.
    pub const DAY_MONTH_YEAR: Self = Self::new("dd MMM yyyy", DAY_MONTH_YEAR, 7);

    /// Creates a format from a `time` format description.
    ///
    /// `last_token` is the index, within the whitespace-split line, of the
    /// final token the date occupies when this format matches.
    #[must_use]
    pub const fn new(
        pattern: &'static str,
        items: &'static [BorrowedFormatItem<'static>],
        last_token: usize,
    ) -> Self {
        Self {
            pattern,
            items,
            last_token,
        }
    }

    /// Human-readable pattern, for diagnostics.
    #[must_use]
    pub const fn pattern(&self) -> &'static str {
        self.pattern
    }

    /// Index of the last token covered by the date.
    #[must_use]
    pub const fn last_token(&self) -> usize {
        self.last_token
    }

    /// Returns `true` when a prefix of `candidate` parses with this format.
    #[must_use]
    pub fn matches(&self, candidate: &str) -> bool {
        Parsed::new()
            .parse_items(candidate.as_bytes(), self.items)
            .is_ok()
    }
}

/// Ordered table of accepted date formats. The first match wins.
#[derive(Clone, Debug)]
pub struct DateFormats {
    formats: Vec<DateFormat>,
}

impl DateFormats {
    /// The five layouts produced by GNU, BSD and macOS `ls`, in the order
    /// they are tried.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            formats: vec![
                DateFormat::MONTH_DAY_YEAR,
                DateFormat::MONTH_DAY_TIME,
                DateFormat::ISO_DATE_TIME,
                DateFormat::DAY_MONTH_TIME,
                DateFormat::DAY_MONTH_YEAR,
            ],
        }
    }

    /// Builds a table from an explicit list.
    #[must_use]
    pub fn new(formats: Vec<DateFormat>) -> Self {
        Self { formats }
    }

    /// Appends a format that is tried after all existing ones.
    pub fn push(&mut self, format: DateFormat) -> &mut Self {
        self.formats.push(format);
        self
    }

    /// Iterates the formats in trial order.
    pub fn iter(&self) -> impl Iterator<Item = &DateFormat> {
        self.formats.iter()
    }

    /// Number of formats in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.formats.len()
    }

    /// Returns `true` when no format is configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.formats.is_empty()
    }

    /// Returns the first format whose layout matches `candidate`.
    pub fn detect(&self, candidate: &str) -> Option<&DateFormat> {
        self.formats.iter().find(|format| {
            let matched = format.matches(candidate);
            if !matched {
                debug_log!(
                    Date,
                    2,
                    "failed to parse date '{}' using format '{}'",
                    candidate,
                    format.pattern()
                );
            }
            matched
        })
    }
}

impl Default for DateFormats {
    fn default() -> Self {
        Self::standard()
    }
}

impl From<Vec<DateFormat>> for DateFormats {
    fn from(formats: Vec<DateFormat>) -> Self {
        Self::new(formats)
    }
}

/// Joins the candidate window of `tokens`, or returns `None` when the line
/// has too few tokens to carry a date and a path.
pub(crate) fn date_candidate(tokens: &[&str]) -> Option<String> {
    if tokens.len() <= DATE_LAST_CANDIDATE_TOKEN {
        return None;
    }
    Some(tokens[DATE_FIRST_TOKEN..=DATE_LAST_CANDIDATE_TOKEN].join(" "))
}
