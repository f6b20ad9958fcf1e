//! Per-line classification of long-listing output.

use std::fmt;
use std::sync::OnceLock;

use logging::debug_log;
use regex::Regex;

use crate::date::{DateFormat, DateFormats, date_candidate};
use crate::state::ParseState;

const OWNER_TOKEN: usize = 2;
const GROUP_TOKEN: usize = 3;

/// Default header pattern: one word followed by a block count, as in
/// `total 24` or the localised `insgesamt 24`.
pub fn default_total_pattern() -> &'static Regex {
    static TOTAL_RE: OnceLock<Regex> = OnceLock::new();
    TOTAL_RE.get_or_init(|| Regex::new(r"^\w+\s+\d+$").expect("valid regex"))
}

/// What a single listing line turned out to be.
#[derive(Debug, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// `total N` summary.
    Total,
    /// Whitespace-only separator; a directory declaration should follow.
    Blank,
    /// `dir/sub:` declaration, returned without its trailing colon.
    PrefixDeclaration(&'a str),
    /// A declaration was expected but this line is not one.
    PendingPrefix,
    /// An entry with a located path.
    Record(DataRecord<'a>),
    /// A line that could not be split into columns and a path.
    Unparseable(Unparseable),
}

/// Reason a candidate data line was skipped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Unparseable {
    /// Fewer tokens than the fixed columns require.
    TooFewFields {
        /// Tokens present on the line.
        found: usize,
    },
    /// Tokens 5 through 7 match no configured date format.
    UnrecognizedDate {
        /// The joined date candidate.
        candidate: String,
    },
    /// Nothing follows the date columns.
    MissingPath,
}

impl fmt::Display for Unparseable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFewFields { found } => {
                write!(f, "expected more than 7 fields, found {found}")
            }
            Self::UnrecognizedDate { candidate } => write!(
                f,
                "unrecognized date format '{candidate}'; ambiguous start-index for path in listing"
            ),
            Self::MissingPath => f.write_str("no path follows the date columns"),
        }
    }
}

/// A data line split into its fixed columns and trailing path.
#[derive(Debug, PartialEq, Eq)]
pub struct DataRecord<'a> {
    line: &'a str,
    tokens: Vec<&'a str>,
    path: &'a str,
    date_pattern: &'static str,
}

impl<'a> DataRecord<'a> {
    /// The original line.
    pub fn line(&self) -> &'a str {
        self.line
    }

    /// Mode column, e.g. `drwxr-xr-x`.
    pub fn mode(&self) -> &'a str {
        self.tokens[0]
    }

    /// Third column: owner name or uid depending on the dialect.
    pub fn owner(&self) -> &'a str {
        self.tokens[OWNER_TOKEN]
    }

    /// Fourth column: group name or gid depending on the dialect.
    pub fn group(&self) -> &'a str {
        self.tokens[GROUP_TOKEN]
    }

    /// Path relative to the current directory declaration, leading whitespace
    /// removed. May contain spaces.
    pub fn path(&self) -> &'a str {
        self.path
    }

    /// Pattern of the date format that located the path.
    pub fn date_pattern(&self) -> &'static str {
        self.date_pattern
    }
}

/// Classifies lines using a header pattern and a date format table.
#[derive(Clone, Debug)]
pub struct LineClassifier {
    total_pattern: Regex,
    date_formats: DateFormats,
}

impl Default for LineClassifier {
    fn default() -> Self {
        Self::new(default_total_pattern().clone(), DateFormats::standard())
    }
}

impl LineClassifier {
    /// Creates a classifier from explicit settings.
    #[must_use]
    pub fn new(total_pattern: Regex, date_formats: DateFormats) -> Self {
        Self {
            total_pattern,
            date_formats,
        }
    }

    /// Header pattern in use.
    pub fn total_pattern(&self) -> &Regex {
        &self.total_pattern
    }

    /// Date formats in trial order.
    pub fn date_formats(&self) -> &DateFormats {
        &self.date_formats
    }

    /// Classifies `line` given the parser's current `state`.
    ///
    /// Checks run in a fixed order: header, blank, pending declaration, data.
    /// Header and blank detection apply in every state.
    pub fn classify<'a>(&self, line: &'a str, state: ParseState) -> LineKind<'a> {
        if self.total_pattern.is_match(line) {
            return LineKind::Total;
        }
        if line.trim().is_empty() {
            return LineKind::Blank;
        }
        if state.expects_prefix() {
            return match line.strip_suffix(':') {
                Some(directory) => LineKind::PrefixDeclaration(directory),
                None => LineKind::PendingPrefix,
            };
        }
        match self.split_record(line) {
            Ok(record) => LineKind::Record(record),
            Err(reason) => LineKind::Unparseable(reason),
        }
    }

    fn split_record<'a>(&self, line: &'a str) -> Result<DataRecord<'a>, Unparseable> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let candidate = date_candidate(&tokens).ok_or(Unparseable::TooFewFields {
            found: tokens.len(),
        })?;
        let format: &DateFormat = self
            .date_formats
            .detect(&candidate)
            .ok_or_else(|| Unparseable::UnrecognizedDate {
                candidate: candidate.clone(),
            })?;
        debug_log!(
            Date,
            1,
            "date '{}' matched '{}'",
            candidate,
            format.pattern()
        );

        let path = path_after_token(line, &tokens, format.last_token())
            .ok_or(Unparseable::MissingPath)?;

        Ok(DataRecord {
            line,
            tokens,
            path,
            date_pattern: format.pattern(),
        })
    }
}

/// Returns the text following token `last` of `line`, minus one separator
/// character and any further leading whitespace.
///
/// Tokens are located left to right so that a path or earlier column sharing
/// text with the date token cannot move the cut point.
pub(crate) fn path_after_token<'a>(
    line: &'a str,
    tokens: &[&str],
    last: usize,
) -> Option<&'a str> {
    let mut cursor = 0;
    for token in tokens.get(..=last)? {
        let offset = line[cursor..].find(token)?;
        cursor += offset + token.len();
    }

    let mut rest = line[cursor..].chars();
    rest.next()?;
    let path = rest.as_str().trim_start();
    (!path.is_empty()).then_some(path)
}

#[cfg(test)]
mod tests;
