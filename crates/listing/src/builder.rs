use regex::Regex;

use crate::classify::{LineClassifier, default_total_pattern};
use crate::date::DateFormats;
use crate::parser::ListingParser;
use crate::sink::LineSink;
use crate::strategy::OwnershipStrategy;

/// Configures how a [`ListingParser`] recognises header and date columns.
///
/// The defaults match GNU, BSD and macOS `ls` in the C and English locales.
/// Listings produced under other locales may need a different header pattern
/// (`insgesamt` is already covered) or additional date formats.
///
/// ```
/// use listing::{DateFormat, DateFormats, ListingParserBuilder, SymbolicNames, DiscardLines};
/// use regex::Regex;
///
/// let parser = ListingParserBuilder::new()
///     .total_pattern(Regex::new(r"^totaal \d+$").unwrap())
///     .date_formats(DateFormats::new(vec![DateFormat::ISO_DATE_TIME]))
///     .build(SymbolicNames, DiscardLines);
/// assert!(parser.attributes().is_empty());
/// ```
#[derive(Clone, Debug)]
pub struct ListingParserBuilder {
    total_pattern: Option<Regex>,
    date_formats: DateFormats,
}

impl Default for ListingParserBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ListingParserBuilder {
    /// Creates a builder with the standard header pattern and date table.
    #[must_use]
    pub fn new() -> Self {
        Self {
            total_pattern: None,
            date_formats: DateFormats::standard(),
        }
    }

    /// Replaces the pattern that identifies `total N` header lines.
    #[must_use]
    pub fn total_pattern(mut self, pattern: Regex) -> Self {
        self.total_pattern = Some(pattern);
        self
    }

    /// Replaces the ordered date format table.
    #[must_use]
    pub fn date_formats(mut self, formats: DateFormats) -> Self {
        self.date_formats = formats;
        self
    }

    /// Builds a parser that applies `strategy` and forwards lines to `sink`.
    pub fn build<O, S>(self, strategy: O, sink: S) -> ListingParser<O, S>
    where
        O: OwnershipStrategy,
        S: LineSink,
    {
        let total_pattern = self
            .total_pattern
            .unwrap_or_else(|| default_total_pattern().clone());
        ListingParser::from_classifier(
            LineClassifier::new(total_pattern, self.date_formats),
            strategy,
            sink,
        )
    }
}
