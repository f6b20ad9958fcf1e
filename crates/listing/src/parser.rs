use std::io::BufRead;

use attributes::FileAttributes;
use logging::{debug_log, info_log};

use crate::builder::ListingParserBuilder;
use crate::classify::{DataRecord, LineClassifier, LineKind};
use crate::error::ListingResult;
use crate::map::AttributeMap;
use crate::sink::{DiscardLines, LineSink};
use crate::state::ParseState;
use crate::strategy::OwnershipStrategy;

/// Incremental parser for one recursive long listing.
///
/// Lines are fed one at a time with [`consume_line`](Self::consume_line) or
/// all at once with [`consume_reader`](Self::consume_reader). Every line is
/// handed to the sink after it has been processed, whether or not it produced
/// an entry.
///
/// # Examples
///
/// ```
/// use listing::{ListingParser, SymbolicNames};
///
/// let mut parser = ListingParser::new(SymbolicNames, Vec::<String>::new());
/// parser.consume_line("total 8").unwrap();
/// parser.consume_line("drwxr-xr-x 2 alice staff 4096 Jan 12 2023 dir").unwrap();
///
/// let attrs = parser.attributes().get("dir").unwrap();
/// assert_eq!(attrs.owner_name(), Some("alice"));
/// assert_eq!(parser.sink().len(), 2);
/// ```
#[derive(Debug)]
pub struct ListingParser<O, S> {
    classifier: LineClassifier,
    strategy: O,
    sink: S,
    attributes: AttributeMap,
    path_prefix: String,
    state: ParseState,
    lines: usize,
    skipped: usize,
    failed: bool,
}

impl<O: OwnershipStrategy, S: LineSink> ListingParser<O, S> {
    /// Creates a parser with the default header pattern and date formats.
    pub fn new(strategy: O, sink: S) -> Self {
        ListingParserBuilder::new().build(strategy, sink)
    }

    pub(crate) fn from_classifier(classifier: LineClassifier, strategy: O, sink: S) -> Self {
        Self {
            classifier,
            strategy,
            sink,
            attributes: AttributeMap::new(),
            path_prefix: String::new(),
            state: ParseState::Normal,
            lines: 0,
            skipped: 0,
            failed: false,
        }
    }

    /// Processes one line, without its terminator, then forwards it to the
    /// sink.
    ///
    /// # Errors
    ///
    /// Returns [`ListingError::DialectMismatch`](crate::ListingError::DialectMismatch)
    /// when the strategy rejects the ownership columns. No entry is recorded
    /// for that line, and the line is still forwarded.
    ///
    /// The pass is failed from then on: later lines are forwarded to the sink
    /// without being classified and no further entries are recorded. See
    /// [`is_failed`](Self::is_failed).
    pub fn consume_line(&mut self, line: &str) -> ListingResult<()> {
        let result = if self.failed {
            Ok(())
        } else {
            self.process(line)
        };
        if result.is_err() {
            self.failed = true;
        }
        self.lines += 1;
        self.sink.accept(line);
        result
    }

    /// Consumes every line of `reader`, stopping at the first error.
    ///
    /// Both `\n` and `\r\n` terminators are accepted. Bytes that are not
    /// valid UTF-8, such as a Latin-1 file name, are replaced with
    /// `U+FFFD` rather than rejected.
    ///
    /// # Errors
    ///
    /// Returns [`ListingError::Io`](crate::ListingError::Io) when reading
    /// fails, or the first error from [`consume_line`](Self::consume_line).
    pub fn consume_reader<R: BufRead>(&mut self, mut reader: R) -> ListingResult<()> {
        let mut buf = Vec::new();
        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            let line = String::from_utf8_lossy(strip_terminator(&buf));
            self.consume_line(&line)?;
        }
        info_log!(
            Listing,
            1,
            "{:?} listing: {} entries from {} lines, {} skipped",
            self.strategy.dialect(),
            self.attributes.len(),
            self.lines,
            self.skipped
        );
        Ok(())
    }

    fn process(&mut self, line: &str) -> ListingResult<()> {
        match self.classifier.classify(line, self.state) {
            LineKind::Total => {
                debug_log!(Classify, 2, "skipping total line '{}'", line);
            }
            LineKind::Blank => {
                debug_log!(Prefix, 1, "anticipating path prefix in next line");
                self.state = ParseState::ExpectPrefix;
            }
            LineKind::PrefixDeclaration(directory) => {
                self.path_prefix = normalize_prefix(directory);
                self.state = ParseState::Normal;
                debug_log!(Prefix, 1, "set path prefix to '{}'", self.path_prefix);
            }
            LineKind::PendingPrefix => {
                debug_log!(
                    Prefix,
                    1,
                    "path prefix not found in '{}', checking next line",
                    line
                );
            }
            LineKind::Record(record) => self.insert(&record)?,
            LineKind::Unparseable(reason) => {
                self.skipped += 1;
                debug_log!(Classify, 1, "unparseable line '{}': {}", line, reason);
            }
        }
        Ok(())
    }

    fn insert(&mut self, record: &DataRecord<'_>) -> ListingResult<()> {
        let mut attrs = FileAttributes::from_mode_line(record.mode());
        self.strategy.apply(record, &mut attrs)?;

        let key = join_path(&self.path_prefix, record.path());
        debug_log!(
            Classify,
            2,
            "entry '{}' ({}, date '{}')",
            key,
            record.mode(),
            record.date_pattern()
        );
        self.attributes.insert(key, attrs);
        Ok(())
    }
}

impl<O, S> ListingParser<O, S> {
    /// Entries recorded so far.
    pub fn attributes(&self) -> &AttributeMap {
        &self.attributes
    }

    /// Consumes the parser and returns its entries.
    pub fn into_attributes(self) -> AttributeMap {
        self.attributes
    }

    /// Active directory prefix, empty until a declaration is seen.
    pub fn path_prefix(&self) -> &str {
        &self.path_prefix
    }

    /// Returns `true` once a line has failed the pass.
    pub const fn is_failed(&self) -> bool {
        self.failed
    }

    /// Current position relative to directory declarations.
    pub const fn state(&self) -> ParseState {
        self.state
    }

    /// The pass-through sink.
    pub const fn sink(&self) -> &S {
        &self.sink
    }

    /// Consumes the parser and returns its entries and sink.
    pub fn into_parts(self) -> (AttributeMap, S) {
        (self.attributes, self.sink)
    }
}

/// Runs a complete pass over `reader` and returns the entries.
///
/// # Errors
///
/// Propagates the first error from
/// [`ListingParser::consume_reader`].
pub fn parse_listing<O, R>(strategy: O, reader: R) -> ListingResult<AttributeMap>
where
    O: OwnershipStrategy,
    R: BufRead,
{
    let mut parser = ListingParser::new(strategy, DiscardLines);
    parser.consume_reader(reader)?;
    Ok(parser.into_attributes())
}

fn strip_terminator(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

/// Turns a declaration (without its colon) into a prefix ending in `/`.
pub(crate) fn normalize_prefix(directory: &str) -> String {
    if directory.ends_with('/') {
        directory.to_owned()
    } else {
        format!("{directory}/")
    }
}

fn join_path(prefix: &str, path: &str) -> String {
    let mut key = String::with_capacity(prefix.len() + path.len());
    key.push_str(prefix);
    key.push_str(path);
    match key.len() - key.trim_start().len() {
        0 => key,
        leading => key.split_off(leading),
    }
}
