//! Destinations for listing lines after they have been processed.

/// Receives every line a parser consumes, in order, after the parser has
/// finished with it.
///
/// Closures taking `&str` implement this trait, so a caller can print or
/// collect lines without defining a type.
pub trait LineSink {
    /// Accepts one line without its terminator.
    fn accept(&mut self, line: &str);
}

impl<F> LineSink for F
where
    F: FnMut(&str),
{
    fn accept(&mut self, line: &str) {
        self(line);
    }
}

impl LineSink for Vec<String> {
    fn accept(&mut self, line: &str) {
        self.push(line.to_owned());
    }
}

/// Sink that drops every line.
#[derive(Clone, Copy, Debug, Default)]
pub struct DiscardLines;

impl LineSink for DiscardLines {
    fn accept(&mut self, _line: &str) {}
}
