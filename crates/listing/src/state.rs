/// Position of the parser relative to directory declarations.
///
/// A blank line in recursive output ends one directory's block; the next
/// non-blank line names the directory whose entries follow.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ParseState {
    /// Lines are entries of the current directory.
    #[default]
    Normal,
    /// A blank line was seen and a `dir:` declaration is expected.
    ExpectPrefix,
}

impl ParseState {
    /// Returns `true` while waiting for a directory declaration.
    #[must_use]
    pub const fn expects_prefix(self) -> bool {
        matches!(self, Self::ExpectPrefix)
    }
}
