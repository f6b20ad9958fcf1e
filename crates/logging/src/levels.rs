//! crates/logging/src/levels.rs
//! Flag enums and level structures for info and debug verbosity.

/// Info flags for diagnostic categories.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InfoFlag {
    /// Per-pass listing summaries.
    Listing,
    /// Reconciliation of numeric and symbolic passes.
    Merge,
}

impl InfoFlag {
    /// Every info flag, in declaration order.
    pub const ALL: [Self; 2] = [Self::Listing, Self::Merge];

    /// Token used on the command line and in tracing targets.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Listing => "listing",
            Self::Merge => "merge",
        }
    }
}

/// Debug flags for diagnostic categories.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DebugFlag {
    /// Line classification (headers, unparseable records).
    Classify,
    /// Date column detection.
    Date,
    /// Per-key merge decisions.
    Merge,
    /// Ownership column extraction.
    Own,
    /// Path prefix tracking.
    Prefix,
}

impl DebugFlag {
    /// Every debug flag, in declaration order.
    pub const ALL: [Self; 5] = [
        Self::Classify,
        Self::Date,
        Self::Merge,
        Self::Own,
        Self::Prefix,
    ];

    /// Token used on the command line and in tracing targets.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Classify => "classify",
            Self::Date => "date",
            Self::Merge => "merge",
            Self::Own => "own",
            Self::Prefix => "prefix",
        }
    }
}

/// Info verbosity levels for each flag.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InfoLevels {
    /// Listing summary level.
    pub listing: u8,
    /// Merge summary level.
    pub merge: u8,
}

impl InfoLevels {
    /// Get the level for a specific flag.
    pub fn get(&self, flag: InfoFlag) -> u8 {
        match flag {
            InfoFlag::Listing => self.listing,
            InfoFlag::Merge => self.merge,
        }
    }

    /// Set the level for a specific flag.
    pub fn set(&mut self, flag: InfoFlag, level: u8) {
        match flag {
            InfoFlag::Listing => self.listing = level,
            InfoFlag::Merge => self.merge = level,
        }
    }

    /// Set all flags to the specified level.
    pub fn set_all(&mut self, level: u8) {
        self.listing = level;
        self.merge = level;
    }
}

/// Debug verbosity levels for each flag.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DebugLevels {
    /// Line classification level.
    pub classify: u8,
    /// Date detection level.
    pub date: u8,
    /// Merge decision level.
    pub merge: u8,
    /// Ownership extraction level.
    pub own: u8,
    /// Path prefix level.
    pub prefix: u8,
}

impl DebugLevels {
    /// Get the level for a specific flag.
    pub fn get(&self, flag: DebugFlag) -> u8 {
        match flag {
            DebugFlag::Classify => self.classify,
            DebugFlag::Date => self.date,
            DebugFlag::Merge => self.merge,
            DebugFlag::Own => self.own,
            DebugFlag::Prefix => self.prefix,
        }
    }

    /// Set the level for a specific flag.
    pub fn set(&mut self, flag: DebugFlag, level: u8) {
        match flag {
            DebugFlag::Classify => self.classify = level,
            DebugFlag::Date => self.date = level,
            DebugFlag::Merge => self.merge = level,
            DebugFlag::Own => self.own = level,
            DebugFlag::Prefix => self.prefix = level,
        }
    }

    /// Set all flags to the specified level.
    pub fn set_all(&mut self, level: u8) {
        self.classify = level;
        self.date = level;
        self.merge = level;
        self.own = level;
        self.prefix = level;
    }
}
