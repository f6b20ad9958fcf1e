use crate::octal;

/// One of the nine rwx permission bits shown in a mode column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Permission {
    /// Owner may read.
    OwnerRead,
    /// Owner may write.
    OwnerWrite,
    /// Owner may execute or search.
    OwnerExecute,
    /// Group may read.
    GroupRead,
    /// Group may write.
    GroupWrite,
    /// Group may execute or search.
    GroupExecute,
    /// Everyone may read.
    WorldRead,
    /// Everyone may write.
    WorldWrite,
    /// Everyone may execute or search.
    WorldExecute,
}

impl Permission {
    /// All bits in mode-column order.
    pub const ALL: [Self; 9] = [
        Self::OwnerRead,
        Self::OwnerWrite,
        Self::OwnerExecute,
        Self::GroupRead,
        Self::GroupWrite,
        Self::GroupExecute,
        Self::WorldRead,
        Self::WorldWrite,
        Self::WorldExecute,
    ];

    /// Column of this bit in a ten character mode string. Column 0 holds the
    /// entry type and is never addressed by a permission.
    #[must_use]
    pub const fn mode_index(self) -> usize {
        match self {
            Self::OwnerRead => 1,
            Self::OwnerWrite => 2,
            Self::OwnerExecute => 3,
            Self::GroupRead => 4,
            Self::GroupWrite => 5,
            Self::GroupExecute => 6,
            Self::WorldRead => 7,
            Self::WorldWrite => 8,
            Self::WorldExecute => 9,
        }
    }

    /// POSIX octal weight of this bit.
    #[must_use]
    pub const fn octal_bit(self) -> u32 {
        match self {
            Self::OwnerRead => octal::OCTAL_OWNER_READ,
            Self::OwnerWrite => octal::OCTAL_OWNER_WRITE,
            Self::OwnerExecute => octal::OCTAL_OWNER_EXECUTE,
            Self::GroupRead => octal::OCTAL_GROUP_READ,
            Self::GroupWrite => octal::OCTAL_GROUP_WRITE,
            Self::GroupExecute => octal::OCTAL_GROUP_EXECUTE,
            Self::WorldRead => octal::OCTAL_WORLD_READ,
            Self::WorldWrite => octal::OCTAL_WORLD_WRITE,
            Self::WorldExecute => octal::OCTAL_WORLD_EXECUTE,
        }
    }

    /// Character written into the mode column when the bit is granted.
    #[must_use]
    pub const fn enabled_marker(self) -> char {
        match self {
            Self::OwnerRead | Self::GroupRead | Self::WorldRead => 'r',
            Self::OwnerWrite | Self::GroupWrite | Self::WorldWrite => 'w',
            Self::OwnerExecute | Self::GroupExecute | Self::WorldExecute => 'x',
        }
    }

    /// Returns `true` when `mode` carries this bit.
    #[must_use]
    pub const fn is_set_in_octal(self, mode: u32) -> bool {
        match self {
            Self::OwnerRead => octal::is_owner_readable_in_octal(mode),
            Self::OwnerWrite => octal::is_owner_writable_in_octal(mode),
            Self::OwnerExecute => octal::is_owner_executable_in_octal(mode),
            Self::GroupRead => octal::is_group_readable_in_octal(mode),
            Self::GroupWrite => octal::is_group_writable_in_octal(mode),
            Self::GroupExecute => octal::is_group_executable_in_octal(mode),
            Self::WorldRead => octal::is_world_readable_in_octal(mode),
            Self::WorldWrite => octal::is_world_writable_in_octal(mode),
            Self::WorldExecute => octal::is_world_executable_in_octal(mode),
        }
    }
}
