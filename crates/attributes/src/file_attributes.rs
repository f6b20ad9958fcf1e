use std::fmt;

use crate::error::OctalModeError;
use crate::octal::PERMISSION_MASK;
use crate::permission::Permission;

/// Number of columns in a long-listing mode string (`drwxr-xr-x`).
pub const MODE_WIDTH: usize = 10;

const DISABLED_MARKER: char = '-';

/// Ownership and permission bits recovered for one listing entry.
///
/// The mode is stored as the literal characters of the listing's first column
/// so that entries can be transcribed verbatim and re-rendered unchanged. A
/// permission bit is considered granted whenever its column holds anything
/// other than `-`, which keeps `s`, `t`, and their upper-case variants
/// readable as "executable".
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FileAttributes {
    owner_id: Option<u32>,
    owner_name: Option<String>,
    group_id: Option<u32>,
    group_name: Option<String>,
    mode: [char; MODE_WIDTH],
}

impl Default for FileAttributes {
    fn default() -> Self {
        Self {
            owner_id: None,
            owner_name: None,
            group_id: None,
            group_name: None,
            mode: [DISABLED_MARKER; MODE_WIDTH],
        }
    }
}

impl FileAttributes {
    /// Creates a record with every permission disabled and no ownership.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a fully populated record.
    ///
    /// `mode` is interpreted like [`set_mode_line`](Self::set_mode_line).
    #[must_use]
    pub fn with_ownership(
        owner_id: u32,
        owner_name: impl Into<String>,
        group_id: u32,
        group_name: impl Into<String>,
        mode: &str,
    ) -> Self {
        let mut attrs = Self::from_mode_line(mode);
        attrs.owner_id = Some(owner_id);
        attrs.owner_name = Some(owner_name.into());
        attrs.group_id = Some(group_id);
        attrs.group_name = Some(group_name.into());
        attrs
    }

    /// Creates a record whose mode column is transcribed from `mode_line`.
    #[must_use]
    pub fn from_mode_line(mode_line: &str) -> Self {
        let mut attrs = Self::default();
        attrs.set_mode_line(mode_line);
        attrs
    }

    /// Replaces the mode column.
    ///
    /// Input shorter than [`MODE_WIDTH`] is right-padded with `-`. Longer input,
    /// such as macOS's `-rw-r--r--@` or an SELinux `.` suffix, keeps its first
    /// [`MODE_WIDTH`] characters.
    pub fn set_mode_line(&mut self, mode_line: &str) -> &mut Self {
        let mut mode = [DISABLED_MARKER; MODE_WIDTH];
        for (slot, ch) in mode.iter_mut().zip(mode_line.chars()) {
            *slot = ch;
        }
        self.mode = mode;
        self
    }

    /// Returns the mode column as a string of exactly [`MODE_WIDTH`] characters.
    #[must_use]
    pub fn mode_line(&self) -> String {
        self.mode.iter().collect()
    }

    /// Returns the raw mode characters.
    #[must_use]
    pub const fn mode_chars(&self) -> &[char; MODE_WIDTH] {
        &self.mode
    }

    /// Reports whether `permission` is granted.
    #[must_use]
    pub fn is_set(&self, permission: Permission) -> bool {
        self.mode[permission.mode_index()] != DISABLED_MARKER
    }

    /// Grants or revokes `permission`.
    pub fn set(&mut self, permission: Permission, flag: bool) -> &mut Self {
        self.mode[permission.mode_index()] = if flag {
            permission.enabled_marker()
        } else {
            DISABLED_MARKER
        };
        self
    }

    /// Owner may read.
    pub fn is_owner_readable(&self) -> bool {
        self.is_set(Permission::OwnerRead)
    }

    /// Owner may write.
    pub fn is_owner_writable(&self) -> bool {
        self.is_set(Permission::OwnerWrite)
    }

    /// Owner may execute.
    pub fn is_owner_executable(&self) -> bool {
        self.is_set(Permission::OwnerExecute)
    }

    /// Group may read.
    pub fn is_group_readable(&self) -> bool {
        self.is_set(Permission::GroupRead)
    }

    /// Group may write.
    pub fn is_group_writable(&self) -> bool {
        self.is_set(Permission::GroupWrite)
    }

    /// Group may execute.
    pub fn is_group_executable(&self) -> bool {
        self.is_set(Permission::GroupExecute)
    }

    /// Everyone may read.
    pub fn is_world_readable(&self) -> bool {
        self.is_set(Permission::WorldRead)
    }

    /// Everyone may write.
    pub fn is_world_writable(&self) -> bool {
        self.is_set(Permission::WorldWrite)
    }

    /// Everyone may execute.
    pub fn is_world_executable(&self) -> bool {
        self.is_set(Permission::WorldExecute)
    }

    /// Sets the owner read bit.
    pub fn set_owner_readable(&mut self, flag: bool) -> &mut Self {
        self.set(Permission::OwnerRead, flag)
    }

    /// Sets the owner write bit.
    pub fn set_owner_writable(&mut self, flag: bool) -> &mut Self {
        self.set(Permission::OwnerWrite, flag)
    }

    /// Sets the owner execute bit.
    pub fn set_owner_executable(&mut self, flag: bool) -> &mut Self {
        self.set(Permission::OwnerExecute, flag)
    }

    /// Sets the group read bit.
    pub fn set_group_readable(&mut self, flag: bool) -> &mut Self {
        self.set(Permission::GroupRead, flag)
    }

    /// Sets the group write bit.
    pub fn set_group_writable(&mut self, flag: bool) -> &mut Self {
        self.set(Permission::GroupWrite, flag)
    }

    /// Sets the group execute bit.
    pub fn set_group_executable(&mut self, flag: bool) -> &mut Self {
        self.set(Permission::GroupExecute, flag)
    }

    /// Sets the world read bit.
    pub fn set_world_readable(&mut self, flag: bool) -> &mut Self {
        self.set(Permission::WorldRead, flag)
    }

    /// Sets the world write bit.
    pub fn set_world_writable(&mut self, flag: bool) -> &mut Self {
        self.set(Permission::WorldWrite, flag)
    }

    /// Sets the world execute bit.
    pub fn set_world_executable(&mut self, flag: bool) -> &mut Self {
        self.set(Permission::WorldExecute, flag)
    }

    /// Numeric owner id, if a numeric listing reported one.
    pub const fn owner_id(&self) -> Option<u32> {
        self.owner_id
    }

    /// Symbolic owner name, if a symbolic listing reported one.
    pub fn owner_name(&self) -> Option<&str> {
        self.owner_name.as_deref()
    }

    /// Numeric group id, if a numeric listing reported one.
    pub const fn group_id(&self) -> Option<u32> {
        self.group_id
    }

    /// Symbolic group name, if a symbolic listing reported one.
    pub fn group_name(&self) -> Option<&str> {
        self.group_name.as_deref()
    }

    /// Replaces the owner id. `None` clears it.
    pub fn set_owner_id(&mut self, id: impl Into<Option<u32>>) -> &mut Self {
        self.owner_id = id.into();
        self
    }

    /// Replaces the owner name.
    pub fn set_owner_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.owner_name = Some(name.into());
        self
    }

    /// Replaces the group id. `None` clears it.
    pub fn set_group_id(&mut self, id: impl Into<Option<u32>>) -> &mut Self {
        self.group_id = id.into();
        self
    }

    /// Replaces the group name.
    pub fn set_group_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.group_name = Some(name.into());
        self
    }

    /// Sums the octal weights of every granted permission bit.
    pub fn octal_mode(&self) -> u32 {
        Permission::ALL
            .iter()
            .filter(|permission| self.is_set(**permission))
            .fold(0, |mode, permission| mode | permission.octal_bit())
    }

    /// Renders [`octal_mode`](Self::octal_mode) in base 8 without padding
    /// (`644`, `755`, `0` for no access).
    pub fn octal_mode_string(&self) -> String {
        format!("{:o}", self.octal_mode())
    }

    /// Sets all nine permission bits from an octal value. Bits outside `0o777`
    /// are ignored.
    pub fn set_octal_mode(&mut self, mode: u32) -> &mut Self {
        let mode = mode & PERMISSION_MASK;
        for permission in Permission::ALL {
            self.set(permission, permission.is_set_in_octal(mode));
        }
        self
    }

    /// Parses `mode` as base-8 text and applies it with
    /// [`set_octal_mode`](Self::set_octal_mode).
    pub fn set_octal_mode_str(&mut self, mode: &str) -> Result<&mut Self, OctalModeError> {
        let value = u32::from_str_radix(mode.trim(), 8)
            .map_err(|source| OctalModeError::new(mode, source))?;
        Ok(self.set_octal_mode(value))
    }
}

impl fmt::Display for FileAttributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn or_empty<T: fmt::Display>(value: Option<T>) -> String {
            value.map(|v| v.to_string()).unwrap_or_default()
        }

        writeln!(f, "File Attributes:")?;
        writeln!(f, "------------------------------")?;
        writeln!(f, "user: {}", self.owner_name().unwrap_or_default())?;
        writeln!(f, "group: {}", self.group_name().unwrap_or_default())?;
        writeln!(f, "uid: {}", or_empty(self.owner_id))?;
        writeln!(f, "gid: {}", or_empty(self.group_id))?;
        write!(f, "mode: {}", self.mode_line())
    }
}
