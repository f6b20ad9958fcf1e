//! POSIX octal weights for the nine permission bits and single-bit predicates.
//!
//! The predicates accept any `u32`; bits outside `0o777` are ignored so callers
//! can pass a full `st_mode` value without masking it first.

/// Owner read bit.
pub const OCTAL_OWNER_READ: u32 = 0o400;
/// Owner write bit.
pub const OCTAL_OWNER_WRITE: u32 = 0o200;
/// Owner execute bit.
pub const OCTAL_OWNER_EXECUTE: u32 = 0o100;
/// Group read bit.
pub const OCTAL_GROUP_READ: u32 = 0o040;
/// Group write bit.
pub const OCTAL_GROUP_WRITE: u32 = 0o020;
/// Group execute bit.
pub const OCTAL_GROUP_EXECUTE: u32 = 0o010;
/// World read bit.
pub const OCTAL_WORLD_READ: u32 = 0o004;
/// World write bit.
pub const OCTAL_WORLD_WRITE: u32 = 0o002;
/// World execute bit.
pub const OCTAL_WORLD_EXECUTE: u32 = 0o001;

/// Mask covering every modelled permission bit.
pub const PERMISSION_MASK: u32 = 0o777;

#[inline]
const fn has_bit(mode: u32, bit: u32) -> bool {
    mode & bit == bit
}

/// Returns `true` when `mode` grants the owner read access.
pub const fn is_owner_readable_in_octal(mode: u32) -> bool {
    has_bit(mode, OCTAL_OWNER_READ)
}

/// Returns `true` when `mode` grants the owner write access.
pub const fn is_owner_writable_in_octal(mode: u32) -> bool {
    has_bit(mode, OCTAL_OWNER_WRITE)
}

/// Returns `true` when `mode` grants the owner execute access.
pub const fn is_owner_executable_in_octal(mode: u32) -> bool {
    has_bit(mode, OCTAL_OWNER_EXECUTE)
}

/// Returns `true` when `mode` grants the group read access.
pub const fn is_group_readable_in_octal(mode: u32) -> bool {
    has_bit(mode, OCTAL_GROUP_READ)
}

/// Returns `true` when `mode` grants the group write access.
pub const fn is_group_writable_in_octal(mode: u32) -> bool {
    has_bit(mode, OCTAL_GROUP_WRITE)
}

/// Returns `true` when `mode` grants the group execute access.
pub const fn is_group_executable_in_octal(mode: u32) -> bool {
    has_bit(mode, OCTAL_GROUP_EXECUTE)
}

/// Returns `true` when `mode` grants everyone read access.
pub const fn is_world_readable_in_octal(mode: u32) -> bool {
    has_bit(mode, OCTAL_WORLD_READ)
}

/// Returns `true` when `mode` grants everyone write access.
pub const fn is_world_writable_in_octal(mode: u32) -> bool {
    has_bit(mode, OCTAL_WORLD_WRITE)
}

/// Returns `true` when `mode` grants everyone execute access.
pub const fn is_world_executable_in_octal(mode: u32) -> bool {
    has_bit(mode, OCTAL_WORLD_EXECUTE)
}
