//! Listing fixtures shared by the workspace's tests.
//!
//! Each [`ListingFixture`] pairs the `ls -lR` and `ls -nR` output of the same
//! tree with the entries a correct parse produces. The expected entries list
//! every path once, in the order the symbolic listing prints them.

use std::io::{self, Write};

use tempfile::NamedTempFile;

/// One entry a fixture is expected to yield.
#[derive(Clone, Copy, Debug)]
pub struct ExpectedEntry {
    /// Normalized path key.
    pub path: &'static str,
    /// Owner name from the symbolic listing.
    pub owner: &'static str,
    /// Group name from the symbolic listing.
    pub group: &'static str,
    /// Owner id from the numeric listing.
    pub uid: u32,
    /// Group id from the numeric listing.
    pub gid: u32,
    /// Stored ten-column mode.
    pub mode: &'static str,
    /// Permission bits of `mode`.
    pub octal: u32,
}

/// Symbolic and numeric listings of the same tree.
#[derive(Clone, Copy, Debug)]
pub struct ListingFixture {
    /// Short label used in assertion messages.
    pub name: &'static str,
    /// `ls -lR` output.
    pub symbolic: &'static str,
    /// `ls -nR` output.
    pub numeric: &'static str,
    /// Entries in symbolic listing order.
    pub entries: &'static [ExpectedEntry],
}

impl ListingFixture {
    /// Looks up the expected entry for `path`.
    #[must_use]
    pub fn entry(&self, path: &str) -> Option<&ExpectedEntry> {
        self.entries.iter().find(|entry| entry.path == path)
    }
}

/// GNU coreutils output with a nested directory, a path with a space and a
/// symlink.
pub const LINUX: ListingFixture = ListingFixture {
    name: "linux",
    symbolic: "\
.:
total 12
drwxr-xr-x 2 alice staff 4096 Jan 12  2023 docs
-rw-r--r-- 1 alice staff   42 Mar  4 09:41 README.md
-rwxr-x--- 1 root  wheel  812 Dec 31  2022 run.sh

./docs:
total 4
-rw-rw-r-- 1 bob users 1200 Feb  3  2022 my notes.txt
lrwxrwxrwx 1 bob users   12 Feb  3  2022 latest -> my notes.txt
",
    numeric: "\
.:
total 12
drwxr-xr-x 2 1000 50 4096 Jan 12  2023 docs
-rw-r--r-- 1 1000 50   42 Mar  4 09:41 README.md
-rwxr-x--- 1    0  0  812 Dec 31  2022 run.sh

./docs:
total 4
-rw-rw-r-- 1 1001 100 1200 Feb  3  2022 my notes.txt
lrwxrwxrwx 1 1001 100   12 Feb  3  2022 latest -> my notes.txt
",
    entries: &[
        ExpectedEntry {
            path: "docs",
            owner: "alice",
            group: "staff",
            uid: 1000,
            gid: 50,
            mode: "drwxr-xr-x",
            octal: 0o755,
        },
        ExpectedEntry {
            path: "README.md",
            owner: "alice",
            group: "staff",
            uid: 1000,
            gid: 50,
            mode: "-rw-r--r--",
            octal: 0o644,
        },
        ExpectedEntry {
            path: "run.sh",
            owner: "root",
            group: "wheel",
            uid: 0,
            gid: 0,
            mode: "-rwxr-x---",
            octal: 0o750,
        },
        ExpectedEntry {
            path: "./docs/my notes.txt",
            owner: "bob",
            group: "users",
            uid: 1001,
            gid: 100,
            mode: "-rw-rw-r--",
            octal: 0o664,
        },
        ExpectedEntry {
            path: "./docs/latest -> my notes.txt",
            owner: "bob",
            group: "users",
            uid: 1001,
            gid: 100,
            mode: "lrwxrwxrwx",
            octal: 0o777,
        },
    ],
};

/// macOS output: extended-attribute and ACL markers after the mode, and the
/// negative ids of `nobody`.
pub const MACOS: ListingFixture = ListingFixture {
    name: "macos",
    symbolic: "\
total 16
-rw-r--r--@ 1 alice   staff    1024 Jan 12 09:41 photo.jpg
drwx------+ 3 alice   staff      96 Jan  2  2023 Private
-rw-r--r--  1 nobody  nogroup     0 Jan 12 09:41 nobody.txt

./Private:
total 0
-rw-------  1 alice   staff       0 Jan  2  2023 secret
",
    numeric: "\
total 16
-rw-r--r--@ 1 501  20    1024 Jan 12 09:41 photo.jpg
drwx------+ 3 501  20      96 Jan  2  2023 Private
-rw-r--r--  1 -2   -1       0 Jan 12 09:41 nobody.txt

./Private:
total 0
-rw-------  1 501  20       0 Jan  2  2023 secret
",
    entries: &[
        ExpectedEntry {
            path: "photo.jpg",
            owner: "alice",
            group: "staff",
            uid: 501,
            gid: 20,
            mode: "-rw-r--r--",
            octal: 0o644,
        },
        ExpectedEntry {
            path: "Private",
            owner: "alice",
            group: "staff",
            uid: 501,
            gid: 20,
            mode: "drwx------",
            octal: 0o700,
        },
        ExpectedEntry {
            path: "nobody.txt",
            owner: "nobody",
            group: "nogroup",
            uid: 4_294_967_294,
            gid: 4_294_967_295,
            mode: "-rw-r--r--",
            octal: 0o644,
        },
        ExpectedEntry {
            path: "./Private/secret",
            owner: "alice",
            group: "staff",
            uid: 501,
            gid: 20,
            mode: "-rw-------",
            octal: 0o600,
        },
    ],
};

/// GNU `--time-style=long-iso`, where the date spans two columns.
pub const LONG_ISO: ListingFixture = ListingFixture {
    name: "long-iso",
    symbolic: "\
total 8
-rw-r--r-- 1 carol devs 10 2023-01-12 09:41 notes.txt
-rwxr-xr-x 1 carol devs 99 2024-11-30 23:59 build file.sh
",
    numeric: "\
total 8
-rw-r--r-- 1 1002 200 10 2023-01-12 09:41 notes.txt
-rwxr-xr-x 1 1002 200 99 2024-11-30 23:59 build file.sh
",
    entries: &[
        ExpectedEntry {
            path: "notes.txt",
            owner: "carol",
            group: "devs",
            uid: 1002,
            gid: 200,
            mode: "-rw-r--r--",
            octal: 0o644,
        },
        ExpectedEntry {
            path: "build file.sh",
            owner: "carol",
            group: "devs",
            uid: 1002,
            gid: 200,
            mode: "-rwxr-xr-x",
            octal: 0o755,
        },
    ],
};

/// Day-first dates under a localised header. The `Okt` line uses a month
/// name outside the supported set and yields no entry.
pub const DAY_FIRST: ListingFixture = ListingFixture {
    name: "day-first",
    symbolic: "\
insgesamt 8
-rw-r--r-- 1 dora team 5 12 Jan 09:41 today.txt
-rw-r----- 1 dora team 5 3 Feb 2022 old.txt
-rw-r--r-- 1 dora team 5 12 Okt 2023 skipped.txt
",
    numeric: "\
insgesamt 8
-rw-r--r-- 1 1003 300 5 12 Jan 09:41 today.txt
-rw-r----- 1 1003 300 5 3 Feb 2022 old.txt
-rw-r--r-- 1 1003 300 5 12 Okt 2023 skipped.txt
",
    entries: &[
        ExpectedEntry {
            path: "today.txt",
            owner: "dora",
            group: "team",
            uid: 1003,
            gid: 300,
            mode: "-rw-r--r--",
            octal: 0o644,
        },
        ExpectedEntry {
            path: "old.txt",
            owner: "dora",
            group: "team",
            uid: 1003,
            gid: 300,
            mode: "-rw-r-----",
            octal: 0o640,
        },
    ],
};

/// Every fixture above.
pub const ALL: [ListingFixture; 4] = [LINUX, MACOS, LONG_ISO, DAY_FIRST];

/// Rewrites `\n` terminators as `\r\n`.
#[must_use]
pub fn with_crlf(text: &str) -> String {
    text.replace('\n', "\r\n")
}

/// Writes `text` to a temporary file that is removed when dropped.
///
/// # Errors
///
/// Returns any error from creating or writing the file.
pub fn write_temp_listing(text: &str) -> io::Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;
    file.write_all(text.as_bytes())?;
    file.flush()?;
    Ok(file)
}
