//! Two-pass collection through the crate facade.

use std::io::{self, BufReader, Read};

use ls_attrs::logging::{DiagnosticEvent, InfoFlag, VerbosityConfig, drain_events, init};
use ls_attrs::{ListingError, collect_attributes};
use test_support::{ALL, LINUX, MACOS};

#[test]
fn fixtures_collect_names_ids_and_modes() {
    for fixture in &ALL {
        let map = collect_attributes(fixture.numeric.as_bytes(), fixture.symbolic.as_bytes())
            .expect("collect");
        assert_eq!(map.len(), fixture.entries.len(), "{}", fixture.name);

        for (path, attrs) in &map {
            let expected = fixture.entry(path).expect("expected entry");
            assert_eq!(attrs.owner_name(), Some(expected.owner), "{path}");
            assert_eq!(attrs.group_name(), Some(expected.group), "{path}");
            assert_eq!(attrs.owner_id(), Some(expected.uid), "{path}");
            assert_eq!(attrs.group_id(), Some(expected.gid), "{path}");
            assert_eq!(attrs.octal_mode(), expected.octal, "{path}");
        }
    }
}

#[test]
fn macos_nobody_ids_wrap() {
    let map = collect_attributes(MACOS.numeric.as_bytes(), MACOS.symbolic.as_bytes())
        .expect("collect");
    let nobody = map.get("nobody.txt").expect("nobody entry");
    assert_eq!(nobody.owner_id(), Some(u32::MAX - 1));
    assert_eq!(nobody.group_id(), Some(u32::MAX));
}

#[test]
fn numeric_listing_with_names_degrades_to_names_only() {
    init(VerbosityConfig::from_verbose_level(1));
    drain_events();

    let map = collect_attributes(LINUX.symbolic.as_bytes(), LINUX.symbolic.as_bytes())
        .expect("symbolic pass succeeds");
    assert_eq!(map.len(), LINUX.entries.len());
    assert!(map.values().all(|attrs| attrs.owner_id().is_none()));
    assert!(map.values().all(|attrs| attrs.owner_name().is_some()));

    let events = drain_events();
    assert!(events.iter().any(|event| matches!(
        event,
        DiagnosticEvent::Info { flag: InfoFlag::Merge, message, .. }
            if message.starts_with("numeric listing prints names")
    )));
}

struct BrokenReader;

impl Read for BrokenReader {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::other("device went away"))
    }
}

#[test]
fn latin1_names_do_not_drop_the_listing() {
    let mut symbolic = LINUX.symbolic.as_bytes().to_vec();
    symbolic.extend_from_slice(b"-rw-r--r-- 1 bob users 7 Feb  3  2022 caf\xe9.txt\n");
    let mut numeric = LINUX.numeric.as_bytes().to_vec();
    numeric.extend_from_slice(b"-rw-r--r-- 1 1001 100 7 Feb  3  2022 caf\xe9.txt\n");

    let map = collect_attributes(numeric.as_slice(), symbolic.as_slice()).expect("collect");
    assert_eq!(map.len(), LINUX.entries.len() + 1);
    assert!(map.contains_key("docs"));

    let cafe = map.get("./docs/caf\u{fffd}.txt").expect("latin-1 entry");
    assert_eq!(cafe.owner_name(), Some("bob"));
    assert_eq!(cafe.owner_id(), Some(1001));
}

#[test]
fn unreadable_numeric_listing_is_not_fatal() {
    let map = collect_attributes(BufReader::new(BrokenReader), LINUX.symbolic.as_bytes())
        .expect("symbolic pass succeeds");
    assert_eq!(map.len(), LINUX.entries.len());
    assert!(map.values().all(|attrs| attrs.owner_id().is_none()));
}

#[test]
fn symbolic_read_failure_is_returned() {
    let err = collect_attributes(LINUX.numeric.as_bytes(), BufReader::new(BrokenReader))
        .expect_err("symbolic fails");
    assert!(matches!(err, ListingError::Io(_)));
}

#[test]
fn pass_diagnostics_reach_the_calling_thread() {
    init(VerbosityConfig::from_verbose_level(1));
    drain_events();

    collect_attributes(LINUX.numeric.as_bytes(), LINUX.symbolic.as_bytes()).expect("collect");

    let listing_summaries = drain_events()
        .iter()
        .filter(|event| matches!(event, DiagnosticEvent::Info { flag: InfoFlag::Listing, .. }))
        .count();
    assert_eq!(listing_summaries, 2);
}

#[test]
fn empty_listings_collect_nothing() {
    let map = collect_attributes(&b""[..], &b""[..]).expect("collect");
    assert!(map.is_empty());
}
