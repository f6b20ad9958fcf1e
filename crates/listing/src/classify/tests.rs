use super::*;

fn classify(line: &str) -> LineKind<'_> {
    LineClassifier::default().classify(line, ParseState::Normal)
}

fn record(line: &str) -> DataRecord<'_> {
    match classify(line) {
        LineKind::Record(record) => record,
        other => panic!("expected a record for {line:?}, got {other:?}"),
    }
}

#[test]
fn total_lines_are_recognised_in_any_state() {
    let classifier = LineClassifier::default();
    assert_eq!(classifier.classify("total 24", ParseState::Normal), LineKind::Total);
    assert_eq!(classifier.classify("insgesamt 8", ParseState::Normal), LineKind::Total);
    assert_eq!(
        classifier.classify("total 0", ParseState::ExpectPrefix),
        LineKind::Total
    );
}

#[test]
fn blank_lines_are_recognised_in_any_state() {
    let classifier = LineClassifier::default();
    assert_eq!(classifier.classify("", ParseState::Normal), LineKind::Blank);
    assert_eq!(classifier.classify("  \t", ParseState::Normal), LineKind::Blank);
    assert_eq!(classifier.classify("", ParseState::ExpectPrefix), LineKind::Blank);
}

#[test]
fn declaration_only_recognised_after_blank() {
    let classifier = LineClassifier::default();
    assert_eq!(
        classifier.classify("./sub/dir:", ParseState::ExpectPrefix),
        LineKind::PrefixDeclaration("./sub/dir")
    );
    assert_eq!(
        classifier.classify("not a declaration", ParseState::ExpectPrefix),
        LineKind::PendingPrefix
    );
    assert_eq!(
        classifier.classify("sub:", ParseState::Normal),
        LineKind::Unparseable(Unparseable::TooFewFields { found: 1 })
    );
}

#[test]
fn record_exposes_columns_and_path() {
    let rec = record("drwxr-xr-x 2 alice staff 4096 Jan 12 2023 dir");
    assert_eq!(rec.mode(), "drwxr-xr-x");
    assert_eq!(rec.owner(), "alice");
    assert_eq!(rec.group(), "staff");
    assert_eq!(rec.path(), "dir");
    assert_eq!(rec.date_pattern(), "MMM dd yyyy");
    assert_eq!(rec.line(), "drwxr-xr-x 2 alice staff 4096 Jan 12 2023 dir");
}

#[test]
fn path_keeps_inner_spaces() {
    let rec = record("-rw-r--r--  1 alice  staff   12 Jan 12 09:41 my notes.txt");
    assert_eq!(rec.path(), "my notes.txt");
    assert_eq!(rec.date_pattern(), "MMM dd HH:mm");
}

#[test]
fn path_that_repeats_the_date_is_kept_whole() {
    let rec = record("-rw-r--r-- 1 alice staff 12 Jan 12 2023 Jan 12 2023.log");
    assert_eq!(rec.path(), "Jan 12 2023.log");
}

#[test]
fn earlier_columns_sharing_date_text_do_not_shift_the_path() {
    let rec = record("-rw-r--r-- 1 12 12 12 Jan 12 2023 12");
    assert_eq!(rec.owner(), "12");
    assert_eq!(rec.path(), "12");
}

#[test]
fn long_iso_date_ends_at_token_six() {
    let rec = record("-rw-r--r-- 1 alice staff 12 2023-01-12 09:41 notes.txt");
    assert_eq!(rec.path(), "notes.txt");
    assert_eq!(rec.date_pattern(), "yyyy-MM-dd HH:mm");
}

#[test]
fn day_first_dates() {
    assert_eq!(
        record("-rw-r--r-- 1 alice staff 12 12 Jan 09:41 a.txt").path(),
        "a.txt"
    );
    assert_eq!(
        record("-rw-r--r-- 1 alice staff 12 12 Jan 2023 b.txt").path(),
        "b.txt"
    );
}

#[test]
fn symlink_target_stays_in_path() {
    let rec = record("lrwxrwxrwx 1 alice staff 11 Jan 12 2023 link -> target");
    assert_eq!(rec.path(), "link -> target");
}

#[test]
fn too_few_fields() {
    assert_eq!(
        classify("-rw-r--r-- 1 alice staff 0 Jan 12"),
        LineKind::Unparseable(Unparseable::TooFewFields { found: 7 })
    );
}

#[test]
fn unknown_date_is_unparseable() {
    assert_eq!(
        classify("-rw-r--r-- 1 alice staff 0 Okt 12 2023 file"),
        LineKind::Unparseable(Unparseable::UnrecognizedDate {
            candidate: "Okt 12 2023".to_owned()
        })
    );
}

#[test]
fn date_without_path_is_unparseable() {
    assert_eq!(
        classify("-rw-r--r-- 1 alice staff 0 Jan 12 2023"),
        LineKind::Unparseable(Unparseable::MissingPath)
    );
    assert_eq!(
        classify("-rw-r--r-- 1 alice staff 0 Jan 12 2023   "),
        LineKind::Unparseable(Unparseable::MissingPath)
    );
}

#[test]
fn unparseable_reasons_display() {
    assert!(
        Unparseable::UnrecognizedDate {
            candidate: "x y z".to_owned()
        }
        .to_string()
        .contains("ambiguous start-index for path")
    );
    assert_eq!(
        Unparseable::TooFewFields { found: 3 }.to_string(),
        "expected more than 7 fields, found 3"
    );
}

#[test]
fn custom_total_pattern_replaces_default() {
    let classifier = LineClassifier::new(
        Regex::new(r"^summe \d+$").expect("valid regex"),
        DateFormats::standard(),
    );
    assert_eq!(classifier.classify("summe 4", ParseState::Normal), LineKind::Total);
    assert!(matches!(
        classifier.classify("total 4", ParseState::Normal),
        LineKind::Unparseable(_)
    ));
}

#[test]
fn path_after_token_skips_one_separator_then_whitespace() {
    let line = "a  b   c d";
    let tokens = ["a", "b", "c", "d"];
    assert_eq!(path_after_token(line, &tokens, 1), Some("c d"));
    assert_eq!(path_after_token(line, &tokens, 2), Some("d"));
    assert_eq!(path_after_token(line, &tokens, 3), None);
    assert_eq!(path_after_token(line, &tokens, 4), None);
}
