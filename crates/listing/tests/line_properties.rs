use listing::{NumericIds, SymbolicNames, parse_listing};
use proptest::prelude::*;

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// The date columns in each supported layout.
fn date_columns() -> impl Strategy<Value = String> {
    (0usize..12, 1u32..=28, 1970u32..=2037, 0u32..24, 0u32..60, 0usize..5).prop_map(
        |(month, day, year, hour, minute, layout)| {
            let month = MONTHS[month];
            match layout {
                0 => format!("{month} {day:>2}  {year}"),
                1 => format!("{month} {day:>2} {hour:02}:{minute:02}"),
                2 => format!("{year}-{:02}-{day:02} {hour:02}:{minute:02}", month_number(month)),
                3 => format!("{day} {month} {hour:02}:{minute:02}"),
                _ => format!("{day} {month} {year}"),
            }
        },
    )
}

fn month_number(name: &str) -> usize {
    MONTHS.iter().position(|m| *m == name).map_or(1, |i| i + 1)
}

fn path_name() -> impl Strategy<Value = String> {
    "[A-Za-z0-9_.-]([A-Za-z0-9_. :-]{0,18}[A-Za-z0-9_.-])?"
}

proptest! {
    #[test]
    fn path_after_any_supported_date_is_kept_verbatim(
        date in date_columns(),
        path in path_name(),
        owner in "[a-z_][a-z0-9_]{0,7}",
        group in "[a-z_][a-z0-9_]{0,7}",
        size in any::<u32>(),
    ) {
        let line = format!("-rw-r--r-- 1 {owner} {group} {size} {date} {path}\n");
        let map = parse_listing(SymbolicNames, line.as_bytes()).expect("symbolic pass");
        let entry = map.get(&path);
        prop_assert!(entry.is_some(), "no entry for {:?} in {:?}", path, line);
        prop_assert_eq!(entry.and_then(|e| e.owner_name()), Some(owner.as_str()));
        prop_assert_eq!(map.len(), 1);
    }

    #[test]
    fn declared_prefix_always_ends_in_one_slash(
        dir in "[a-z][a-z0-9_]{0,7}(/[a-z0-9_]{1,8}){0,3}/?",
        file in "[a-z][a-z0-9_.]{0,11}",
    ) {
        let listing = format!("\n{dir}:\n-rw-r--r-- 1 u g 0 Jan 12 2023 {file}\n");
        let map = parse_listing(SymbolicNames, listing.as_bytes()).expect("symbolic pass");
        let expected = format!("{}/{file}", dir.trim_end_matches('/'));
        prop_assert!(map.contains_key(&expected), "{:?} not in {:?}", expected, map);
    }

    #[test]
    fn numeric_ids_round_trip(uid in any::<u32>(), gid in any::<u32>()) {
        let line = format!("-rw-r--r-- 1 {uid} {gid} 0 Jan 12 2023 f\n");
        let map = parse_listing(NumericIds, line.as_bytes()).expect("numeric pass");
        let entry = map.get("f").expect("entry");
        prop_assert_eq!(entry.owner_id(), Some(uid));
        prop_assert_eq!(entry.group_id(), Some(gid));
    }

    #[test]
    fn negative_ids_wrap(uid in i32::MIN..0i32) {
        let line = format!("-rw-r--r-- 1 {uid} 0 0 Jan 12 2023 f\n");
        let map = parse_listing(NumericIds, line.as_bytes()).expect("numeric pass");
        prop_assert_eq!(map.get("f").and_then(|e| e.owner_id()), Some(uid as u32));
    }
}
