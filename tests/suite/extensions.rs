//! Extension table loading and the process-wide table.

use std::sync::Barrier;
use std::{ptr, thread};

use asciifold_core::extensions::{self, EXTENSION_FILE, EXTENSION_WINDOW};
use asciifold_core::{ExtensionTable, LoadState, transliterate};

use crate::common::{temp_dir_with, temp_file};

const SAMPLE: &str = "\
4E2D\tzhong \r
U+56FD\tguo \r
\r
0x6587\twen \r
not-hex\tbad\r
4E2D\tzhong\r
";

#[test]
fn loads_crlf_file_and_reports_counts() {
    let file = temp_file(SAMPLE);
    let table = ExtensionTable::load(file.path()).unwrap();

    assert_eq!(table.len(), 3);
    assert_eq!(table.get('\u{4E2D}'), Some("zhong"));
    assert_eq!(table.get('\u{56FD}'), Some("guo "));
    assert_eq!(table.get('\u{6587}'), Some("wen "));
    assert!(matches!(
        table.state(),
        LoadState::Loaded { entries: 3, skipped: 1, path: Some(path) } if path == file.path()
    ));
}

#[test]
fn default_location_is_help_dir_layout() {
    let (_dir, path) = temp_dir_with(EXTENSION_FILE, "3400\tqiu \n");
    assert!(path.ends_with("help/unicode-extras.txt"));
    let table = ExtensionTable::load_or_empty(&path);
    assert_eq!(table.get('\u{3400}'), Some("qiu "));
}

#[test]
fn unreadable_file_is_not_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.txt");

    let err = ExtensionTable::load(&missing).unwrap_err();
    assert!(err.is_not_found());

    let table = ExtensionTable::load_or_empty(&missing);
    assert!(table.is_empty());
    assert!(matches!(table.state(), LoadState::Unavailable { .. }));
}

#[test]
fn window_covers_cjk_and_compatibility_blocks() {
    assert!(EXTENSION_WINDOW.contains(&'\u{3400}'));
    assert!(EXTENSION_WINDOW.contains(&'\u{4E2D}'));
    assert!(EXTENSION_WINDOW.contains(&'\u{E000}'));
    assert!(EXTENSION_WINDOW.contains(&'\u{F8FF}'));
    assert!(EXTENSION_WINDOW.contains(&'\u{F900}'));
    assert!(EXTENSION_WINDOW.contains(&'\u{FAFF}'));
    assert!(!EXTENSION_WINDOW.contains(&'\u{33FF}'));
    assert!(!EXTENSION_WINDOW.contains(&'\u{FB00}'));
}

// The only test in this binary that touches the process-wide table.
#[test]
fn racing_install_and_lookups_share_one_table() {
    const INSTALLERS: usize = 4;
    const READERS: usize = 8;

    let barrier = Barrier::new(INSTALLERS + READERS);
    let (wins, seen) = thread::scope(|scope| {
        let installers: Vec<_> = (0..INSTALLERS)
            .map(|i| {
                let barrier = &barrier;
                scope.spawn(move || {
                    let table = ExtensionTable::parse(&format!("4E2D\tt{i} \n"), None);
                    barrier.wait();
                    extensions::install(table).then_some(i)
                })
            })
            .collect();
        let readers: Vec<_> = (0..READERS)
            .map(|_| {
                let barrier = &barrier;
                scope.spawn(move || {
                    barrier.wait();
                    let out = transliterate("a\u{4E2D}b", false, false);
                    (out, extensions::global())
                })
            })
            .collect();

        let wins: Vec<usize> = installers
            .into_iter()
            .filter_map(|h| h.join().unwrap())
            .collect();
        let seen: Vec<(String, &'static ExtensionTable)> =
            readers.into_iter().map(|h| h.join().unwrap()).collect();
        (wins, seen)
    });

    // A reader may win the race and load the (absent) default table, in which
    // case every install is refused.
    assert!(wins.len() <= 1, "{wins:?}");
    let zhong = wins.first().map_or(String::new(), |i| format!("t{i} "));
    let expected = format!("a{zhong}b");

    let shared = extensions::global();
    for (out, table) in &seen {
        assert_eq!(out, &expected);
        assert!(ptr::eq(*table, shared));
    }

    assert!(extensions::is_initialized());
    assert!(!extensions::install(ExtensionTable::empty()));
    assert_eq!(transliterate("a\u{4E2D}b", false, false), expected);
    assert_eq!(
        transliterate("\u{4E2D}<\u{6587}", false, true),
        format!("{zhong}&lt;")
    );
}
