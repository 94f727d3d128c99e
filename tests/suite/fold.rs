//! The composed pipeline.

use asciifold_core::{ExtensionTable, FieldKind, FoldOptions, Folder};

#[test]
fn default_fold_is_plain_transliteration() {
    let table = ExtensionTable::empty();
    let folder = Folder::with_extensions(FoldOptions::default(), &table);
    assert_eq!(folder.fold("Gro\u{03B2}e \u{03B1}"), "Grobe a");
}

#[test]
fn prose_fold_with_spelled_greek() {
    let table = ExtensionTable::empty();
    let options = FoldOptions {
        homoglyphs: true,
        field: FieldKind::Prose,
        spell_greek: true,
        ..FoldOptions::default()
    };
    let folder = Folder::with_extensions(options, &table);
    assert_eq!(
        folder.fold("Gro\u{03B2}e Mengen \u{00DF}-Carotin"),
        "Grosse Mengen beta-Carotin"
    );
}

#[test]
fn keep_unicode_only_normalizes() {
    let table = ExtensionTable::empty();
    let options = FoldOptions {
        field: FieldKind::Author,
        transliterate: false,
        ..FoldOptions::default()
    };
    let folder = Folder::with_extensions(options, &table);
    assert_eq!(folder.fold("Wei\u{03B2}\u{4E2D}"), "Wei\u{00DF}\u{4E2D}");
}

#[test]
fn field_kind_round_trips_through_text() {
    for raw in FieldKind::VARIANTS {
        let kind: FieldKind = raw.parse().unwrap();
        assert_eq!(kind.to_string(), *raw);
    }
    let err = "title".parse::<FieldKind>().unwrap_err();
    assert_eq!(err.raw(), "title");
}
