use file_sorter::{CategoryTable, FALLBACK_CATEGORY};

#[test]
fn case_insensitive_match() {
    let table = CategoryTable::builtin();
    assert_eq!(table.classify(".JPG"), "Images");
    assert_eq!(table.classify(".jpg"), "Images");
    assert_eq!(table.classify(".Mp4"), "Videos");
}

#[test]
fn leading_dot_is_optional() {
    let table = CategoryTable::builtin();
    assert_eq!(table.classify("pdf"), "Documents");
    assert_eq!(table.classify("7z"), "Archives");
    assert_eq!(table.classify("SH"), "Programs");
}

#[test]
fn unknown_extensions_fall_back_to_others() {
    let table = CategoryTable::builtin();
    assert_eq!(FALLBACK_CATEGORY, "Others");
    for ext in [".xyz", "rs", ".JPEG2", ".tar.gz", " .jpg"] {
        assert_eq!(table.classify(ext), FALLBACK_CATEGORY, "extension {ext:?}");
    }
}

#[test]
fn classification_is_deterministic() {
    let table = CategoryTable::builtin();
    for (_, exts) in table.categories() {
        for ext in exts {
            let upper = ext.to_uppercase();
            assert_eq!(table.classify(ext), table.classify(&upper));
            assert_eq!(table.classify(ext), table.classify(ext));
        }
    }
}

#[test]
fn table_lists_all_seven_categories_in_order() {
    let names: Vec<&str> = CategoryTable::builtin()
        .categories()
        .map(|(name, _)| name)
        .collect();
    assert_eq!(
        names,
        [
            "Images",
            "Videos",
            "Documents",
            "Audio",
            "Archives",
            "Programs",
            "Scripts"
        ]
    );
}
