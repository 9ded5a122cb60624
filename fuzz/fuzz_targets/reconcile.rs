#![no_main]

use libfuzzer_sys::fuzz_target;
use po_reconcile::reconcile::{extract, fill_empty, merge};
use po_reconcile_fuzz::{create_catalog, FuzzEntry};

fuzz_target!(|inputs: (Vec<FuzzEntry>, Vec<FuzzEntry>)| {
    let (original, other) = inputs;
    let original = create_catalog(original);
    let other = create_catalog(other);

    let extracted = extract(&original);
    assert!(extracted.entries.iter().all(|entry| entry.is_translation_empty));

    for result in [
        merge(original.clone(), &other),
        fill_empty(original.clone(), &other),
    ] {
        assert_eq!(result.entries.len(), original.entries.len());
        for (before, after) in original.entries.iter().zip(&result.entries) {
            assert_eq!(before.source_text, after.source_text);
            if !before.is_translation_empty {
                assert_eq!(before.translated_text, after.translated_text);
            }
        }
    }
});
