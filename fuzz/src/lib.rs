use arbitrary::Arbitrary;
use po_reconcile::catalog::{Catalog, Entry};

/// Wrapper struct for generating arbitrary `Entry`s.
#[derive(Arbitrary, Debug)]
pub struct FuzzEntry {
    pub key: String,
    pub source_text: String,
    pub translated_text: String,
}

/// Generate a random Catalog for fuzzing.
pub fn create_catalog(entries: Vec<FuzzEntry>) -> Catalog {
    let entries = entries
        .into_iter()
        .map(|entry| Entry {
            prefix: Vec::new(),
            is_translation_empty: entry.translated_text.is_empty(),
            key: entry.key,
            context: String::new(),
            source_text: entry.source_text,
            translated_text: entry.translated_text,
        })
        .collect();
    Catalog {
        header: Vec::new(),
        entries,
    }
}
