// Copyright 2024 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Derive new catalogs from one or two parsed catalogs.
//!
//! All three operations only look at entries which were untranslated
//! when parsed, see [`Entry::is_translation_empty`].

use crate::catalog::{Catalog, Entry};
use log::debug;

/// Return a catalog with the header of `source` and the entries which
/// were untranslated.
pub fn extract(source: &Catalog) -> Catalog {
    Catalog {
        header: source.header.clone(),
        entries: source
            .entries
            .iter()
            .filter(|entry| entry.is_translation_empty)
            .cloned()
            .collect(),
    }
}

/// Copy translations from `filled` into the untranslated entries of
/// `original`.
///
/// Entries are matched by key. The translation is only taken when the
/// source text also matches: keys may have been renumbered between
/// the two files.
pub fn merge(mut original: Catalog, filled: &Catalog) -> Catalog {
    for entry in untranslated_mut(&mut original) {
        match filled.find_by_key(&entry.key) {
            Some(found) if found.source_text == entry.source_text => {
                entry.translated_text = found.translated_text.clone();
            }
            Some(found) => debug!(
                "Key {:?} has source {:?}, expected {:?}",
                entry.key, found.source_text, entry.source_text
            ),
            None => {}
        }
    }
    original
}

/// Fill untranslated entries of `original` with translations from
/// `legacy`, matched by source text only.
///
/// Only the first `legacy` entry with the same source text is
/// considered; if it is untranslated, the entry stays untranslated.
pub fn fill_empty(mut original: Catalog, legacy: &Catalog) -> Catalog {
    for entry in untranslated_mut(&mut original) {
        if let Some(found) = legacy.find_by_source(&entry.source_text) {
            if !found.translated_text.is_empty() {
                entry.translated_text = found.translated_text.clone();
            }
        }
    }
    original
}

fn untranslated_mut(catalog: &mut Catalog) -> impl Iterator<Item = &mut Entry> {
    catalog
        .entries
        .iter_mut()
        .filter(|entry| entry.is_translation_empty)
}
