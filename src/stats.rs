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

use crate::catalog::Catalog;
use std::fmt::{self, Display, Formatter};

/// Counts of translated and untranslated entries.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct CatalogStats {
    pub translated_count: usize,
    pub untranslated_count: usize,
}

impl CatalogStats {
    /// Returns the total number of entries.
    pub fn total(&self) -> usize {
        self.translated_count + self.untranslated_count
    }

    /// Returns counts for the given catalog.
    ///
    /// This looks at the current translations, not at
    /// [`Entry::is_translation_empty`](crate::catalog::Entry::is_translation_empty).
    pub fn for_catalog(catalog: &Catalog) -> Self {
        let mut stats = Self::default();
        for entry in &catalog.entries {
            if entry.translated_text.is_empty() {
                stats.untranslated_count += 1;
            } else {
                stats.translated_count += 1;
            }
        }
        stats
    }
}

impl Display for CatalogStats {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{} / {} translated", self.translated_count, self.total())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_stats_for_catalog() {
        let catalog = Catalog::from_text(
            "# header\n\
             \n\
             msgid \"One\"\n\
             msgstr \"Uno\"\n\
             \n\
             msgid \"Two\"\n\
             msgstr \"\"\n\
             \n\
             msgid \"Three\"\n\
             msgstr \"\"\n\
             \n",
        );
        let stats = CatalogStats::for_catalog(&catalog);
        assert_eq!(
            stats,
            CatalogStats {
                translated_count: 1,
                untranslated_count: 2,
            }
        );
        assert_eq!(stats.to_string(), "1 / 3 translated");
    }

    #[test]
    fn test_stats_empty_catalog() {
        let stats = CatalogStats::for_catalog(&Catalog::default());
        assert_eq!(stats.total(), 0);
    }
}
