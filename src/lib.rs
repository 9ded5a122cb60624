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

//! Helpers for handing untranslated PO entries to translators.
//!
//! The typical round trip is:
//!
//! 1. [`reconcile::extract`] the untranslated entries of a catalog
//!    into a smaller catalog,
//! 2. let a translator fill in the `msgstr` lines,
//! 3. [`reconcile::merge`] the translations back into the original
//!    catalog, matching entries by their `#. Key:` comment.
//!
//! Separately, [`reconcile::fill_empty`] reuses translations from an
//! older catalog whose keys have since been regenerated.
//!
//! # Examples
//!
//! ```
//! use po_reconcile::catalog::Catalog;
//! use po_reconcile::reconcile::extract;
//!
//! let catalog = Catalog::from_text(
//!     "# header\n\
//!      \n\
//!      #. Key: K1\n\
//!      msgctxt \"\"\n\
//!      msgid \"Hello\"\n\
//!      msgstr \"\"\n\
//!      \n",
//! );
//! let extracted = extract(&catalog);
//! assert_eq!(extracted.entries.len(), 1);
//! assert_eq!(extracted.entries[0].key, "K1");
//! ```

pub mod catalog;
pub mod menu;
pub mod reconcile;
pub mod stats;
pub mod workflow;
