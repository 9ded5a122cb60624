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

//! File level drivers for the extract, merge and fill operations.
//!
//! Each operation reads its inputs completely, transforms them in
//! memory and writes a single output file next to the first input.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use log::info;

use crate::catalog::{Catalog, Parser};
use crate::reconcile::{extract, fill_empty, merge};
use crate::stats::CatalogStats;

/// Number of characters replaced by the output suffix.
const EXTENSION_LEN: usize = 3;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Operation {
    Extract,
    Merge,
    FillEmpty,
}

impl Operation {
    /// Parse a single-letter menu choice, ignoring case.
    pub fn from_choice(choice: &str) -> Option<Operation> {
        match choice.trim() {
            c if c.eq_ignore_ascii_case("e") => Some(Operation::Extract),
            c if c.eq_ignore_ascii_case("m") => Some(Operation::Merge),
            c if c.eq_ignore_ascii_case("f") => Some(Operation::FillEmpty),
            _ => None,
        }
    }

    /// Suffix which replaces the extension of the first input.
    pub fn suffix(&self) -> &'static str {
        match self {
            Operation::Extract => "_extracted.po",
            Operation::Merge => "_merged.po",
            Operation::FillEmpty => "_filled.po",
        }
    }
}

/// Replace the last three characters of `input` with `suffix`.
///
/// The characters are dropped whether or not they are a `.po`
/// extension.
pub fn derived_path(input: &Path, suffix: &str) -> anyhow::Result<PathBuf> {
    let Some(input) = input.to_str() else {
        bail!("Path {} is not valid UTF-8", input.display());
    };
    let Some((cut, _)) = input.char_indices().rev().nth(EXTENSION_LEN - 1) else {
        bail!("Path {input:?} is too short to derive an output name");
    };
    Ok(PathBuf::from(format!("{}{suffix}", &input[..cut])))
}

/// Read and parse the catalog at `path`.
pub fn read_catalog(path: &Path, parser: &Parser) -> anyhow::Result<Catalog> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Could not read {}", path.display()))?;
    let catalog = parser.parse_text(&text);
    info!(
        "Read {} entries from {}",
        catalog.entries.len(),
        path.display()
    );
    Ok(catalog)
}

/// Write `catalog` to `path`, replacing any existing file.
pub fn write_catalog(catalog: &Catalog, path: &Path) -> anyhow::Result<()> {
    fs::write(path, catalog.to_text())
        .with_context(|| format!("Could not write catalog to {}", path.display()))?;
    info!(
        "Wrote {} ({}) to {}",
        catalog.entries.len(),
        CatalogStats::for_catalog(catalog),
        path.display()
    );
    Ok(())
}

/// Write the untranslated entries of `input` to `<input>_extracted.po`.
pub fn run_extract(input: &Path, parser: &Parser) -> anyhow::Result<PathBuf> {
    let output = derived_path(input, Operation::Extract.suffix())?;
    let catalog = read_catalog(input, parser)?;
    write_catalog(&extract(&catalog), &output)?;
    Ok(output)
}

/// Merge the translations of `filled` into `original` and write the
/// result to `<original>_merged.po`.
pub fn run_merge(original: &Path, filled: &Path, parser: &Parser) -> anyhow::Result<PathBuf> {
    let output = derived_path(original, Operation::Merge.suffix())?;
    let original = read_catalog(original, parser)?;
    let filled = read_catalog(filled, parser)?;
    write_catalog(&merge(original, &filled), &output)?;
    Ok(output)
}

/// Fill untranslated entries of `original` from `legacy` and write the
/// result to `<original>_filled.po`.
pub fn run_fill_empty(original: &Path, legacy: &Path, parser: &Parser) -> anyhow::Result<PathBuf> {
    let output = derived_path(original, Operation::FillEmpty.suffix())?;
    let original = read_catalog(original, parser)?;
    let legacy = read_catalog(legacy, parser)?;
    write_catalog(&fill_empty(original, &legacy), &output)?;
    Ok(output)
}
