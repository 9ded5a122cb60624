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

//! Extract untranslated entries from a PO file, merge them back once
//! translated, or fill them from an older PO file.
//!
//! Without a subcommand, an interactive menu asks for the operation
//! and the files.

use std::io;
use std::path::PathBuf;

use clap::{Parser as _, Subcommand};
use log::info;
use po_reconcile::catalog::Parser;
use po_reconcile::menu::{Menu, Request, DEFAULT_RETRIES};

#[derive(clap::Parser)]
#[command(version, about)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
    /// Start every entry with empty key, context, msgid and msgstr
    /// instead of inheriting them from the previous entry.
    #[arg(long, global = true)]
    reset_fields: bool,
    /// Number of invalid menu choices accepted before exiting.
    #[arg(long, default_value_t = DEFAULT_RETRIES)]
    retries: u32,
}

#[derive(Clone, Debug, Subcommand)]
enum Command {
    /// Write the untranslated entries to `<input>_extracted.po`.
    Extract {
        #[arg(value_name = "input.po")]
        input: PathBuf,
    },
    /// Merge translations back by key into `<original>_merged.po`.
    Merge {
        #[arg(value_name = "original.po")]
        original: PathBuf,
        /// The extracted file, filled in by a translator.
        #[arg(value_name = "filled.po")]
        filled: PathBuf,
    },
    /// Fill untranslated entries by msgid into `<original>_filled.po`.
    Fill {
        #[arg(value_name = "original.po")]
        original: PathBuf,
        /// An older catalog with existing translations.
        #[arg(value_name = "legacy.po")]
        legacy: PathBuf,
    },
}

impl From<Command> for Request {
    fn from(command: Command) -> Request {
        match command {
            Command::Extract { input } => Request::Extract { input },
            Command::Merge { original, filled } => Request::Merge { original, filled },
            Command::Fill { original, legacy } => Request::FillEmpty { original, legacy },
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().filter_or("RUST_LOG", "info"));
    let cli = Cli::parse();
    let parser = Parser::new().reset_fields_between_entries(cli.reset_fields);

    match cli.command {
        Some(command) => {
            let output = Request::from(command).run(&parser)?;
            info!("Done, see {}", output.display());
        }
        None => {
            Menu::new(io::stdin().lock(), io::stdout().lock())
                .with_retries(cli.retries)
                .run(&parser)?;
        }
    }

    Ok(())
}
