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

//! Interactive selection of an operation and its input files.
//!
//! The menu reads from any [`BufRead`] and writes to any [`Write`] so
//! that it can be driven by tests.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use log::info;

use crate::catalog::Parser;
use crate::workflow::{run_extract, run_fill_empty, run_merge, Operation};

const RULE: &str = "---------------------------------------------------------";

/// Default number of invalid choices before giving up.
pub const DEFAULT_RETRIES: u32 = 5;

/// An operation together with its resolved input paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    Extract { input: PathBuf },
    Merge { original: PathBuf, filled: PathBuf },
    FillEmpty { original: PathBuf, legacy: PathBuf },
}

impl Request {
    /// Run the request and return the path of the written file.
    pub fn run(&self, parser: &Parser) -> anyhow::Result<PathBuf> {
        match self {
            Request::Extract { input } => run_extract(input, parser),
            Request::Merge { original, filled } => run_merge(original, filled, parser),
            Request::FillEmpty { original, legacy } => run_fill_empty(original, legacy, parser),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
enum State {
    Prompting { retries_left: u32 },
    Dispatching(Operation),
    Exiting(Option<Request>),
}

pub struct Menu<R, W> {
    input: R,
    output: W,
    retries: u32,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            retries: DEFAULT_RETRIES,
        }
    }

    /// Set the number of invalid choices accepted before exiting.
    pub fn with_retries(mut self, retries: u32) -> Self {
        self.retries = retries;
        self
    }

    /// Ask for an operation and its paths.
    ///
    /// Returns `None` if no valid choice was made within the retry
    /// budget or if the input ended.
    pub fn select(&mut self) -> anyhow::Result<Option<Request>> {
        let mut state = State::Prompting {
            retries_left: self.retries,
        };
        loop {
            state = match state {
                State::Prompting { retries_left: 0 } => State::Exiting(None),
                State::Prompting { retries_left } => {
                    self.print_banner()?;
                    match self.read_line()? {
                        None => State::Exiting(None),
                        Some(choice) => match Operation::from_choice(&choice) {
                            Some(operation) => {
                                writeln!(self.output)?;
                                State::Dispatching(operation)
                            }
                            None => {
                                writeln!(self.output, "Command not recognized.")?;
                                State::Prompting {
                                    retries_left: retries_left - 1,
                                }
                            }
                        },
                    }
                }
                State::Dispatching(operation) => State::Exiting(self.ask_paths(operation)?),
                State::Exiting(request) => return Ok(request),
            };
        }
    }

    /// Run the whole interactive session.
    pub fn run(&mut self, parser: &Parser) -> anyhow::Result<()> {
        if let Some(request) = self.select()? {
            let output = request.run(parser)?;
            writeln!(self.output, "Wrote {}", output.display())?;
        } else {
            info!("No operation selected");
        }
        writeln!(self.output, "Press Enter to exit.")?;
        self.output.flush()?;
        self.read_line()?;
        Ok(())
    }

    fn print_banner(&mut self) -> anyhow::Result<()> {
        let out = &mut self.output;
        writeln!(out, "{RULE}")?;
        writeln!(out, "--------EXTRACTION AND MERGING OF EMPTY STRINGS----------")?;
        writeln!(out, "{RULE}")?;
        writeln!(out)?;
        writeln!(out, "E - Extract empty line from po.")?;
        writeln!(out, "M - Merge a .po with filled strings to the original .po")?;
        writeln!(out)?;
        writeln!(out, "{RULE}")?;
        writeln!(out, "---------------------OTHER FEATURES----------------------")?;
        writeln!(out, "{RULE}")?;
        writeln!(out)?;
        writeln!(
            out,
            "F - Fill empty string of a .po with translated strings of an old .po."
        )?;
        writeln!(out)?;
        out.flush()?;
        Ok(())
    }

    fn ask_paths(&mut self, operation: Operation) -> anyhow::Result<Option<Request>> {
        let request = match operation {
            Operation::Extract => {
                let Some(input) =
                    self.ask_path("Write path or drag .po file with empty lines to extract.")?
                else {
                    return Ok(None);
                };
                Request::Extract { input }
            }
            Operation::Merge => {
                let Some(original) = self
                    .ask_path("Write path or drag the original full .po file with empty lines.")?
                else {
                    return Ok(None);
                };
                let Some(filled) = self.ask_path(
                    "Write path or drag the extracted .po file with empty lines filled by translators.",
                )?
                else {
                    return Ok(None);
                };
                Request::Merge { original, filled }
            }
            Operation::FillEmpty => {
                let Some(original) = self
                    .ask_path("Write path or drag the original full .po file with empty lines.")?
                else {
                    return Ok(None);
                };
                let Some(legacy) = self.ask_path("Write path or drag the old .po file.")? else {
                    return Ok(None);
                };
                Request::FillEmpty { original, legacy }
            }
        };
        Ok(Some(request))
    }

    fn ask_path(&mut self, prompt: &str) -> anyhow::Result<Option<PathBuf>> {
        writeln!(self.output, "{prompt}")?;
        self.output.flush()?;
        Ok(self.read_line()?.map(|line| clean_path(&line)))
    }

    /// Read one line without its line ending, `None` at end of input.
    fn read_line(&mut self) -> anyhow::Result<Option<String>> {
        let mut line = String::new();
        let count = self
            .input
            .read_line(&mut line)
            .context("Could not read from input")?;
        if count == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}

/// Strip whitespace and the quotes added when a file is dragged onto
/// a terminal.
fn clean_path(line: &str) -> PathBuf {
    let line = line.trim();
    let line = line
        .strip_prefix('"')
        .and_then(|line| line.strip_suffix('"'))
        .unwrap_or(line);
    Path::new(line).to_path_buf()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;

    fn select(input: &str, retries: u32) -> (Option<Request>, String) {
        let mut output = Vec::new();
        let request = Menu::new(input.as_bytes(), &mut output)
            .with_retries(retries)
            .select()
            .unwrap();
        (request, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_select_extract() {
        let (request, output) = select("e\nfoo.po\n", DEFAULT_RETRIES);
        assert_eq!(
            request,
            Some(Request::Extract {
                input: PathBuf::from("foo.po")
            })
        );
        assert!(output.contains("E - Extract empty line from po."));
        assert!(output.contains("Write path or drag .po file with empty lines to extract."));
    }

    #[test]
    fn test_select_merge_after_retry() {
        let (request, output) = select("x\nM\nit.po\nit_extracted.po\n", DEFAULT_RETRIES);
        assert_eq!(
            request,
            Some(Request::Merge {
                original: PathBuf::from("it.po"),
                filled: PathBuf::from("it_extracted.po"),
            })
        );
        assert_eq!(output.matches("Command not recognized.").count(), 1);
    }

    #[test]
    fn test_select_fill_empty_quoted_paths() {
        let (request, _) = select("F\r\n\"/tmp/new.po\"\r\n  old.po  \r\n", DEFAULT_RETRIES);
        assert_eq!(
            request,
            Some(Request::FillEmpty {
                original: PathBuf::from("/tmp/new.po"),
                legacy: PathBuf::from("old.po"),
            })
        );
    }

    #[test]
    fn test_select_retries_exhausted() {
        let (request, output) = select("a\nb\nc\ne\nfoo.po\n", 3);
        assert_eq!(request, None);
        assert_eq!(output.matches("Command not recognized.").count(), 3);
        assert_eq!(output.matches("E - Extract").count(), 3);
    }

    #[test]
    fn test_select_end_of_input() {
        assert_eq!(select("", DEFAULT_RETRIES).0, None);
        assert_eq!(select("m\nit.po\n", DEFAULT_RETRIES).0, None);
    }

    #[test]
    fn test_run_extract_session() -> anyhow::Result<()> {
        let tmpdir = tempfile::tempdir()?;
        let input = tmpdir.path().join("de.po");
        fs::write(
            &input,
            "# header\n\
             \n\
             #. Key: K1\n\
             msgctxt \"\"\n\
             msgid \"Hello\"\n\
             msgstr \"\"\n\
             \n",
        )?;

        let mut output = Vec::new();
        let script = format!("E\n{}\n\n", input.display());
        Menu::new(script.as_bytes(), &mut output).run(&Parser::new())?;

        let output = String::from_utf8(output)?;
        assert!(output.ends_with("Press Enter to exit.\n"));
        assert!(tmpdir.path().join("de_extracted.po").exists());
        Ok(())
    }
}
