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

//! Line-oriented reading and writing of PO catalogs.
//!
//! The format handled here is deliberately narrower than full
//! Gettext: a header block terminated by the first blank line,
//! followed by blank-line separated entries. Each entry has a
//! `#. Key: ...` comment, a `msgctxt`, a `msgid` and a `msgstr` line.
//! Any other line of an entry is kept verbatim as its prefix.

use log::warn;

const KEY_MARKER: &str = "#. Key";
const MSGID_MARKER: &str = "msgid";
const MSGSTR_MARKER: &str = "msgstr";
const MSGCTXT_MARKER: &str = "msgctxt";

const KEY_PREFIX: &str = "#. Key: ";
const MSGID_PREFIX: &str = "msgid \"";
const MSGSTR_PREFIX: &str = "msgstr \"";
const MSGCTXT_PREFIX: &str = "msgctxt \"";

/// A single translation unit.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Entry {
    /// Comment and location lines, in file order.
    pub prefix: Vec<String>,
    /// Identifier taken from the `#. Key: ` comment.
    pub key: String,
    /// Content of the `msgctxt` line.
    pub context: String,
    /// Content of the `msgid` line.
    pub source_text: String,
    /// Content of the `msgstr` line.
    pub translated_text: String,
    /// Whether `translated_text` was empty when the entry was parsed.
    ///
    /// This is not updated when the translation changes.
    pub is_translation_empty: bool,
}

impl Entry {
    /// Serialize the entry, without the trailing blank line.
    pub fn to_lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.prefix.len() + 4);
        lines.push(format!("{KEY_PREFIX}{}", self.key));
        lines.extend(self.prefix.iter().cloned());
        lines.push(format!("{MSGCTXT_PREFIX}{}\"", self.context));
        lines.push(format!("{MSGID_PREFIX}{}\"", self.source_text));
        lines.push(format!("{MSGSTR_PREFIX}{}\"", self.translated_text));
        lines
    }
}

/// A parsed PO file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Catalog {
    /// Lines before the first blank line, kept verbatim.
    pub header: Vec<String>,
    /// Entries in file order. Duplicates are allowed.
    pub entries: Vec<Entry>,
}

impl Catalog {
    /// Parse `text` with the default [`Parser`].
    pub fn from_text(text: &str) -> Catalog {
        Parser::new().parse_text(text)
    }

    /// Serialize the catalog into lines.
    ///
    /// The header is followed by a blank line and every entry is
    /// followed by a blank line.
    pub fn to_lines(&self) -> Vec<String> {
        let mut lines = self.header.clone();
        lines.push(String::new());
        for entry in &self.entries {
            lines.extend(entry.to_lines());
            lines.push(String::new());
        }
        lines
    }

    /// Serialize the catalog into text with one `\n` after every line.
    pub fn to_text(&self) -> String {
        let mut text = String::new();
        for line in self.to_lines() {
            text.push_str(&line);
            text.push('\n');
        }
        text
    }

    /// Find the first entry with the given key.
    pub fn find_by_key(&self, key: &str) -> Option<&Entry> {
        self.entries.iter().find(|entry| entry.key == key)
    }

    /// Find the first entry with the given source text.
    pub fn find_by_source(&self, source_text: &str) -> Option<&Entry> {
        self.entries
            .iter()
            .find(|entry| entry.source_text == source_text)
    }
}

/// Which field a marker line sets.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Field {
    SourceText,
    TranslatedText,
    Key,
    Context,
}

impl Field {
    /// Classify a line by substring, in precedence order.
    fn classify(line: &str) -> Option<Field> {
        if line.contains(MSGID_MARKER) {
            Some(Field::SourceText)
        } else if line.contains(MSGSTR_MARKER) {
            Some(Field::TranslatedText)
        } else if line.contains(KEY_MARKER) {
            Some(Field::Key)
        } else if line.contains(MSGCTXT_MARKER) {
            Some(Field::Context)
        } else {
            None
        }
    }

    /// Extract the value from a line, or `None` if the line is not
    /// shaped like the field.
    fn value<'a>(&self, line: &'a str) -> Option<&'a str> {
        match self {
            Field::SourceText => line.strip_prefix(MSGID_PREFIX)?.strip_suffix('"'),
            Field::TranslatedText => line.strip_prefix(MSGSTR_PREFIX)?.strip_suffix('"'),
            Field::Key => line.strip_prefix(KEY_PREFIX),
            Field::Context => line.strip_prefix(MSGCTXT_PREFIX)?.strip_suffix('"'),
        }
    }

    fn slot<'a>(&self, entry: &'a mut Entry) -> &'a mut String {
        match self {
            Field::SourceText => &mut entry.source_text,
            Field::TranslatedText => &mut entry.translated_text,
            Field::Key => &mut entry.key,
            Field::Context => &mut entry.context,
        }
    }
}

/// Catalog parser.
///
/// By default the key, context, source text and translated text of
/// an entry carry over from the previous entry when the entry lacks
/// the corresponding line. An entry without a `msgctxt` line thus
/// gets the context of the entry before it. Use
/// [`Parser::reset_fields_between_entries`] to start every entry from
/// empty fields instead.
#[derive(Debug, Default, Clone)]
pub struct Parser {
    reset_fields: bool,
}

impl Parser {
    pub fn new() -> Parser {
        Parser::default()
    }

    /// Reset the fields to empty at every entry boundary.
    pub fn reset_fields_between_entries(mut self, reset: bool) -> Parser {
        self.reset_fields = reset;
        self
    }

    /// Parse text split into lines on `\n`, `\r\n` or a lone `\r`.
    ///
    /// A byte order mark at the start of `text` is ignored.
    pub fn parse_text(&self, text: &str) -> Catalog {
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);
        self.parse(split_lines(text))
    }

    /// Parse a sequence of lines.
    ///
    /// The first blank line ends the header. Every following blank
    /// line ends an entry. Lines after the last blank line are
    /// dropped.
    pub fn parse<I, S>(&self, lines: I) -> Catalog
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut catalog = Catalog::default();
        let mut in_header = true;
        let mut pending = Vec::new();
        let mut current = Entry::default();

        for (idx, line) in lines.into_iter().enumerate() {
            let line = line.as_ref();

            if !in_header {
                if let Some(field) = Field::classify(line) {
                    match field.value(line) {
                        Some(value) => *field.slot(&mut current) = value.to_string(),
                        None => warn!(
                            "Ignoring malformed {field:?} on line {}: {line:?}",
                            idx + 1
                        ),
                    }
                    continue;
                }
            }

            if !line.is_empty() {
                pending.push(line.to_string());
                continue;
            }

            if in_header {
                catalog.header = std::mem::take(&mut pending);
                in_header = false;
                continue;
            }

            let entry = Entry {
                prefix: std::mem::take(&mut pending),
                is_translation_empty: current.translated_text.is_empty(),
                ..current.clone()
            };
            catalog.entries.push(entry);
            if self.reset_fields {
                current = Entry::default();
            }
        }

        if !pending.is_empty() {
            warn!(
                "Dropping {} line(s) after the last blank line",
                pending.len()
            );
        }

        catalog
    }
}

/// Split `text` at `\n`, `\r\n` and lone `\r` line breaks.
///
/// A break at the very end of `text` does not start another line.
fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut rest = text;
    while !rest.is_empty() {
        let Some(pos) = rest.find(['\r', '\n']) else {
            lines.push(rest);
            break;
        };
        lines.push(&rest[..pos]);
        let break_len = if rest[pos..].starts_with("\r\n") { 2 } else { 1 };
        rest = &rest[pos + break_len..];
    }
    lines
}
