/*
 * Copyright 2021 Constantin A. <emoji.builder@c1710.de>
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 *
 */
//! Formal Unicode® character names, which are the raw material for emoji words.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader, Error};
use std::path::Path;

use regex::Regex;

/// Something that knows the formal names of Unicode® characters (e.g. `GRINNING FACE`).
pub trait CharacterNames {
    /// Returns the name of the codepoint, if one is known.
    fn name(&self, codepoint: u32) -> Option<String>;
}

/// A character name lookup that prefers names from `UnicodeData.txt`-like files and falls back to
/// the name database compiled into `unicode_names2`.
///
/// An empty table simply uses the compiled-in names:
/// ```
/// use emoji_shortcodes::tables::names::{CharacterNames, NameTable};
///
/// let names = NameTable::new();
/// assert_eq!(names.name(0x1f600), Some(String::from("GRINNING FACE")));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameTable {
    names: HashMap<u32, String>,
}

impl NameTable {
    /// Creates a new, empty name table
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads multiple `UnicodeData.txt`-like files, later files overriding earlier ones.
    pub fn from_files<P: AsRef<Path>>(paths: &[P]) -> Result<NameTable, Error> {
        let mut table = NameTable::new();
        for path in paths {
            table.expand_from_file(path)?;
        }
        Ok(table)
    }

    pub fn expand_from_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), Error> {
        let file = File::open(path)?;
        self.expand(BufReader::new(file));
        Ok(())
    }

    /// Adds the names of a `UnicodeData.txt`-formatted reader, i.e. lines like
    /// `1F600;GRINNING FACE;So;0;ON;;;;;N;;;;;`.
    ///
    /// Placeholder names like `<control>` or `<CJK Ideograph, First>` are skipped.
    /// # Examples
    /// ```
    /// use std::io::Cursor;
    /// use emoji_shortcodes::tables::names::{CharacterNames, NameTable};
    ///
    /// let mut names = NameTable::new();
    /// names.expand(Cursor::new("1F600;GRINNING FACE WITH STYLE;So;0;ON;;;;;N;;;;;\n0000;<control>;Cc;0;BN;;;;;N;NULL;;;;"));
    ///
    /// assert_eq!(names.name(0x1f600), Some(String::from("GRINNING FACE WITH STYLE")));
    /// assert_eq!(names.len(), 1);
    /// ```
    pub fn expand<I: BufRead>(&mut self, reader: I) {
        lazy_static! {
            static ref DATA_LINE: Regex = Regex::new(r"^(?P<codepoint>[a-fA-F0-9]{1,8});(?P<name>[^;]*);").unwrap();
        }

        for line in reader.lines()
            .filter_map(|line| line.ok()) {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            if let Some(captures) = DATA_LINE.captures(line) {
                let name = captures["name"].trim();
                if name.is_empty() || name.starts_with('<') {
                    continue;
                }
                // Already limited to 8 hex digits
                if let Ok(codepoint) = u32::from_str_radix(&captures["codepoint"], 16) {
                    self.names.insert(codepoint, name.to_owned());
                }
            } else {
                error!("Malformed line in character name table: {}", line);
            }
        }
    }

    pub fn insert(&mut self, codepoint: u32, name: &str) -> Option<String> {
        self.names.insert(codepoint, name.to_owned())
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl CharacterNames for NameTable {
    fn name(&self, codepoint: u32) -> Option<String> {
        self.names.get(&codepoint)
            .cloned()
            .or_else(|| char::from_u32(codepoint)
                .and_then(unicode_names2::name)
                .map(|name| name.to_string()))
    }
}

/// A plain map without any fallback, mostly useful for tests.
impl CharacterNames for HashMap<u32, String> {
    fn name(&self, codepoint: u32) -> Option<String> {
        self.get(&codepoint).cloned()
    }
}
