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
//! Curated entries, loaded from JSON files or from data scripts written by earlier runs.

use std::fmt::{Display, Formatter};
use std::fmt;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use indexmap::IndexMap;
use regex::Regex;
use serde_json::Value;

use crate::emojis::emoji::Emoji;
use crate::shortcodes::merge::{CuratedEntry, CuratedStore};

/// The global the data script assigns its entries to
pub const DATA_GLOBAL: &str = "EMOJI_COMPLETER_DATA";

/// Curated entries in the order they were first defined, keyed by their emoji
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CuratedTable {
    entries: IndexMap<Emoji, CuratedEntry>,
}

impl CuratedTable {
    /// Creates a new, empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads multiple files; an emoji defined in more than one file keeps the definition
    /// of the first file.
    pub fn from_files<P: AsRef<Path>>(paths: &[P]) -> Result<CuratedTable, CuratedError> {
        let mut table = CuratedTable::new();
        for path in paths {
            table.extend_preserve_own(Self::from_file(path)?);
        }
        Ok(table)
    }

    /// Reads a data script (`.js`) or a JSON file (anything else).
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<CuratedTable, CuratedError> {
        let path = path.as_ref();
        let mut reader = BufReader::new(File::open(path)?);
        let is_script = path.extension()
            .map(|extension| extension.eq_ignore_ascii_case("js"))
            .unwrap_or(false);
        let table = if is_script {
            let mut script = String::new();
            reader.read_to_string(&mut script)?;
            Self::from_script(&script)?
        } else {
            Self::from_json_reader(reader)?
        };
        info!("Loaded {} curated entries from {}", table.len(), path.display());
        Ok(table)
    }

    /// Reads a JSON array of `{emoji, shortcode?, aliases?, keywords?}` records.
    ///
    /// Records without an emoji are skipped.
    /// # Examples
    /// ```
    /// use emoji_shortcodes::emojis::emoji::Emoji;
    /// use emoji_shortcodes::shortcodes::merge::CuratedStore;
    /// use emoji_shortcodes::tables::curated::CuratedTable;
    ///
    /// let json = r#"[
    ///     {"emoji": "👍", "shortcode": "thumbsup", "aliases": ["+1", 1]},
    ///     {"shortcode": "nothing"},
    ///     {"emoji": "", "shortcode": "empty"}
    /// ]"#;
    /// let table = CuratedTable::from_json_reader(json.as_bytes()).unwrap();
    ///
    /// assert_eq!(table.len(), 1);
    /// let thumbs_up = table.lookup(&Emoji::from("👍")).unwrap();
    /// assert_eq!(thumbs_up.shortcode.as_deref(), Some("thumbsup"));
    /// assert_eq!(thumbs_up.aliases, Some(vec![String::from("+1"), String::from("1")]));
    /// ```
    pub fn from_json_reader<R: Read>(reader: R) -> Result<CuratedTable, CuratedError> {
        let values: Vec<Value> = serde_json::from_reader(reader)?;
        Ok(Self::from_values(values))
    }

    /// Reads a data script as written by [write_script](crate::output::write_script), i.e.
    /// `window.EMOJI_COMPLETER_DATA = [ { emoji: "…", shortcode: "…", … }, … ];`
    /// # Examples
    /// ```
    /// use emoji_shortcodes::emojis::emoji::Emoji;
    /// use emoji_shortcodes::shortcodes::merge::CuratedStore;
    /// use emoji_shortcodes::tables::curated::CuratedTable;
    ///
    /// let script = r#"/* global window */
    /// "use strict";
    ///
    /// window.EMOJI_COMPLETER_DATA = [
    ///   { emoji: "😀", shortcode: "grinning", aliases: ["grinning-face"], keywords: ["smile"] },
    /// ];
    /// "#;
    /// let table = CuratedTable::from_script(script).unwrap();
    ///
    /// let grinning = table.lookup(&Emoji::from("😀")).unwrap();
    /// assert_eq!(grinning.keywords, Some(vec![String::from("smile")]));
    /// ```
    pub fn from_script(script: &str) -> Result<CuratedTable, CuratedError> {
        lazy_static! {
            static ref ARRAY: Regex = Regex::new(&format!(r"(?s){}\s*=\s*(?P<array>\[.*\])", DATA_GLOBAL)).unwrap();
            static ref UNQUOTED_KEY: Regex = Regex::new(r"(?P<before>[{,]\s*)(?P<key>emoji|shortcode|aliases|keywords)\s*:").unwrap();
            static ref TRAILING_COMMA: Regex = Regex::new(r",(?P<space>\s*)(?P<close>[\]}])").unwrap();
        }
        let array = ARRAY.captures(script)
            .and_then(|captures| captures.name("array"))
            .ok_or(CuratedError::MissingArray)?
            .as_str();
        let quoted = UNQUOTED_KEY.replace_all(array, "$before\"$key\":");
        let json = TRAILING_COMMA.replace_all(&quoted, "$space$close");
        let values: Vec<Value> = serde_json::from_str(&json)?;
        Ok(Self::from_values(values))
    }

    fn from_values(values: Vec<Value>) -> CuratedTable {
        let mut table = CuratedTable::new();
        for value in values {
            match serde_json::from_value::<CuratedEntry>(value) {
                Ok(entry) => {
                    table.insert(entry);
                }
                Err(error) => warn!("Skipping curated entry: {}", error)
            }
        }
        table
    }

    /// Inserts (or replaces) the entry for its emoji and returns the replaced one.
    /// Entries with an empty emoji are ignored.
    pub fn insert(&mut self, entry: CuratedEntry) -> Option<CuratedEntry> {
        if entry.emoji.is_empty() {
            return None;
        }
        self.entries.insert(entry.emoji.clone(), entry)
    }

    /// Adds the entries of another table for all emojis that aren't defined here yet.
    pub fn extend_preserve_own(&mut self, other: CuratedTable) {
        for (emoji, entry) in other.entries {
            self.entries.entry(emoji).or_insert(entry);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl CuratedStore for CuratedTable {
    fn lookup(&self, emoji: &Emoji) -> Option<&CuratedEntry> {
        self.entries.get(emoji)
    }

    fn entries(&self) -> Vec<&CuratedEntry> {
        self.entries.values().collect()
    }
}

#[derive(Debug)]
/// An error that occurs while loading curated entries
pub enum CuratedError {
    /// Wrapper for [std::io::Error]
    Io(std::io::Error),
    /// Wrapper for [serde_json::Error]
    Json(serde_json::Error),
    /// The data script doesn't assign an array to the data global
    MissingArray,
}

impl Display for CuratedError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            CuratedError::Io(error) => write!(f, "Could not read curated entries: {}", error),
            CuratedError::Json(error) => write!(f, "Could not parse curated entries: {}", error),
            CuratedError::MissingArray => write!(f, "The data script does not define {}", DATA_GLOBAL),
        }
    }
}

impl std::error::Error for CuratedError {}

impl From<std::io::Error> for CuratedError {
    fn from(error: std::io::Error) -> Self {
        CuratedError::Io(error)
    }
}

impl From<serde_json::Error> for CuratedError {
    fn from(error: serde_json::Error) -> Self {
        CuratedError::Json(error)
    }
}
