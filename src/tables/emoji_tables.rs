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
//! A module that parses [Unicode® emoji data tables][unicode] (or tables in a similar format)
//! into an ordered lookup table of RGI emoji sequences.
//!
//! [unicode]: https://unicode.org/Public/emoji/13.0/

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

use indexmap::{IndexMap, IndexSet};
use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;

use crate::emojis::emoji::Emoji;
use crate::emojis::emoji_status::EmojiStatus;
use crate::tables::errors::ExpansionError;

/// A code sequence
pub type EmojiTableKey = Vec<u32>;

const HEX: &str = r"[a-fA-F0-9]{1,8}";

/// Something that knows which codepoint sequences are full RGI emojis.
pub trait EmojiMatcher {
    /// All full emoji sequences this matcher knows of, deduplicated and in a stable order
    fn candidates(&self) -> Vec<Emoji>;

    /// Whether the sequence is one complete RGI emoji
    fn is_full_emoji_sequence(&self, candidate: &[u32]) -> bool;

    /// Finds all full emoji sequences in a text, in order of their first appearance.
    ///
    /// The text is split into extended grapheme clusters, each of which is tested as a whole.
    fn scan(&self, text: &str) -> Vec<Emoji> {
        let found: IndexSet<Emoji> = text.graphemes(true)
            .map(Emoji::from)
            .filter(|emoji| self.is_full_emoji_sequence(&emoji.sequence))
            .collect();
        found.into_iter().collect()
    }
}

/// Collects the candidates of a generation run: the emojis found in the given source texts first,
/// followed by everything the matcher knows of. Every emoji is only listed once.
pub fn enumerate_candidates<M, S>(matcher: &M, sources: &[S]) -> Vec<Emoji>
    where M: EmojiMatcher + ?Sized, S: AsRef<str> {
    let candidates: IndexSet<Emoji> = sources.iter()
        .flat_map(|source| matcher.scan(source.as_ref()))
        .chain(matcher.candidates())
        .collect();
    candidates.into_iter().collect()
}

/// An internal representation of one or more Unicode® emoji data tables
/// <https://unicode.org/Public/emoji/13.0/>
/// It maps emoji code sequences to their qualification status(es), in the order they were read.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct EmojiTable {
    table: IndexMap<EmojiTableKey, Vec<EmojiStatus>>,
}

impl EmojiTable {
    /// Creates a new, empty emoji table
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads multiple files which are formatted like `emoji-test.txt` or `emoji-sequences.txt`.
    /// # Examples:
    /// ```
    /// use std::path::PathBuf;
    /// use emoji_shortcodes::tables::emoji_tables::{EmojiMatcher, EmojiTable};
    ///
    /// // Contains the entries
    /// // 1F3F3 FE0F 200D 1F308 ; fully-qualified # 🏳️‍🌈 E4.0 rainbow flag
    /// // 1F3F3 200D 1F308      ; minimally-qualified # 🏳‍🌈 E4.0 rainbow flag
    /// let paths = vec![PathBuf::from("test_files/tables/emoji-test.txt")];
    ///
    /// let table = EmojiTable::from_files(&paths).unwrap();
    ///
    /// assert!(table.is_full_emoji_sequence(&[0x1f3f3, 0xfe0f, 0x200d, 0x1f308]));
    /// assert!(!table.is_full_emoji_sequence(&[0x1f3f3, 0x200d, 0x1f308]));
    /// ```
    pub fn from_files<P: AsRef<Path>>(paths: &[P]) -> Result<EmojiTable, ExpansionError> {
        let mut table = EmojiTable::new();
        let errors: Vec<ExpansionError> = paths.iter()
            .filter_map(|path| table.expand_from_file(path).err())
            .collect();
        match errors.len() {
            0 => Ok(table),
            1 => Err(errors.into_iter().next().unwrap_or(ExpansionError::Multiple(vec![]))),
            _ => Err(errors.into())
        }
    }

    pub fn expand_from_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), ExpansionError> {
        let file = File::open(path)?;
        self.expand(BufReader::new(file));
        Ok(())
    }

    /// Expands the table with the contents of a Unicode® emoji table.
    ///
    /// Two line formats are understood:
    /// - `emoji-test.txt`: `1F600 ; fully-qualified # 😀 E1.0 grinning face`;
    ///   the status is taken as it is
    /// - `emoji-sequences.txt`/`emoji-zwj-sequences.txt`:
    ///   `1F1E6 1F1E8 ; RGI_Emoji_Flag_Sequence ; flag: Ascension Island # E2.0 [1] (🇦🇨)`
    ///   or ranges like `231A..231B ; Basic_Emoji ; watch..hourglass done # E0.6 [2] (⌚..⌛)`;
    ///   `Basic_Emoji`, `Emoji_Keycap_Sequence` and `RGI_*` entries are fully-qualified,
    ///   other properties are skipped
    ///
    /// Malformed lines are logged and skipped.
    /// # Examples
    /// ```
    /// use std::io::Cursor;
    /// use emoji_shortcodes::tables::emoji_tables::{EmojiMatcher, EmojiTable};
    ///
    /// let mut table = EmojiTable::new();
    /// table.expand(Cursor::new("\
    /// 1F600 ; fully-qualified # 😀 E1.0 grinning face
    /// 231A..231B ; Basic_Emoji ; watch # E0.6 [2] (⌚..⌛)
    /// 0023 ; Emoji # E0.0 [1] (#️) hash sign
    /// "));
    ///
    /// assert_eq!(table.len(), 3);
    /// assert!(table.is_full_emoji_sequence(&[0x231b]));
    /// assert!(!table.is_full_emoji_sequence(&[0x23]));
    /// ```
    pub fn expand<I: BufRead>(&mut self, reader: I) {
        lazy_static! {
            static ref SEQUENCE: String = format!(r"(?P<sequence>{hex}(\s+{hex})*)", hex = HEX);
            static ref RANGE: String = format!(r"(?P<range_start>{hex})\.\.(?P<range_end>{hex})", hex = HEX);
            static ref TEST_REGEX: Regex = Regex::new(&format!(
                r"^{}\s*;\s*(?P<status>component|fully-qualified|minimally-qualified|unqualified)\s*(#.*)?$",
                &*SEQUENCE
            )).unwrap();
            static ref DATA_REGEX: Regex = Regex::new(&format!(
                r"^({}|{})\s*;\s*(?P<kind>[A-Za-z_]+)\s*(;[^#]*)?(#.*)?$",
                &*RANGE, &*SEQUENCE
            )).unwrap();
        }

        for line in reader.lines()
            .filter_map(|line| line.ok()) {
            let line = line.trim();
            if line.starts_with('#') || line.is_empty() {
                continue;
            }
            if let Some(captures) = TEST_REGEX.captures(line) {
                let status = EmojiStatus::from_str(&captures["status"]).unwrap_or_default();
                self.insert(Self::key_from_str(&captures["sequence"]), status);
            } else if let Some(captures) = DATA_REGEX.captures(line) {
                if !Self::is_rgi_kind(&captures["kind"]) {
                    continue;
                }
                if let (Some(start), Some(end)) = (captures.name("range_start"), captures.name("range_end")) {
                    self.insert_range(start.as_str(), end.as_str());
                } else if let Some(sequence) = captures.name("sequence") {
                    self.insert(Self::key_from_str(sequence.as_str()), EmojiStatus::FullyQualified);
                }
            } else {
                error!("Malformed line in emoji-table: {}", line);
            }
        }
    }

    fn is_rgi_kind(kind: &str) -> bool {
        let kind = kind.to_ascii_lowercase();
        kind == "basic_emoji" || kind == "emoji_keycap_sequence" || kind.starts_with("rgi_")
    }

    /// Parses lines that specify a range of single codepoint emojis,
    /// like `1F3F3..1F3F5 ; Basic_Emoji ; ...`
    fn insert_range(&mut self, start: &str, end: &str) {
        // Start and end are already built from a regular expression that only matches hexadecimal strings
        let (start, end) = match (u32::from_str_radix(start, 16), u32::from_str_radix(end, 16)) {
            (Ok(start), Ok(end)) => (start, end),
            _ => return
        };
        for codepoint in start..=end {
            self.insert(vec![codepoint], EmojiStatus::FullyQualified);
        }
    }

    fn key_from_str(raw_codepoints: &str) -> EmojiTableKey {
        lazy_static! {
            static ref HEX_SEQUENCE: Regex = Regex::new(HEX).unwrap();
        }

        HEX_SEQUENCE.find_iter(raw_codepoints)
            .map(|sequence| u32::from_str_radix(sequence.as_str(), 16).unwrap_or_default())
            .filter(|codepoint| *codepoint > 0)
            .collect()
    }

    /// Adds a status for a sequence; the position of a sequence is the one of its first insertion.
    pub fn insert(&mut self, sequence: EmojiTableKey, status: EmojiStatus) {
        if sequence.is_empty() {
            return;
        }
        let statuses = self.table.entry(sequence).or_insert_with(|| Vec::with_capacity(1));
        if !statuses.contains(&status) {
            statuses.push(status);
        }
    }

    pub fn get(&self, sequence: &[u32]) -> Option<&Vec<EmojiStatus>> {
        self.table.get(sequence)
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Adds all entries of another table.
    pub fn extend(&mut self, other: EmojiTable) {
        for (sequence, statuses) in other.table {
            for status in statuses {
                self.insert(sequence.clone(), status);
            }
        }
    }
}

impl EmojiMatcher for EmojiTable {
    fn candidates(&self) -> Vec<Emoji> {
        self.table.iter()
            .filter(|(_, statuses)| statuses.iter().any(EmojiStatus::is_full_sequence))
            .map(|(sequence, _)| Emoji::from(sequence.as_slice()))
            .collect()
    }

    fn is_full_emoji_sequence(&self, candidate: &[u32]) -> bool {
        self.table.get(candidate)
            .map(|statuses| statuses.iter().any(EmojiStatus::is_full_sequence))
            .unwrap_or(false)
    }
}
