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
//! The generation pipeline: synthesize an entry for every candidate, let curated data override it,
//! hand out unique shortcodes and finally keep every curated emoji that wasn't a candidate.

use std::collections::HashSet;
use std::fmt::{Display, Formatter};
use std::fmt;

use crate::emojis::emoji::Emoji;
use crate::shortcodes::dedupe::ShortcodeRegistry;
use crate::shortcodes::entry::EmojiEntry;
use crate::shortcodes::merge::{CuratedStore, merge, merge_unseen};
use crate::tables::curated::CuratedError;
use crate::tables::errors::ExpansionError;
use crate::tables::names::CharacterNames;

/// Builds the entries of one data set.
///
/// Every call to [generate](Generator::generate) starts with its own [ShortcodeRegistry],
/// so the result only depends on its inputs.
pub struct Generator<'a, N: CharacterNames + ?Sized> {
    names: &'a N,
}

impl<'a, N: CharacterNames + ?Sized> Generator<'a, N> {
    pub fn new(names: &'a N) -> Self {
        Generator { names }
    }

    /// Generates one entry per candidate (in candidate order), followed by one entry for every
    /// curated emoji that isn't a candidate (in curated order).
    ///
    /// Duplicate candidates are only processed once.
    /// # Examples
    /// ```
    /// use std::collections::HashMap;
    /// use emoji_shortcodes::emojis::emoji::Emoji;
    /// use emoji_shortcodes::generator::Generator;
    /// use emoji_shortcodes::tables::curated::CuratedTable;
    ///
    /// let names: HashMap<u32, String> = vec![(0x1f600, String::from("GRINNING FACE"))]
    ///     .into_iter()
    ///     .collect();
    /// let candidates = vec![Emoji::from("😀"), Emoji::from("🇩🇪")];
    ///
    /// let entries = Generator::new(&names)
    ///     .generate(&candidates, &CuratedTable::new())
    ///     .unwrap();
    ///
    /// assert_eq!(entries[0].shortcode, "grinning_face");
    /// assert_eq!(entries[1].shortcode, "flag_de");
    /// ```
    pub fn generate<C>(&self, candidates: &[Emoji], curated: &C) -> Result<Vec<EmojiEntry>, GenerationError>
        where C: CuratedStore + ?Sized {
        if candidates.is_empty() {
            return Err(GenerationError::NoCandidates);
        }

        let mut registry = ShortcodeRegistry::new();
        let mut seen: HashSet<&Emoji> = HashSet::with_capacity(candidates.len());
        let mut entries = Vec::with_capacity(candidates.len());
        let mut overridden: usize = 0;

        for candidate in candidates {
            if candidate.is_empty() || !seen.insert(candidate) {
                continue;
            }
            let curated_entry = curated.lookup(candidate);
            if curated_entry.is_some() {
                overridden += 1;
            }
            let base = EmojiEntry::synthesize(candidate, self.names);
            entries.push(registry.finalize(merge(base, curated_entry)));
        }

        let mut preserved: usize = 0;
        for curated_entry in curated.entries() {
            if curated_entry.emoji.is_empty() || seen.contains(&curated_entry.emoji) {
                continue;
            }
            entries.push(registry.finalize(merge_unseen(curated_entry)));
            preserved += 1;
        }

        info!("Generated {} entries ({} with curated overrides, {} preserved curated entries)",
              entries.len(), overridden, preserved);
        Ok(entries)
    }
}

#[derive(Debug)]
/// Everything that might go wrong during a generation run
pub enum GenerationError {
    /// There's nothing to generate entries for
    NoCandidates,
    /// Wrapper for [ExpansionError]
    Table(ExpansionError),
    /// Wrapper for [CuratedError]
    Curated(CuratedError),
    /// Wrapper for [std::io::Error]
    Io(std::io::Error),
    /// Wrapper for [serde_json::Error]
    Json(serde_json::Error),
}

impl Display for GenerationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            GenerationError::NoCandidates =>
                write!(f, "No emoji candidates found. Please specify at least one emoji table or source file"),
            GenerationError::Table(error) => Display::fmt(error, f),
            GenerationError::Curated(error) => Display::fmt(error, f),
            GenerationError::Io(error) => Display::fmt(error, f),
            GenerationError::Json(error) => Display::fmt(error, f),
        }
    }
}

impl std::error::Error for GenerationError {}

impl From<ExpansionError> for GenerationError {
    fn from(error: ExpansionError) -> Self {
        GenerationError::Table(error)
    }
}

impl From<CuratedError> for GenerationError {
    fn from(error: CuratedError) -> Self {
        GenerationError::Curated(error)
    }
}

impl From<std::io::Error> for GenerationError {
    fn from(error: std::io::Error) -> Self {
        GenerationError::Io(error)
    }
}

impl From<serde_json::Error> for GenerationError {
    fn from(error: serde_json::Error) -> Self {
        GenerationError::Json(error)
    }
}
