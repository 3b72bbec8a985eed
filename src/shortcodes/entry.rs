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
//! The output unit of the generator and the synthesis of fresh entries from codepoint sequences.

use serde::{Deserialize, Serialize};

use crate::emojis::emoji::Emoji;
use crate::emojis::emoji_kind::EmojiKind;
use crate::emojis::skin_tone::SkinTone;
use crate::shortcodes::normalize::{normalize, spellings, trim_shortcode, unique_identifiers};
use crate::shortcodes::words::{DEFAULT_PAIR_LIMIT, extract_words, pair_words};
use crate::tables::names::CharacterNames;

/// Maximum number of aliases in a finished entry
pub const MAX_ALIASES: usize = 16;
/// Maximum number of keywords in a finished entry
pub const MAX_KEYWORDS: usize = 24;
/// Generic shortcodes are built from this many words at most
const SHORTCODE_WORDS: usize = 6;
/// Only this many single words are repeated in the keywords
const KEYWORD_WORDS: usize = 12;

/// One emoji with its shortcode, aliases and keywords.
///
/// Aliases and keywords are ordered and free of duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmojiEntry {
    pub emoji: Emoji,
    pub shortcode: String,
    pub aliases: Vec<String>,
    pub keywords: Vec<String>,
}

impl EmojiEntry {
    /// Builds a fresh entry (before any curated data or deduplication is applied) from the
    /// structure of the emoji and the names of its characters.
    /// # Examples
    /// ```
    /// use emoji_shortcodes::emojis::emoji::Emoji;
    /// use emoji_shortcodes::shortcodes::entry::EmojiEntry;
    /// use emoji_shortcodes::tables::names::NameTable;
    ///
    /// let names = NameTable::new();
    /// let usa = Emoji::from_u32_sequence(vec![0x1f1fa, 0x1f1f8]).unwrap();
    ///
    /// let entry = EmojiEntry::synthesize(&usa, &names);
    /// assert_eq!(entry.shortcode, "flag_us");
    /// assert_eq!(&entry.aliases[..3], &["flag-us", "us", "u1f1fa_1f1f8"]);
    /// assert_eq!(&entry.keywords[..3], &["flag", "country", "us"]);
    /// ```
    pub fn synthesize<N>(emoji: &Emoji, names: &N) -> EmojiEntry
        where N: CharacterNames + ?Sized {
        let sequence = &emoji.sequence;
        let tones = SkinTone::detect(sequence);
        let words = extract_words(sequence, names);

        let mut aliases: Vec<String> = Vec::with_capacity(8);
        let mut keywords: Vec<String> = Vec::with_capacity(words.len() * 2 + 8);

        let mut shortcode = match EmojiKind::classify(sequence) {
            EmojiKind::FlagPair(country) => {
                let country = country.to_lowercase();
                aliases.extend(vec![format!("flag-{}", country), country.clone()]);
                keywords.extend(vec![String::from("flag"), String::from("country"), country.clone()]);
                format!("flag_{}", country)
            }
            EmojiKind::Keycap(base) => {
                let base = base.to_string();
                aliases.extend(vec![format!("keycap-{}", base), base.clone()]);
                keywords.extend(vec![String::from("keycap"), String::from("number"), base.clone()]);
                format!("keycap_{}", base)
            }
            EmojiKind::TagFlag(region) => {
                aliases.extend(vec![format!("flag-{}", region), region.clone()]);
                keywords.extend(vec![String::from("flag"), String::from("country"), region.clone()]);
                format!("flag_{}", region)
            }
            EmojiKind::Generic if !words.is_empty() => {
                keywords.extend(words.iter().cloned());
                words.iter().take(SHORTCODE_WORDS).cloned().collect::<Vec<_>>().join("_")
            }
            EmojiKind::Generic => format!("emoji_{}", emoji.codepoint_alias()),
        };

        // Only the first skin tone becomes part of the shortcode
        if let Some(tone) = tones.first() {
            keywords.extend(tones.iter().map(|tone| tone.name().to_owned()));
            shortcode = format!("{}_{}", shortcode, tone.name());
        }

        aliases.push(emoji.codepoint_alias());
        aliases.extend(spellings(&shortcode).iter().cloned());
        keywords.extend(words.iter().take(KEYWORD_WORDS).cloned());
        keywords.extend(pair_words(&words, DEFAULT_PAIR_LIMIT));
        keywords.extend(aliases.iter().cloned());

        EmojiEntry {
            emoji: emoji.clone(),
            shortcode: trim_shortcode(&shortcode),
            aliases: unique_identifiers(aliases),
            keywords: unique_identifiers(keywords),
        }
    }

    /// Removes aliases and keywords that are equal to the shortcode and caps both lists
    /// to [MAX_ALIASES] and [MAX_KEYWORDS] entries.
    pub fn clean_up(&mut self) {
        let shortcode = self.shortcode.clone();
        let differs = |value: &String| normalize(value) != shortcode;
        self.aliases.retain(differs);
        self.aliases.truncate(MAX_ALIASES);
        self.keywords.retain(differs);
        self.keywords.truncate(MAX_KEYWORDS);
    }
}
