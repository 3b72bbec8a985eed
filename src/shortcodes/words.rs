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
//! Descriptive words for emoji sequences, derived from the names of their characters.

use std::collections::HashSet;

use itertools::Itertools;

use crate::emojis::emoji_kind::{CANCEL_TAG, KEYCAP, letter_for, VS15, VS16, ZWJ};
use crate::emojis::skin_tone::SkinTone;
use crate::shortcodes::normalize::{tokenize, unique_identifiers};
use crate::tables::names::CharacterNames;

/// Words that don't describe anything on their own
pub const STOP_WORDS: [&str; 18] = [
    "a", "an", "and", "for", "with", "without", "of", "the",
    "sign", "symbol", "selector", "variation", "text", "emoji", "presentation",
    "zero", "width", "joiner",
];

/// The default number of word pairs generated by [pair_words]
pub const DEFAULT_PAIR_LIMIT: usize = 5;

lazy_static! {
    static ref STOP_WORD_SET: HashSet<&'static str> = STOP_WORDS.iter().copied().collect();
}

/// Codepoints that only glue a sequence together.
/// Skin tones are skipped as well; they're handled separately.
fn is_structural(codepoint: u32) -> bool {
    [ZWJ, VS15, VS16, KEYCAP, CANCEL_TAG].contains(&codepoint)
        || SkinTone::is_skin_tone(codepoint)
}

/// Extracts the lowercase words describing a codepoint sequence, in order of their first occurrence.
///
/// Every codepoint contributes the tokens of its character name (or `u<hex>` for unnamed ones),
/// minus [STOP_WORDS]. Tag letters and regional indicators contribute their letter.
/// Only words longer than one character are kept.
/// # Examples
/// ```
/// use emoji_shortcodes::shortcodes::words::extract_words;
/// use emoji_shortcodes::tables::names::NameTable;
///
/// let names = NameTable::new();
/// assert_eq!(extract_words(&[0x1f600], &names), vec!["grinning", "face"]);
/// // thumbs up sign + medium skin tone
/// assert_eq!(extract_words(&[0x1f44d, 0x1f3fd], &names), vec!["thumbs", "up"]);
/// ```
pub fn extract_words<N>(sequence: &[u32], names: &N) -> Vec<String>
    where N: CharacterNames + ?Sized {
    let mut words = Vec::with_capacity(sequence.len() * 3);
    for codepoint in sequence.iter().copied() {
        if is_structural(codepoint) {
            continue;
        }
        if let Some(letter) = letter_for(codepoint) {
            words.push(letter.to_string());
            continue;
        }
        let name = names.name(codepoint)
            .unwrap_or_else(|| format!("u{:x}", codepoint));
        words.extend(tokenize(&name).into_iter()
            .filter(|token| !STOP_WORD_SET.contains(token.as_str())));
    }
    unique_identifiers(words).into_iter()
        .filter(|word| word.chars().count() > 1)
        .collect()
}

/// Joins adjacent words to pairs (`word1_word2`), at most `limit` of them.
/// # Examples
/// ```
/// use emoji_shortcodes::shortcodes::words::pair_words;
///
/// let words: Vec<String> = vec!["woman".into(), "health".into(), "worker".into()];
/// assert_eq!(pair_words(&words, 5), vec!["woman_health", "health_worker"]);
/// assert_eq!(pair_words(&words, 1), vec!["woman_health"]);
/// assert!(pair_words(&words[..1], 5).is_empty());
/// ```
pub fn pair_words<S: AsRef<str>>(words: &[S], limit: usize) -> Vec<String> {
    words.iter()
        .map(|word| word.as_ref())
        .tuple_windows()
        .take(limit)
        .map(|(first, second)| format!("{}_{}", first, second))
        .collect()
}
