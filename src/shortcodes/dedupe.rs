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
//! Assignment of unique shortcodes within one generation run.

use std::collections::HashSet;

use crate::shortcodes::entry::EmojiEntry;
use crate::shortcodes::normalize::{MAX_SHORTCODE_LENGTH, trim_shortcode, truncate};

/// Keeps track of all shortcodes that have been handed out so far.
///
/// Uniqueness depends on the order in which shortcodes are requested:
/// the first request for a shortcode gets it, later ones get a numbered variant.
#[derive(Debug, Default, Clone)]
pub struct ShortcodeRegistry {
    used: HashSet<String>,
}

impl ShortcodeRegistry {
    /// Creates a new, empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a shortcode that hasn't been used before and marks it as used.
    ///
    /// The candidate is normalized and cut to [MAX_SHORTCODE_LENGTH] characters first.
    /// If it's taken, `_2`, `_3`, ... are appended; the candidate (never the suffix) is shortened
    /// so the result still fits into [MAX_SHORTCODE_LENGTH] characters.
    /// # Examples
    /// ```
    /// use emoji_shortcodes::shortcodes::dedupe::ShortcodeRegistry;
    ///
    /// let mut registry = ShortcodeRegistry::new();
    /// assert_eq!(registry.dedupe("grinning_face"), "grinning_face");
    /// assert_eq!(registry.dedupe("grinning_face"), "grinning_face_2");
    /// assert_eq!(registry.dedupe("Grinning Face"), "grinning_face_3");
    ///
    /// let long = "a".repeat(50);
    /// assert_eq!(registry.dedupe(&long), "a".repeat(40));
    /// assert_eq!(registry.dedupe(&long), format!("{}_2", "a".repeat(38)));
    /// ```
    pub fn dedupe(&mut self, candidate: &str) -> String {
        let base = trim_shortcode(candidate);
        if self.used.insert(base.clone()) {
            return base;
        }

        let mut counter: usize = 2;
        loop {
            let suffix = format!("_{}", counter);
            let room = MAX_SHORTCODE_LENGTH.saturating_sub(suffix.len()).max(1);
            let prefix = match truncate(&base, room).trim_end_matches('_') {
                "" => &base[..1],
                prefix => prefix
            };
            let shortcode = format!("{}{}", prefix, suffix);
            if self.used.insert(shortcode.clone()) {
                debug!("Shortcode {} is already taken, using {} instead", base, shortcode);
                return shortcode;
            }
            counter += 1;
        }
    }

    /// Assigns the final shortcode to an entry and cleans up its aliases and keywords.
    pub fn finalize(&mut self, mut entry: EmojiEntry) -> EmojiEntry {
        entry.shortcode = self.dedupe(&entry.shortcode);
        entry.clean_up();
        entry
    }

    pub fn contains(&self, shortcode: &str) -> bool {
        self.used.contains(shortcode)
    }

    pub fn len(&self) -> usize {
        self.used.len()
    }

    pub fn is_empty(&self) -> bool {
        self.used.is_empty()
    }
}
