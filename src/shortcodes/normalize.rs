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
//! Canonicalization of arbitrary text into the identifier alphabet `[a-z0-9_+-]`
//! which is used for shortcodes, aliases and keywords.

use indexmap::IndexSet;
use regex::Regex;

/// Shortcodes (including any deduplication suffix) never exceed this length.
pub const MAX_SHORTCODE_LENGTH: usize = 40;
/// Used whenever a shortcode would otherwise be empty
pub const FALLBACK_SHORTCODE: &str = "emoji";

/// Converts any text to an identifier.
///
/// The text is lowercased, every run of characters outside of `[a-z0-9_+-]` becomes a single `_`,
/// repeated `_` are collapsed and leading/trailing `_` are removed.
/// The result may be empty.
/// # Examples
/// ```
/// use emoji_shortcodes::shortcodes::normalize::normalize;
///
/// assert_eq!(normalize("Thumbs Up!"), "thumbs_up");
/// assert_eq!(normalize("__flag: Côte d’Ivoire__"), "flag_c_te_d_ivoire");
/// assert_eq!(normalize("+1"), "+1");
/// assert_eq!(normalize("?!"), "");
/// ```
pub fn normalize(text: &str) -> String {
    lazy_static! {
        static ref FORBIDDEN: Regex = Regex::new(r"[^a-z0-9_+\-]+").unwrap();
        static ref UNDERSCORES: Regex = Regex::new(r"_+").unwrap();
    }
    let lowercase = text.to_lowercase();
    let replaced = FORBIDDEN.replace_all(&lowercase, "_");
    let collapsed = UNDERSCORES.replace_all(&replaced, "_");
    collapsed.trim_matches('_').to_owned()
}

/// Normalizes the text and splits it on runs of `_` and `-`.
/// # Examples
/// ```
/// use emoji_shortcodes::shortcodes::normalize::tokenize;
///
/// assert_eq!(tokenize("SMILING FACE WITH HEART-SHAPED EYES"),
///            vec!["smiling", "face", "with", "heart", "shaped", "eyes"]);
/// assert!(tokenize("--").is_empty());
/// ```
pub fn tokenize(text: &str) -> Vec<String> {
    lazy_static! {
        static ref SEPARATORS: Regex = Regex::new(r"[_\-]+").unwrap();
    }
    SEPARATORS.split(&normalize(text))
        .filter(|token| !token.is_empty())
        .map(|token| token.to_owned())
        .collect()
}

/// Normalizes every value and keeps the first occurrence of each non-empty identifier.
/// # Examples
/// ```
/// use emoji_shortcodes::shortcodes::normalize::unique_identifiers;
///
/// let values = vec!["Flag US", "flag_us", "", "us", "US"];
/// assert_eq!(unique_identifiers(values), vec!["flag_us", "us"]);
/// ```
pub fn unique_identifiers<I, S>(values: I) -> Vec<String>
    where I: IntoIterator<Item=S>, S: AsRef<str> {
    let identifiers: IndexSet<String> = values.into_iter()
        .map(|value| normalize(value.as_ref()))
        .filter(|value| !value.is_empty())
        .collect();
    identifiers.into_iter().collect()
}

/// Normalizes a shortcode and cuts it down to [MAX_SHORTCODE_LENGTH] characters.
///
/// Trailing `_` are removed after cutting; an empty result becomes [FALLBACK_SHORTCODE].
/// # Examples
/// ```
/// use emoji_shortcodes::shortcodes::normalize::trim_shortcode;
///
/// assert_eq!(trim_shortcode("Grinning Face"), "grinning_face");
/// assert_eq!(trim_shortcode(""), "emoji");
/// assert_eq!(trim_shortcode(&"a_".repeat(30)).len(), 39);
/// ```
pub fn trim_shortcode(value: &str) -> String {
    let normalized = normalize(value);
    let base: &str = if normalized.is_empty() {
        FALLBACK_SHORTCODE
    } else {
        &normalized
    };
    let trimmed = truncate(base, MAX_SHORTCODE_LENGTH).trim_end_matches('_');
    if trimmed.is_empty() {
        FALLBACK_SHORTCODE.to_owned()
    } else {
        trimmed.to_owned()
    }
}

/// The first `length` characters of an identifier.
pub(crate) fn truncate(identifier: &str, length: usize) -> &str {
    match identifier.char_indices().nth(length) {
        Some((index, _)) => &identifier[..index],
        None => identifier
    }
}

/// The dash spelling (`thumbs-up`) and the spelling without separators (`thumbsup`)
/// of a shortcode, in this order.
pub fn spellings(shortcode: &str) -> [String; 2] {
    [shortcode.replace('_', "-"), shortcode.replace('_', "")]
}
