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
//! Hand-curated overrides and how they're combined with synthesized entries.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::emojis::emoji::Emoji;
use crate::shortcodes::entry::EmojiEntry;
use crate::shortcodes::normalize::{FALLBACK_SHORTCODE, normalize, spellings, trim_shortcode, unique_identifiers};

/// A hand-maintained record for one emoji. Every field but the emoji itself is optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CuratedEntry {
    pub emoji: Emoji,
    #[serde(default, deserialize_with = "lenient_string")]
    pub shortcode: Option<String>,
    #[serde(default, deserialize_with = "lenient_strings")]
    pub aliases: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient_strings")]
    pub keywords: Option<Vec<String>>,
}

impl CuratedEntry {
    pub fn new(emoji: Emoji, shortcode: &str) -> Self {
        Self {
            emoji,
            shortcode: Some(shortcode.to_owned()),
            aliases: None,
            keywords: None,
        }
    }

    /// The curated shortcode, if it's still non-empty after normalization
    pub fn normalized_shortcode(&self) -> Option<String> {
        self.shortcode.as_deref()
            .map(normalize)
            .filter(|shortcode| !shortcode.is_empty())
    }

    fn aliases(&self) -> &[String] {
        self.aliases.as_deref().unwrap_or_default()
    }

    fn keywords(&self) -> &[String] {
        self.keywords.as_deref().unwrap_or_default()
    }
}

/// Numbers and booleans are taken as their text, anything else is dropped.
fn value_to_string(value: Value) -> Option<String> {
    match value {
        Value::String(string) => Some(string),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(boolean) => Some(boolean.to_string()),
        _ => None
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where D: Deserializer<'de> {
    let value: Option<Value> = Option::deserialize(deserializer)?;
    Ok(value.and_then(value_to_string))
}

fn lenient_strings<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
    where D: Deserializer<'de> {
    let values: Option<Value> = Option::deserialize(deserializer)?;
    Ok(match values {
        Some(Value::Array(values)) => Some(values.into_iter()
            .filter_map(value_to_string)
            .collect()),
        _ => None
    })
}

/// A read-only source of curated entries, keyed by their exact codepoint sequence.
pub trait CuratedStore {
    /// The curated entry for exactly this emoji, if there is one
    fn lookup(&self, emoji: &Emoji) -> Option<&CuratedEntry>;

    /// All curated entries in their stored order
    fn entries(&self) -> Vec<&CuratedEntry>;
}

/// Combines a synthesized entry with its curated counterpart (if any).
///
/// A curated shortcode replaces the synthesized one.
/// Curated aliases and keywords come first, followed by the synthesized ones
/// (and for aliases the other spellings of the shortcode).
/// # Examples
/// ```
/// use emoji_shortcodes::emojis::emoji::Emoji;
/// use emoji_shortcodes::shortcodes::entry::EmojiEntry;
/// use emoji_shortcodes::shortcodes::merge::{CuratedEntry, merge};
///
/// let thumbs_up = Emoji::from_u32_sequence(vec![0x1f44d]).unwrap();
/// let base = EmojiEntry {
///     emoji: thumbs_up.clone(),
///     shortcode: String::from("thumbs_up_sign"),
///     aliases: vec![String::from("u1f44d")],
///     keywords: vec![String::from("thumbs"), String::from("up")],
/// };
/// let mut curated = CuratedEntry::new(thumbs_up, "ThumbsUp");
/// curated.aliases = Some(vec![String::from("+1")]);
///
/// let merged = merge(base, Some(&curated));
/// assert_eq!(merged.shortcode, "thumbsup");
/// assert_eq!(merged.aliases, vec!["+1", "u1f44d", "thumbsup"]);
/// assert_eq!(merged.keywords, vec!["thumbs", "up"]);
/// ```
pub fn merge(base: EmojiEntry, curated: Option<&CuratedEntry>) -> EmojiEntry {
    let curated = match curated {
        Some(curated) => curated,
        None => return base
    };
    let shortcode = curated.normalized_shortcode().unwrap_or(base.shortcode);
    let aliases = unique_identifiers(curated.aliases().iter()
        .chain(base.aliases.iter())
        .cloned()
        .chain(spellings(&shortcode).iter().cloned()));
    let keywords = unique_identifiers(curated.keywords().iter()
        .chain(base.keywords.iter()));
    EmojiEntry {
        emoji: base.emoji,
        shortcode,
        aliases,
        keywords,
    }
}

/// Builds an entry from a curated record alone, for curated emojis nobody asked for.
///
/// Without a usable shortcode, [FALLBACK_SHORTCODE] is used.
pub fn merge_unseen(curated: &CuratedEntry) -> EmojiEntry {
    let shortcode = match curated.normalized_shortcode() {
        Some(shortcode) => trim_shortcode(&shortcode),
        None => {
            warn!("Curated emoji {} has no usable shortcode, falling back to {}",
                  curated.emoji, FALLBACK_SHORTCODE);
            FALLBACK_SHORTCODE.to_owned()
        }
    };
    let aliases = unique_identifiers(curated.aliases().iter()
        .cloned()
        .chain(spellings(&shortcode).iter().cloned()));
    let keywords = unique_identifiers(curated.keywords().iter()
        .chain(aliases.iter()));
    EmojiEntry {
        emoji: curated.emoji.clone(),
        shortcode,
        aliases,
        keywords,
    }
}
