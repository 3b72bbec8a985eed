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
//! The structural classification of emoji sequences.

use std::fmt::{Display, Formatter};
use std::fmt;
use std::ops::RangeInclusive;

/// Zero Width Joiner
pub const ZWJ: u32 = 0x200d;
/// Variation Selector-15 (text presentation)
pub const VS15: u32 = 0xfe0e;
/// Variation Selector-16 (emoji presentation)
pub const VS16: u32 = 0xfe0f;
/// Combining Enclosing Keycap
pub const KEYCAP: u32 = 0x20e3;
/// Waving Black Flag, the base of all tag sequences
pub const BLACK_FLAG: u32 = 0x1f3f4;
/// Cancel Tag, the terminator of all tag sequences
pub const CANCEL_TAG: u32 = 0xe007f;
/// Regional Indicator Symbol Letter A..Z
pub const REGIONAL_INDICATORS: RangeInclusive<u32> = 0x1f1e6..=0x1f1ff;
/// Tag Latin Small Letter A..Z
pub const TAG_LETTERS: RangeInclusive<u32> = 0xe0061..=0xe007a;

/// Maps a regional indicator or tag letter to its lowercase ASCII letter.
pub(crate) fn letter_for(codepoint: u32) -> Option<char> {
    let offset = if REGIONAL_INDICATORS.contains(&codepoint) {
        codepoint - REGIONAL_INDICATORS.start()
    } else if TAG_LETTERS.contains(&codepoint) {
        codepoint - TAG_LETTERS.start()
    } else {
        return None;
    };
    // We're in the ASCII range now
    Some((b'a' + offset as u8) as char)
}

/// The symbol in front of the keycap character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeycapBase {
    /// `0`-`9`
    Digit(char),
    /// `#`
    Hash,
    /// `*`
    Star,
    /// Anything else
    Symbol,
}

impl KeycapBase {
    /// Finds the base of a keycap sequence; variation selectors and the keycap itself are skipped.
    /// # Examples
    /// ```
    /// use emoji_shortcodes::emojis::emoji_kind::KeycapBase;
    ///
    /// assert_eq!(KeycapBase::from_sequence(&[0x33, 0xfe0f, 0x20e3]), KeycapBase::Digit('3'));
    /// assert_eq!(KeycapBase::from_sequence(&[0x23, 0x20e3]), KeycapBase::Hash);
    /// assert_eq!(KeycapBase::from_sequence(&[0x20e3]), KeycapBase::Symbol);
    /// ```
    pub fn from_sequence(sequence: &[u32]) -> KeycapBase {
        sequence.iter()
            .filter(|codepoint| ![KEYCAP, VS15, VS16].contains(*codepoint))
            .find_map(|codepoint| match codepoint {
                0x30..=0x39 => Some(KeycapBase::Digit((*codepoint as u8) as char)),
                0x23 => Some(KeycapBase::Hash),
                0x2a => Some(KeycapBase::Star),
                _ => None
            })
            .unwrap_or(KeycapBase::Symbol)
    }
}

impl Display for KeycapBase {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            KeycapBase::Digit(digit) => write!(f, "{}", digit),
            KeycapBase::Hash => write!(f, "hash"),
            KeycapBase::Star => write!(f, "star"),
            KeycapBase::Symbol => write!(f, "symbol"),
        }
    }
}

/// The structural category of an emoji sequence together with the value decoded from its structure.
///
/// Exactly one kind applies to each sequence.
/// [EmojiKind::classify] checks the kinds in the order they're declared here and the first match wins.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EmojiKind {
    /// Two regional indicators; carries the upper case ISO 3166-1 country code (e.g. `US`)
    FlagPair(String),
    /// A sequence containing `U+20E3`; carries the keycap's base
    Keycap(KeycapBase),
    /// A black flag followed by tag letters and a cancel tag; carries the decoded region
    /// (e.g. `england` or `usca`)
    TagFlag(String),
    /// Everything else (single pictographs, ZWJ sequences, modifier sequences, ...)
    Generic,
}

impl EmojiKind {
    /// Decides the structural kind of a codepoint sequence.
    /// # Examples
    /// ```
    /// use emoji_shortcodes::emojis::emoji_kind::{EmojiKind, KeycapBase};
    ///
    /// assert_eq!(EmojiKind::classify(&[0x1f1fa, 0x1f1f8]), EmojiKind::FlagPair(String::from("US")));
    /// assert_eq!(EmojiKind::classify(&[0x33, 0x20e3]), EmojiKind::Keycap(KeycapBase::Digit('3')));
    /// assert_eq!(
    ///     EmojiKind::classify(&[0x1f3f4, 0xe0067, 0xe0062, 0xe0065, 0xe006e, 0xe0067, 0xe007f]),
    ///     EmojiKind::TagFlag(String::from("england"))
    /// );
    /// assert_eq!(EmojiKind::classify(&[0x1f600]), EmojiKind::Generic);
    /// ```
    pub fn classify(sequence: &[u32]) -> EmojiKind {
        if Self::is_flag_pair(sequence) {
            EmojiKind::FlagPair(Self::country_code(sequence))
        } else if Self::is_keycap(sequence) {
            EmojiKind::Keycap(KeycapBase::from_sequence(sequence))
        } else if Self::is_tag_flag(sequence) {
            EmojiKind::TagFlag(Self::decode_tag_flag(sequence))
        } else {
            EmojiKind::Generic
        }
    }

    /// Exactly two codepoints, both regional indicators.
    pub fn is_flag_pair(sequence: &[u32]) -> bool {
        sequence.len() == 2
            && sequence.iter().all(|codepoint| REGIONAL_INDICATORS.contains(codepoint))
    }

    /// Maps every regional indicator onto `A`-`Z`.
    /// Codepoints outside of the regional indicator block are skipped.
    pub fn country_code(sequence: &[u32]) -> String {
        sequence.iter()
            .filter(|codepoint| REGIONAL_INDICATORS.contains(*codepoint))
            .filter_map(|codepoint| letter_for(*codepoint))
            .map(|letter| letter.to_ascii_uppercase())
            .collect()
    }

    pub fn is_keycap(sequence: &[u32]) -> bool {
        sequence.contains(&KEYCAP)
    }

    pub fn is_tag_flag(sequence: &[u32]) -> bool {
        sequence.len() > 3
            && sequence.first() == Some(&BLACK_FLAG)
            && sequence.last() == Some(&CANCEL_TAG)
    }

    /// Decodes the tag letters between the black flag and the cancel tag.
    ///
    /// The three subdivision flags of the United Kingdom get their names,
    /// every other region is returned as its letters. If there are no tag letters at all,
    /// `tag` is returned.
    pub fn decode_tag_flag(sequence: &[u32]) -> String {
        let inner: &[u32] = if sequence.len() >= 2 {
            &sequence[1..sequence.len() - 1]
        } else {
            &[]
        };
        let letters: String = inner.iter()
            .filter(|codepoint| TAG_LETTERS.contains(*codepoint))
            .filter_map(|codepoint| letter_for(*codepoint))
            .collect();
        match letters.as_str() {
            "gbeng" => String::from("england"),
            "gbsct" => String::from("scotland"),
            "gbwls" => String::from("wales"),
            "" => String::from("tag"),
            _ => letters
        }
    }

    /// The name of the structural category (without its payload).
    pub fn category(&self) -> &'static str {
        match self {
            EmojiKind::FlagPair(_) => "flag pair",
            EmojiKind::Keycap(_) => "keycap",
            EmojiKind::TagFlag(_) => "tag flag",
            EmojiKind::Generic => "generic",
        }
    }
}

impl Display for EmojiKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            EmojiKind::FlagPair(country) => write!(f, "{} ({})", self.category(), country),
            EmojiKind::Keycap(base) => write!(f, "{} ({})", self.category(), base),
            EmojiKind::TagFlag(region) => write!(f, "{} ({})", self.category(), region),
            EmojiKind::Generic => write!(f, "{}", self.category()),
        }
    }
}
