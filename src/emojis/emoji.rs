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
//! The main data struct for single emojis.

use std::cmp::Ordering;
use std::fmt::{Display, Formatter};
use std::fmt;
use std::hash::{Hash, Hasher};

use itertools::Itertools;
use regex::{CaptureMatches, Regex};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::emojis::emoji_kind::EmojiKind;

/// A struct that holds one particular emoji (which might also be a sequence).
///
/// Two emojis are equal iff their codepoint sequences are equal.
#[derive(Debug, Eq, Clone)]
pub struct Emoji {
    /// The sequence of Unicode® character codepoints that represents this emoji.
    pub sequence: Vec<u32>,
}

impl Emoji {
    /// Parses a hexadecimal character sequence (e.g. `1f3f3 fe0f 200d 1f308` or
    /// `emoji_u1f973`) into an emoji object.
    /// Allowed delimiters are dashes (`-`), underscores (`_`), spaces (` `) and dots (`.`).
    /// # Examples
    /// ```
    /// use emoji_shortcodes::emojis::emoji::Emoji;
    ///
    /// let party_face = Emoji::from_sequence("emoji_u1f973").unwrap();
    /// assert_eq!(party_face.sequence, vec![0x1f973]);
    ///
    /// let rainbow = Emoji::from_sequence("1F3F3 FE0F 200D 1F308").unwrap();
    /// assert_eq!(rainbow.sequence, vec![0x1f3f3, 0xfe0f, 0x200d, 0x1f308]);
    /// ```
    pub fn from_sequence(sequence: &str) -> Result<Emoji, EmojiError> {
        lazy_static! {
            static ref HEX_SEQUENCE: Regex = Regex::new(r"([a-fA-F0-9]{1,8})([-_. ]|$)").unwrap();
        }
        let matches: CaptureMatches = HEX_SEQUENCE.captures_iter(sequence);
        let code_sequence: Vec<u32> = matches
            .map(|sequence| u32::from_str_radix(&sequence[1], 16).unwrap_or(0))
            .filter(|codepoint| *codepoint > 0)
            .collect();
        if code_sequence.is_empty() {
            Err(EmojiError::NoValidCodepointsFound(sequence.to_owned()))
        } else {
            Emoji::from_u32_sequence(code_sequence)
        }
    }

    /// Generates an Emoji from a given codepoint sequence.
    /// If the sequence is empty, it will return an error.
    /// # Examples
    /// ```
    /// use emoji_shortcodes::emojis::emoji::Emoji;
    ///
    /// let seq = vec![0x1f3f3, 0x200d, 0x1f308];
    /// let emoji = Emoji::from_u32_sequence(seq.clone()).unwrap();
    /// assert_eq!(emoji.sequence, seq);
    ///
    /// assert!(Emoji::from_u32_sequence(vec![]).is_err());
    /// ```
    pub fn from_u32_sequence(code_sequence: Vec<u32>) -> Result<Emoji, EmojiError> {
        if code_sequence.is_empty() {
            Err(EmojiError::NoValidCodepointsFound(String::from("Empty code sequence")))
        } else {
            Ok(Emoji { sequence: code_sequence })
        }
    }

    /// Returns the emoji itself
    /// ## Example
    /// ```
    /// use emoji_shortcodes::emojis::emoji::Emoji;
    ///
    /// // Face with heart eyes
    /// let emoji = Emoji::from_u32_sequence(vec![0x1f60d]).unwrap();
    ///
    /// assert_eq!(String::from("😍"), emoji.display_emoji());
    /// ```
    pub fn display_emoji(&self) -> String {
        self.sequence.iter().filter_map(|codepoint| char::from_u32(*codepoint))
            .collect()
    }

    /// The lowercase hexadecimal codepoints, joined by `_` (e.g. `1f3f3_fe0f_200d_1f308`).
    pub fn hex_sequence(&self) -> String {
        self.sequence.iter()
            .map(|codepoint| format!("{:x}", codepoint))
            .join("_")
    }

    /// The canonical codepoint alias of this emoji, e.g. `u1f44d_1f3fd`
    /// ```
    /// use emoji_shortcodes::emojis::emoji::Emoji;
    ///
    /// let emoji = Emoji::from_u32_sequence(vec![0x1f44d, 0x1f3fd]).unwrap();
    /// assert_eq!(emoji.codepoint_alias(), "u1f44d_1f3fd");
    /// ```
    pub fn codepoint_alias(&self) -> String {
        format!("u{}", self.hex_sequence())
    }

    /// Shorthand for [EmojiKind::classify] on this emoji's sequence.
    pub fn kind(&self) -> EmojiKind {
        EmojiKind::classify(&self.sequence)
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }
}

impl From<&str> for Emoji {
    /// Takes the Unicode® scalar values of a string as they are.
    /// An empty string gives an empty (and therefore invalid) emoji.
    fn from(emoji: &str) -> Self {
        Emoji {
            sequence: emoji.chars().map(|character| character as u32).collect()
        }
    }
}

impl From<Vec<u32>> for Emoji {
    fn from(sequence: Vec<u32>) -> Self {
        Emoji { sequence }
    }
}

impl From<&[u32]> for Emoji {
    fn from(sequence: &[u32]) -> Self {
        Emoji::from(Vec::from(sequence))
    }
}

impl AsRef<[u32]> for Emoji {
    fn as_ref(&self) -> &[u32] {
        &self.sequence
    }
}

impl From<Emoji> for Vec<u32> {
    fn from(emoji: Emoji) -> Self {
        emoji.sequence
    }
}

impl Hash for Emoji {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.sequence.hash(state)
    }
}

impl PartialEq<Emoji> for Emoji {
    /// Compares two Emojis by their code sequence
    fn eq(&self, other: &Emoji) -> bool {
        self.sequence == other.sequence
    }
}

impl PartialEq<[u32]> for Emoji {
    fn eq(&self, other: &[u32]) -> bool {
        self.sequence == other
    }
}

impl PartialOrd for Emoji {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.sequence.partial_cmp(&other.sequence)
    }
}

impl Ord for Emoji {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sequence.cmp(&other.sequence)
    }
}

impl Display for Emoji {
    /// Shows the flag name for country and subdivision flags (e.g. `Flag US`) or the code sequence
    /// in square brackets (e.g. `[1F3F3-FE0F-200D-1F308]`).
    /// # Examples
    /// ```
    /// use emoji_shortcodes::emojis::emoji::Emoji;
    ///
    /// let rainbow = Emoji::from_u32_sequence(vec![0x1f3f3, 0xfe0f, 0x200d, 0x1f308]).unwrap();
    /// assert_eq!("[1F3F3-FE0F-200D-1F308]", format!("{}", rainbow));
    ///
    /// let usa = Emoji::from_u32_sequence(vec![0x1f1fa, 0x1f1f8]).unwrap();
    /// assert_eq!("Flag US", format!("{}", usa));
    /// ```
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self.kind() {
            EmojiKind::FlagPair(country) => write!(f, "Flag {}", country),
            EmojiKind::TagFlag(region) => write!(f, "Flag {}", region.to_uppercase()),
            _ => write!(f, "[{}]", self.sequence.iter()
                .map(|codepoint| format!("{:X}", codepoint))
                .join("-"))
        }
    }
}

impl Serialize for Emoji {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where S: Serializer {
        serializer.serialize_str(&self.display_emoji())
    }
}

impl<'de> Deserialize<'de> for Emoji {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where D: Deserializer<'de> {
        let emoji = String::deserialize(deserializer)?;
        Ok(Emoji::from(emoji.as_str()))
    }
}

#[derive(Debug)]
/// An error that can occur while creating an [Emoji]
pub enum EmojiError {
    /// Indicates that either no codepoint sequence has been parsed or that a string didn't
    /// match the recognized patterns for codepoint sequences.
    NoValidCodepointsFound(String),
}

impl Display for EmojiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            EmojiError::NoValidCodepointsFound(sequence) =>
                write!(f, "No valid codepoints found in {:?}", sequence)
        }
    }
}

impl std::error::Error for EmojiError {}
