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

use std::fmt::{Display, Formatter};
use std::fmt;

/// One of the five Fitzpatrick-based emoji modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SkinTone {
    Light,
    MediumLight,
    Medium,
    MediumDark,
    Dark,
}

impl SkinTone {
    pub const ALL: [SkinTone; 5] = [
        SkinTone::Light,
        SkinTone::MediumLight,
        SkinTone::Medium,
        SkinTone::MediumDark,
        SkinTone::Dark
    ];

    /// `U+1F3FB`..`U+1F3FF`
    pub fn from_codepoint(codepoint: u32) -> Option<SkinTone> {
        match codepoint {
            0x1f3fb => Some(SkinTone::Light),
            0x1f3fc => Some(SkinTone::MediumLight),
            0x1f3fd => Some(SkinTone::Medium),
            0x1f3fe => Some(SkinTone::MediumDark),
            0x1f3ff => Some(SkinTone::Dark),
            _ => None
        }
    }

    pub fn codepoint(self) -> u32 {
        match self {
            SkinTone::Light => 0x1f3fb,
            SkinTone::MediumLight => 0x1f3fc,
            SkinTone::Medium => 0x1f3fd,
            SkinTone::MediumDark => 0x1f3fe,
            SkinTone::Dark => 0x1f3ff,
        }
    }

    /// The identifier used in shortcodes and keywords, e.g. `medium_dark_skin_tone`
    pub fn name(self) -> &'static str {
        match self {
            SkinTone::Light => "light_skin_tone",
            SkinTone::MediumLight => "medium_light_skin_tone",
            SkinTone::Medium => "medium_skin_tone",
            SkinTone::MediumDark => "medium_dark_skin_tone",
            SkinTone::Dark => "dark_skin_tone",
        }
    }

    pub fn is_skin_tone(codepoint: u32) -> bool {
        Self::from_codepoint(codepoint).is_some()
    }

    /// All skin tones in the order of their appearance, repeated tones included.
    /// # Examples
    /// ```
    /// use emoji_shortcodes::emojis::skin_tone::SkinTone;
    ///
    /// // handshake: medium skin tone, dark skin tone
    /// let handshake = [0x1faf1, 0x1f3fd, 0x200d, 0x1faf2, 0x1f3ff];
    /// assert_eq!(SkinTone::detect(&handshake), vec![SkinTone::Medium, SkinTone::Dark]);
    ///
    /// assert!(SkinTone::detect(&[0x1f44d]).is_empty());
    /// ```
    pub fn detect(sequence: &[u32]) -> Vec<SkinTone> {
        sequence.iter()
            .filter_map(|codepoint| SkinTone::from_codepoint(*codepoint))
            .collect()
    }
}

impl Display for SkinTone {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
