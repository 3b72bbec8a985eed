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
use std::str::FromStr;

/// The qualification status of an emoji sequence according to `emoji-test.txt`
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, PartialOrd, Ord)]
pub enum EmojiStatus {
    /// A building block of other sequences (e.g. a skin tone swatch)
    Component,
    /// A complete RGI emoji with all required variation selectors
    FullyQualified,
    /// An RGI emoji with some (but not the first) variation selector missing
    MinimallyQualified,
    /// Lacks the variation selector it would need to be shown as an emoji
    Unqualified,
}

impl EmojiStatus {
    /// Only fully-qualified sequences are recommended for general interchange as they are
    pub fn is_full_sequence(&self) -> bool {
        matches!(self, Self::FullyQualified)
    }
}

impl Default for EmojiStatus {
    fn default() -> Self {
        Self::Unqualified
    }
}

impl Display for EmojiStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let status = match self {
            Self::Component => "component",
            Self::Unqualified => "unqualified",
            Self::FullyQualified => "fully-qualified",
            Self::MinimallyQualified => "minimally-qualified",
        };
        write!(f, "{}", status)
    }
}

impl FromStr for EmojiStatus {
    type Err = String;

    /// ```
    /// use std::str::FromStr;
    /// use emoji_shortcodes::emojis::emoji_status::EmojiStatus;
    ///
    /// assert_eq!(EmojiStatus::from_str(" Fully-Qualified "), Ok(EmojiStatus::FullyQualified));
    /// assert!(EmojiStatus::from_str("qualified").is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "component" => Ok(Self::Component),
            "unqualified" => Ok(Self::Unqualified),
            "fully-qualified" => Ok(Self::FullyQualified),
            "minimally-qualified" => Ok(Self::MinimallyQualified),
            other => Err(other.to_string())
        }
    }
}
