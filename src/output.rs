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
//! Writes generated entries either as a browser data script or as plain JSON.

use std::fmt::{Display, Formatter};
use std::fmt;
use std::io::Write;
use std::str::FromStr;

use itertools::Itertools;
use serde::{Deserialize, Deserializer};

use crate::shortcodes::entry::EmojiEntry;
use crate::tables::curated::DATA_GLOBAL;

/// The formats the entries may be written in
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum OutputFormat {
    /// A script assigning all entries to `window.EMOJI_COMPLETER_DATA`
    JavaScript,
    /// A pretty-printed JSON array
    Json,
}

impl Default for OutputFormat {
    fn default() -> Self {
        OutputFormat::JavaScript
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    /// # Examples
    /// ```
    /// use std::str::FromStr;
    /// use emoji_shortcodes::output::OutputFormat;
    ///
    /// assert_eq!(OutputFormat::from_str("js"), Ok(OutputFormat::JavaScript));
    /// assert_eq!(OutputFormat::from_str("JSON"), Ok(OutputFormat::Json));
    /// assert!(OutputFormat::from_str("xml").is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "js" | "javascript" => Ok(OutputFormat::JavaScript),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("Unknown output format: {}", other))
        }
    }
}

impl Display for OutputFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::JavaScript => write!(f, "js"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl<'de> Deserialize<'de> for OutputFormat {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where D: Deserializer<'de> {
        let format = String::deserialize(deserializer)?;
        OutputFormat::from_str(&format).map_err(serde::de::Error::custom)
    }
}

/// Writes the entries in the given format.
pub fn write_entries<W: Write>(format: OutputFormat, entries: &[EmojiEntry], writer: W) -> Result<(), std::io::Error> {
    match format {
        OutputFormat::JavaScript => write_script(entries, writer),
        OutputFormat::Json => write_json(entries, writer),
    }
}

/// Writes the entries as a data script, one entry per line.
/// # Examples
/// ```
/// use emoji_shortcodes::emojis::emoji::Emoji;
/// use emoji_shortcodes::output::write_script;
/// use emoji_shortcodes::shortcodes::entry::EmojiEntry;
///
/// let entry = EmojiEntry {
///     emoji: Emoji::from("😀"),
///     shortcode: String::from("grinning_face"),
///     aliases: vec![String::from("u1f600"), String::from("grinning-face")],
///     keywords: vec![String::from("grinning")],
/// };
/// let mut script = Vec::new();
/// write_script(&[entry], &mut script).unwrap();
///
/// assert_eq!(String::from_utf8(script).unwrap(), "/* global window */\n\
///     \"use strict\";\n\
///     \n\
///     window.EMOJI_COMPLETER_DATA = [\n  \
///     { emoji: \"😀\", shortcode: \"grinning_face\", aliases: [\"u1f600\", \"grinning-face\"], keywords: [\"grinning\"] },\n\
///     ];\n");
/// ```
pub fn write_script<W: Write>(entries: &[EmojiEntry], mut writer: W) -> Result<(), std::io::Error> {
    writeln!(writer, "/* global window */")?;
    writeln!(writer, "\"use strict\";")?;
    writeln!(writer)?;
    writeln!(writer, "window.{} = [", DATA_GLOBAL)?;
    for entry in entries {
        writeln!(writer, "  {{ emoji: {}, shortcode: {}, aliases: {}, keywords: {} }},",
                 quote(&entry.emoji.display_emoji()),
                 quote(&entry.shortcode),
                 quote_list(&entry.aliases),
                 quote_list(&entry.keywords))?;
    }
    writeln!(writer, "];")?;
    writer.flush()
}

/// Writes the entries as a pretty-printed JSON array.
pub fn write_json<W: Write>(entries: &[EmojiEntry], mut writer: W) -> Result<(), std::io::Error> {
    serde_json::to_writer_pretty(&mut writer, entries)?;
    writeln!(writer)?;
    writer.flush()
}

/// A JSON string literal; non-ASCII characters are kept as they are.
fn quote(value: &str) -> String {
    // Serializing a str can't fail
    serde_json::to_string(value).unwrap_or_default()
}

fn quote_list(values: &[String]) -> String {
    format!("[{}]", values.iter().map(|value| quote(value)).join(", "))
}
