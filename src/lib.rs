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
//! Generates shortcodes, aliases and keywords for emojis, e.g. for an emoji completer.
//!
//! Candidates come from Unicode® emoji tables and source texts,
//! entries are synthesized from the structure and character names of each emoji and
//! hand-curated data takes precedence where it exists.

#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;

/// Emojis, their structural kinds and skin tones
pub mod emojis;
/// Turning emojis into entries: words, shortcodes, aliases and keywords
pub mod shortcodes;
pub mod tables;
pub mod generator;
pub mod output;
pub mod configs;


#[cfg(test)]
mod tests;
