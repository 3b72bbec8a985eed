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

use std::io::Cursor;

use crate::tables::emoji_tables::EmojiTable;
use crate::tables::errors::ExpansionError;

pub const EMOJI_TEST: &str = "emoji-test.txt";

/// Equivalent to creating an `EmojiTable` and directly calling `expand_online` on it.
pub fn load_online_table(version: (u32, u32)) -> Result<EmojiTable, ExpansionError> {
    let mut table = EmojiTable::new();
    table.expand_online(version)?;
    Ok(table)
}

/// A simple helper function to build the URLs for the different files.
#[inline]
fn build_url(version: (u32, u32), file: &'static str) -> String {
    format!("https://unicode.org/Public/emoji/{}.{}/{}", version.0, version.1, file)
}

impl EmojiTable {
    /// Downloads `emoji-test.txt` for the given emoji version and adds its contents to the table.
    pub fn expand_online(&mut self, version: (u32, u32)) -> Result<(), ExpansionError> {
        let client = reqwest::blocking::Client::new();
        let url = build_url(version, EMOJI_TEST);
        info!("Downloading {}", url);
        let text = client.get(&url)
            .send()?
            .error_for_status()?
            .text()?;
        self.expand(Cursor::new(text));
        Ok(())
    }
}
