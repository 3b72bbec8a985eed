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

use itertools::Itertools;

#[derive(Debug)]
/// An error that occurs while expanding an [EmojiTable](crate::tables::emoji_tables::EmojiTable)
pub enum ExpansionError {
    /// Wrapper for [std::io::Error]
    Io(std::io::Error),
    /// Wrapper for multiple errors
    Multiple(Vec<ExpansionError>),
    #[cfg(feature = "online")]
    /// Wrapper for [reqwest::Error]
    Reqwest(reqwest::Error),
}

impl Display for ExpansionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ExpansionError::Io(error) => write!(f, "Could not read emoji table: {}", error),
            ExpansionError::Multiple(errors) => write!(f, "{}", errors.iter().join("; ")),
            #[cfg(feature = "online")]
            ExpansionError::Reqwest(error) => write!(f, "Could not download emoji table: {}", error),
        }
    }
}

impl std::error::Error for ExpansionError {}

impl From<std::io::Error> for ExpansionError {
    fn from(err: std::io::Error) -> Self {
        ExpansionError::Io(err)
    }
}

impl From<Vec<ExpansionError>> for ExpansionError {
    fn from(errors: Vec<ExpansionError>) -> Self {
        Self::Multiple(errors)
    }
}

#[cfg(feature = "online")]
impl From<reqwest::Error> for ExpansionError {
    fn from(err: reqwest::Error) -> Self {
        ExpansionError::Reqwest(err)
    }
}
