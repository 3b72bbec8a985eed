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
//! The data the generator works with: RGI emoji tables, character names and curated entries

/// Tables of full RGI emoji sequences
pub mod emoji_tables;
/// Formal character names
pub mod names;
/// Hand-curated entries from earlier runs
pub mod curated;
pub mod errors;
#[cfg(feature = "online")]
pub mod online;
