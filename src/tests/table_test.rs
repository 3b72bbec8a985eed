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

use std::path::{Path, PathBuf};

use crate::emojis::emoji::Emoji;
use crate::emojis::emoji_status::EmojiStatus;
use crate::shortcodes::merge::CuratedStore;
use crate::tables::curated::{CuratedError, CuratedTable};
use crate::tables::emoji_tables::{EmojiMatcher, EmojiTable, enumerate_candidates};
use crate::tables::errors::ExpansionError;
use crate::tables::names::{CharacterNames, NameTable};
use crate::tests::{init_logger, TABLES_PATH, TEST_FILES_PATH};

const EMOJI_TEST_ENTRIES: usize = 11;
const EMOJI_TEST_CANDIDATES: usize = 8;
const EMOJI_SEQUENCES_ENTRIES: usize = 5;

fn table_paths() -> Vec<PathBuf> {
    vec![
        Path::new(TABLES_PATH).join("emoji-test.txt"),
        Path::new(TABLES_PATH).join("emoji-sequences.txt"),
    ]
}

fn emojis(emojis: &[&str]) -> Vec<Emoji> {
    emojis.iter().map(|emoji| Emoji::from(*emoji)).collect()
}

#[test]
fn emoji_test_file() {
    init_logger();
    let table = EmojiTable::from_files(&table_paths()[..1]).unwrap();

    assert_eq!(table.len(), EMOJI_TEST_ENTRIES);
    assert_eq!(table.candidates().len(), EMOJI_TEST_CANDIDATES);
    assert_eq!(table.get(&[0x1f3fb]), Some(&vec![EmojiStatus::Component]));
    assert_eq!(table.get(&[0x33, 0x20e3]), Some(&vec![EmojiStatus::Unqualified]));
    assert!(table.is_full_emoji_sequence(&[0x33, 0xfe0f, 0x20e3]));
    assert!(!table.is_full_emoji_sequence(&[0x33, 0x20e3]));
    assert!(!table.is_full_emoji_sequence(&[0x1f3fb]));

    assert_eq!(table.candidates(), emojis(&["😀", "👍", "👍🏻", "👍🏽", "3️⃣", "🏳️‍🌈", "🇺🇸", "🏴󠁧󠁢󠁥󠁮󠁧󠁿"]));
}

#[test]
fn sequence_files() {
    init_logger();
    let table = EmojiTable::from_files(&table_paths()).unwrap();

    assert_eq!(table.len(), EMOJI_TEST_ENTRIES + EMOJI_SEQUENCES_ENTRIES);
    assert!(table.is_full_emoji_sequence(&[0x231a]));
    assert!(table.is_full_emoji_sequence(&[0x231b]));
    assert!(table.is_full_emoji_sequence(&[0x23, 0xfe0f, 0x20e3]));
    assert!(table.is_full_emoji_sequence(&[0x1f1e9, 0x1f1ea]));
}

#[test]
fn missing_table_files() {
    let paths = vec![
        PathBuf::from("test_files/tables/does-not-exist.txt"),
        PathBuf::from("test_files/tables/neither-does-this.txt"),
    ];
    match EmojiTable::from_files(&paths) {
        Err(ExpansionError::Multiple(errors)) => assert_eq!(errors.len(), 2),
        other => panic!("Expected two errors, got {:?}", other)
    }
    assert!(matches!(EmojiTable::from_files(&paths[..1]), Err(ExpansionError::Io(_))));
}

#[test]
fn scan_texts() {
    let table = EmojiTable::from_files(&table_paths()).unwrap();
    let source = std::fs::read_to_string(Path::new(TEST_FILES_PATH).join("source.txt")).unwrap();

    assert_eq!(table.scan(&source), emojis(&["🇩🇪", "😀", "3️⃣"]));
    assert!(table.scan("no emojis here").is_empty());
}

#[test]
fn candidates_start_with_the_sources() {
    let table = EmojiTable::from_files(&table_paths()).unwrap();
    let sources = vec![String::from("😀 🦄 😀")];
    let candidates = enumerate_candidates(&table, &sources);

    assert_eq!(&candidates[..3], emojis(&["😀", "🦄", "👍"]).as_slice());
    assert_eq!(candidates.len(), 13);
    assert_eq!(candidates.last(), Some(&Emoji::from("🇩🇪")));
}

#[test]
fn names_from_file() {
    init_logger();
    let names = NameTable::from_files(&[Path::new(TEST_FILES_PATH).join("UnicodeData.txt")]).unwrap();

    assert_eq!(names.len(), 3);
    assert_eq!(names.name(0x1f601), Some(String::from("GRINNING FACE WITH SMILING EYES")));
    // Not in the file
    assert_eq!(names.name(0x1f308), Some(String::from("RAINBOW")));
    // <control> isn't a name
    assert_eq!(names.name(0x0), None);
}

#[test]
fn curated_json() {
    init_logger();
    let table = CuratedTable::from_file(Path::new(TEST_FILES_PATH).join("curated.json")).unwrap();

    assert_eq!(table.len(), 2);
    let unicorn = table.lookup(&Emoji::from("🦄")).unwrap();
    assert_eq!(unicorn.aliases, Some(vec![String::from("magic"), String::from("42")]));
    assert_eq!(unicorn.keywords, None);
    assert!(table.lookup(&Emoji::from("")).is_none());
}

#[test]
fn curated_script() {
    let table = CuratedTable::from_file(Path::new(TEST_FILES_PATH).join("curated-previous.js")).unwrap();

    assert_eq!(table.len(), 2);
    let octopus = table.lookup(&Emoji::from("🐙")).unwrap();
    assert_eq!(octopus.shortcode.as_deref(), Some("octopus"));
    assert_eq!(octopus.keywords, Some(vec![String::from("sea"), String::from("animal")]));
}

#[test]
fn first_curated_file_wins() {
    let paths = vec![
        Path::new(TEST_FILES_PATH).join("curated.json"),
        Path::new(TEST_FILES_PATH).join("curated-previous.js"),
    ];
    let table = CuratedTable::from_files(&paths).unwrap();

    let order: Vec<Emoji> = table.entries().into_iter()
        .map(|entry| entry.emoji.clone())
        .collect();
    assert_eq!(order, emojis(&["👍", "🦄", "🐙"]));
    assert_eq!(table.lookup(&Emoji::from("👍")).and_then(|entry| entry.shortcode.as_deref()), Some("thumbsup"));
}

#[test]
fn broken_curated_data() {
    assert!(matches!(CuratedTable::from_script("window.OTHER_DATA = [];"), Err(CuratedError::MissingArray)));
    assert!(matches!(CuratedTable::from_json_reader("{\"emoji\": \"😀\"}".as_bytes()), Err(CuratedError::Json(_))));
    assert!(matches!(CuratedTable::from_file("test_files/nothing.json"), Err(CuratedError::Io(_))));
}
