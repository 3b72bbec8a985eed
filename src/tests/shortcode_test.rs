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

use std::collections::{HashMap, HashSet};

use crate::emojis::emoji::Emoji;
use crate::shortcodes::dedupe::ShortcodeRegistry;
use crate::shortcodes::entry::{EmojiEntry, MAX_ALIASES, MAX_KEYWORDS};
use crate::shortcodes::merge::{CuratedEntry, merge, merge_unseen};
use crate::shortcodes::normalize::{MAX_SHORTCODE_LENGTH, normalize, trim_shortcode};
use crate::shortcodes::words::extract_words;
use crate::tables::names::NameTable;
use crate::tests::init_logger;

fn names(entries: &[(u32, &str)]) -> HashMap<u32, String> {
    entries.iter()
        .map(|(codepoint, name)| (*codepoint, String::from(*name)))
        .collect()
}

fn synthesize(sequence: Vec<u32>) -> EmojiEntry {
    EmojiEntry::synthesize(&Emoji::from(sequence), &NameTable::new())
}

#[test]
fn normalize_is_idempotent() {
    let texts = [
        "", "_", "Grinning Face", "  flag: Côte d’Ivoire ", "+1", "-1", "thumbs--up__",
        "ÄÖÜ", "keycap: *", "woman_health-worker", "🏳️‍🌈", "__a__b__",
    ];
    for text in texts.iter() {
        let once = normalize(text);
        assert_eq!(normalize(&once), once, "normalizing {:?} twice", text);
        assert!(once.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || "_+-".contains(c)));
        assert!(!once.starts_with('_') && !once.ends_with('_'));
        assert!(!once.contains("__"));
    }
}

#[test]
fn flag_scenario() {
    let entry = synthesize(vec![0x1f1fa, 0x1f1f8]);
    assert_eq!(entry.shortcode, "flag_us");
    assert!(entry.aliases.contains(&String::from("flag-us")));
    assert!(entry.aliases.contains(&String::from("us")));
}

#[test]
fn keycap_scenario() {
    let entry = synthesize(vec![0x33, 0xfe0f, 0x20e3]);
    assert_eq!(entry.shortcode, "keycap_3");
    assert_eq!(&entry.aliases[..2], &["keycap-3", "3"]);
    assert_eq!(&entry.keywords[..3], &["keycap", "number", "3"]);
}

#[test]
fn tag_flag_scenario() {
    let entry = synthesize(vec![0x1f3f4, 0xe0067, 0xe0062, 0xe0065, 0xe006e, 0xe0067, 0xe007f]);
    assert_eq!(entry.shortcode, "flag_england");
    assert!(entry.aliases.contains(&String::from("flag-england")));
    assert!(entry.keywords.contains(&String::from("england")));
}

#[test]
fn generic_scenario() {
    let names = names(&[(0x1f600, "GRINNING FACE")]);
    let grinning = Emoji::from(vec![0x1f600]);
    assert_eq!(extract_words(&grinning.sequence, &names), vec!["grinning", "face"]);

    let entry = EmojiEntry::synthesize(&grinning, &names);
    assert_eq!(entry.shortcode, "grinning_face");
    assert_eq!(entry.aliases, vec!["u1f600", "grinning-face", "grinningface"]);
    assert_eq!(entry.keywords, vec![
        "grinning", "face", "grinning_face", "u1f600", "grinning-face", "grinningface",
    ]);
}

#[test]
fn generic_without_words() {
    let names = names(&[]);
    // Only glue: nothing to take words from
    let entry = EmojiEntry::synthesize(&Emoji::from(vec![0x200d, 0xfe0f]), &names);
    assert_eq!(entry.shortcode, "emoji_u200d_fe0f");
}

#[test]
fn unnamed_codepoints_use_their_hex_value() {
    let names = names(&[]);
    let entry = EmojiEntry::synthesize(&Emoji::from(vec![0x1faf8]), &names);
    assert_eq!(entry.shortcode, "u1faf8");
}

#[test]
fn first_skin_tone_extends_the_shortcode() {
    let names = names(&[
        (0x1faf1, "RIGHT HAND"),
        (0x1faf2, "LEFT HAND"),
    ]);
    // handshake: medium skin tone, dark skin tone
    let handshake = Emoji::from(vec![0x1faf1, 0x1f3fd, 0x200d, 0x1faf2, 0x1f3ff]);
    let entry = EmojiEntry::synthesize(&handshake, &names);

    assert_eq!(entry.shortcode, "right_hand_left_medium_skin_tone");
    assert!(entry.keywords.contains(&String::from("medium_skin_tone")));
    assert!(entry.keywords.contains(&String::from("dark_skin_tone")));
    assert!(!entry.shortcode.contains("dark"));
}

#[test]
fn long_shortcodes_are_cut() {
    let names = names(&[(0x1f600, "ALPHABET BRAVO CHARLIE DELTA ECHOES FOXTROT GOLF HOTEL")]);
    let entry = EmojiEntry::synthesize(&Emoji::from(vec![0x1f600]), &names);
    // Six words only
    assert_eq!(entry.shortcode, "alphabet_bravo_charlie_delta_echoes_foxt");
    assert_eq!(entry.shortcode.len(), MAX_SHORTCODE_LENGTH);
    assert_eq!(trim_shortcode(&"x".repeat(100)).len(), MAX_SHORTCODE_LENGTH);
}

#[test]
fn colliding_shortcodes_get_suffixes() {
    init_logger();
    let names = names(&[
        (0x1f600, "SAME OLD FACE"),
        (0x1f601, "SAME OLD FACE"),
        (0x1f602, "SAME OLD FACE"),
    ]);
    let mut registry = ShortcodeRegistry::new();
    let shortcodes: Vec<String> = vec![0x1f600, 0x1f601, 0x1f602].into_iter()
        .map(|codepoint| EmojiEntry::synthesize(&Emoji::from(vec![codepoint]), &names))
        .map(|entry| registry.finalize(entry).shortcode)
        .collect();
    assert_eq!(shortcodes, vec!["same_old_face", "same_old_face_2", "same_old_face_3"]);
}

#[test]
fn registry_hands_out_distinct_shortcodes() {
    let mut registry = ShortcodeRegistry::new();
    let mut seen = HashSet::new();
    let candidates = vec![
        "a".repeat(45),
        format!("{}_", "b".repeat(38)),
        "c".repeat(39),
        String::from("x"),
        String::new(),
        String::from("???"),
        String::from("emoji"),
    ];
    for candidate in candidates.iter().cycle().take(candidates.len() * 12) {
        let shortcode = registry.dedupe(candidate);
        assert!(shortcode.chars().count() <= MAX_SHORTCODE_LENGTH, "{} is too long", shortcode);
        assert!(!shortcode.is_empty());
        assert!(!shortcode.ends_with('_'));
        assert!(seen.insert(shortcode.clone()), "{} was handed out twice", shortcode);
    }
    assert_eq!(registry.len(), seen.len());
}

#[test]
fn finalized_entries_never_repeat_their_shortcode() {
    let mut registry = ShortcodeRegistry::new();
    let names = NameTable::new();
    let sequences = vec![
        vec![0x1f600], vec![0x1f44d], vec![0x1f44d, 0x1f3fb], vec![0x1f1fa, 0x1f1f8],
        vec![0x33, 0xfe0f, 0x20e3], vec![0x1f3f3, 0xfe0f, 0x200d, 0x1f308],
    ];
    for sequence in sequences {
        let entry = registry.finalize(EmojiEntry::synthesize(&Emoji::from(sequence), &names));
        let shortcode = entry.shortcode.clone();
        assert!(entry.aliases.iter().all(|alias| normalize(alias) != shortcode));
        assert!(entry.keywords.iter().all(|keyword| normalize(keyword) != shortcode));
        assert!(entry.aliases.len() <= MAX_ALIASES);
        assert!(entry.keywords.len() <= MAX_KEYWORDS);
    }
}

#[test]
fn clean_up_caps_lists() {
    let mut entry = EmojiEntry {
        emoji: Emoji::from(vec![0x1f600]),
        shortcode: String::from("grin"),
        aliases: (0..30).map(|i| format!("alias{}", i)).chain(vec![String::from("GRIN")]).collect(),
        keywords: vec![String::from("grin")].into_iter().chain((0..30).map(|i| format!("k{}", i))).collect(),
    };
    entry.clean_up();
    assert_eq!(entry.aliases.len(), MAX_ALIASES);
    assert_eq!(entry.keywords.len(), MAX_KEYWORDS);
    assert_eq!(entry.keywords[0], "k0");
    assert_eq!(entry.aliases[15], "alias15");
}

#[test]
fn curated_shortcode_wins() {
    let names = names(&[(0x1f44d, "THUMBS UP SIGN")]);
    let thumbs_up = Emoji::from(vec![0x1f44d]);
    let base = EmojiEntry::synthesize(&thumbs_up, &names);
    // "sign" is a stop word
    assert_eq!(base.shortcode, "thumbs_up");

    let mut curated = CuratedEntry::new(thumbs_up, "thumbsup");
    curated.aliases = Some(vec![String::from("+1")]);
    curated.keywords = Some(vec![String::from("Approve")]);

    let mut registry = ShortcodeRegistry::new();
    let entry = registry.finalize(merge(base, Some(&curated)));
    assert_eq!(entry.shortcode, "thumbsup");
    assert_eq!(entry.aliases[0], "+1");
    assert!(entry.aliases.contains(&String::from("thumbs-up")));
    assert!(!entry.aliases.contains(&String::from("thumbsup")));
    assert_eq!(entry.keywords[0], "approve");
}

#[test]
fn blank_curated_shortcode_is_ignored() {
    let names = names(&[(0x1f600, "GRINNING FACE")]);
    let grinning = Emoji::from(vec![0x1f600]);
    let base = EmojiEntry::synthesize(&grinning, &names);
    let curated = CuratedEntry::new(grinning, "?!");

    let merged = merge(base.clone(), Some(&curated));
    assert_eq!(merged.shortcode, "grinning_face");
    assert_eq!(merge(base.clone(), None), base);
}

#[test]
fn unseen_curated_entries() {
    init_logger();
    let mut unicorn = CuratedEntry::new(Emoji::from("🦄"), "Unicorn Face");
    unicorn.keywords = Some(vec![String::from("magic")]);
    let entry = merge_unseen(&unicorn);
    assert_eq!(entry.shortcode, "unicorn_face");
    assert_eq!(entry.aliases, vec!["unicorn-face", "unicornface"]);
    assert_eq!(entry.keywords, vec!["magic", "unicorn-face", "unicornface"]);

    let nameless = CuratedEntry {
        emoji: Emoji::from("🐙"),
        shortcode: None,
        aliases: None,
        keywords: None,
    };
    assert_eq!(merge_unseen(&nameless).shortcode, "emoji");
}
