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

use crate::emojis::emoji::Emoji;
use crate::emojis::emoji_kind::{BLACK_FLAG, CANCEL_TAG, EmojiKind, KEYCAP, KeycapBase, REGIONAL_INDICATORS, TAG_LETTERS, VS16, ZWJ};
use crate::emojis::skin_tone::SkinTone;

fn regional_indicator(letter: char) -> u32 {
    REGIONAL_INDICATORS.start() + (letter as u32 - 'A' as u32)
}

fn tag_letters(region: &str) -> Vec<u32> {
    let mut sequence = vec![BLACK_FLAG];
    sequence.extend(region.chars().map(|letter| TAG_LETTERS.start() + (letter as u32 - 'a' as u32)));
    sequence.push(CANCEL_TAG);
    sequence
}

#[test]
fn flag_pair_round_trip() {
    for first in 'A'..='Z' {
        for second in 'A'..='Z' {
            let sequence = [regional_indicator(first), regional_indicator(second)];
            let expected: String = vec![first, second].into_iter().collect();
            assert_eq!(EmojiKind::country_code(&sequence), expected);
            assert_eq!(EmojiKind::classify(&sequence), EmojiKind::FlagPair(expected));
        }
    }
}

#[test]
fn flag_pair_needs_exactly_two_indicators() {
    let u = regional_indicator('U');
    let s = regional_indicator('S');
    assert_eq!(EmojiKind::classify(&[u]), EmojiKind::Generic);
    assert_eq!(EmojiKind::classify(&[u, s, u]), EmojiKind::Generic);
    assert_eq!(EmojiKind::classify(&[u, 0x1f600]), EmojiKind::Generic);
}

#[test]
fn keycap_base_is_total() {
    for base in 0x20..0x7f {
        let expected = match base {
            0x30..=0x39 => KeycapBase::Digit(std::char::from_u32(base).unwrap()),
            0x23 => KeycapBase::Hash,
            0x2a => KeycapBase::Star,
            _ => KeycapBase::Symbol
        };
        for sequence in &[vec![base, KEYCAP], vec![base, VS16, KEYCAP]] {
            let kind = EmojiKind::classify(sequence);
            assert_eq!(kind, EmojiKind::Keycap(expected));
            // Classifying again gives the same result
            assert_eq!(EmojiKind::classify(sequence), kind);
        }
    }
}

#[test]
fn keycap_names() {
    assert_eq!(KeycapBase::Digit('3').to_string(), "3");
    assert_eq!(KeycapBase::Hash.to_string(), "hash");
    assert_eq!(KeycapBase::Star.to_string(), "star");
    assert_eq!(KeycapBase::Symbol.to_string(), "symbol");
}

#[test]
fn keycap_wins_over_tag_flag() {
    let mut sequence = tag_letters("gbeng");
    sequence.insert(1, KEYCAP);
    assert_eq!(EmojiKind::classify(&sequence), EmojiKind::Keycap(KeycapBase::Symbol));
}

#[test]
fn tag_flags() {
    assert_eq!(EmojiKind::classify(&tag_letters("gbeng")), EmojiKind::TagFlag(String::from("england")));
    assert_eq!(EmojiKind::classify(&tag_letters("gbsct")), EmojiKind::TagFlag(String::from("scotland")));
    assert_eq!(EmojiKind::classify(&tag_letters("gbwls")), EmojiKind::TagFlag(String::from("wales")));
    assert_eq!(EmojiKind::classify(&tag_letters("usca")), EmojiKind::TagFlag(String::from("usca")));
    // Too short to be a tag flag
    assert_eq!(EmojiKind::classify(&tag_letters("g")), EmojiKind::Generic);
    // Long enough, but without any tag letters
    assert_eq!(EmojiKind::classify(&[BLACK_FLAG, ZWJ, 0x2620, CANCEL_TAG]), EmojiKind::TagFlag(String::from("tag")));
}

#[test]
fn classification_preconditions_hold() {
    let sequences: Vec<Vec<u32>> = vec![
        vec![0x1f600],
        vec![0x1f3f3, VS16, ZWJ, 0x1f308],
        vec![0x1f44d, 0x1f3fd],
        vec![regional_indicator('D'), regional_indicator('E')],
        vec![0x23, VS16, KEYCAP],
        tag_letters("gbsct"),
        vec![BLACK_FLAG, ZWJ, 0x2620, VS16],
    ];
    for sequence in sequences {
        match EmojiKind::classify(&sequence) {
            EmojiKind::FlagPair(_) => {
                assert_eq!(sequence.len(), 2);
                assert!(sequence.iter().all(|codepoint| REGIONAL_INDICATORS.contains(codepoint)));
            }
            EmojiKind::Keycap(_) => assert!(sequence.contains(&KEYCAP)),
            EmojiKind::TagFlag(_) => {
                assert!(sequence.len() > 3);
                assert_eq!(sequence.first(), Some(&BLACK_FLAG));
                assert_eq!(sequence.last(), Some(&CANCEL_TAG));
            }
            EmojiKind::Generic => {
                assert!(!EmojiKind::is_flag_pair(&sequence));
                assert!(!EmojiKind::is_keycap(&sequence));
                assert!(!EmojiKind::is_tag_flag(&sequence));
            }
        }
    }
}

#[test]
fn skin_tones() {
    for tone in SkinTone::ALL.iter() {
        assert_eq!(SkinTone::from_codepoint(tone.codepoint()), Some(*tone));
    }
    assert_eq!(SkinTone::Light.name(), "light_skin_tone");
    assert_eq!(SkinTone::MediumDark.name(), "medium_dark_skin_tone");
    assert_eq!(SkinTone::from_codepoint(0x1f600), None);
}

#[test]
fn emoji_from_strings() {
    let rainbow = Emoji::from("🏳️‍🌈");
    assert_eq!(rainbow.sequence, vec![0x1f3f3, VS16, ZWJ, 0x1f308]);
    assert_eq!(rainbow.hex_sequence(), "1f3f3_fe0f_200d_1f308");
    assert_eq!(rainbow.codepoint_alias(), "u1f3f3_fe0f_200d_1f308");
    assert_eq!(rainbow.display_emoji(), "🏳️‍🌈");

    let parsed = Emoji::from_sequence("1F3F3 FE0F 200D 1F308").unwrap();
    assert_eq!(parsed, rainbow);
    assert!(Emoji::from_sequence("rainbow").is_err());
    assert!(Emoji::from("").is_empty());
}

#[test]
fn emoji_serde() {
    let usa: Emoji = serde_json::from_str("\"🇺🇸\"").unwrap();
    assert_eq!(usa.kind(), EmojiKind::FlagPair(String::from("US")));
    assert_eq!(serde_json::to_string(&usa).unwrap(), "\"🇺🇸\"");
}
