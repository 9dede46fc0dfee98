//! End-to-end behaviour of the two passes over the bundled Southern Uzbek
//! rule set, exercised through the public facade the way a host
//! application would drive it.

use lutfiy_core::core::script;
use lutfiy_core::core::table::MappingTable;
use lutfiy_core::core::types::CharClass;
use lutfiy_core::core::types::LetterPosition::{Final, Initial, Medial};
use lutfiy_core::{
    persistence, Lutfiy, ProcessOptions, RuleSet, RulesError, UnmappedGraphemeError,
};

const ZWNJ: char = '\u{200C}';
const SENTENCE: &str = "اۉزبېکستان کېلهجگی بویوک دولت دیر.";

fn strip_zwnj(text: &str) -> String {
    text.chars().filter(|&c| c != ZWNJ).collect()
}

fn zwnj_count(text: &str) -> usize {
    text.chars().filter(|&c| c == ZWNJ).count()
}

#[test]
fn fixing_is_idempotent() {
    let lutfiy = Lutfiy::new();
    for text in [SENTENCE, "کېلهجگی", "خانهلر خانه مهم", "", "hello!"] {
        let once = lutfiy.fix_zwnj(text);
        let twice = lutfiy.fix_zwnj(&once);
        assert_eq!(twice, once, "second pass changed {:?}", text);
    }
}

#[test]
fn fixing_only_touches_joiners() {
    let lutfiy = Lutfiy::new();
    let noisy = format!("کېل{z}هجگی، {z}خانه{z}لر... abc", z = ZWNJ);
    for text in [SENTENCE, noisy.as_str()] {
        let fixed = lutfiy.fix_zwnj(text);
        assert_eq!(
            strip_zwnj(&fixed),
            strip_zwnj(text),
            "a non-joiner character changed in {:?}",
            text
        );
    }
}

#[test]
fn foreign_text_passes_through_both_passes() {
    let lutfiy = Lutfiy::new();
    let text = "plain ASCII 123, nothing to do; даже кириллица!";
    assert_eq!(lutfiy.fix_zwnj(text), text);
    assert_eq!(lutfiy.transliterate(text).unwrap(), text);
}

#[test]
fn separators_survive_both_passes() {
    let lutfiy = Lutfiy::new();
    let text = "اۉزبېکستان\tکېلهجگی،  بویوک... دولت دیر.\n";
    // Whitespace and punctuation, in order. Latin letters classify as
    // out-of-inventory, so the filter must name the separator classes.
    let separators = |s: &str| -> String {
        s.chars()
            .filter(|&c| {
                matches!(
                    script::classify(c),
                    CharClass::Whitespace | CharClass::Punctuation
                )
            })
            .collect()
    };
    let fixed = lutfiy.fix_zwnj(text);
    assert_eq!(separators(&fixed), separators(text));
    let latin = lutfiy.transliterate(text).unwrap();
    assert_eq!(separators(&latin), separators(text));
}

#[test]
fn mapping_covers_the_whole_inventory() {
    let table = MappingTable::from_rules(&RuleSet::southern_uzbek().mapping);
    assert!(table.validate().is_ok());
    // The same claim, spelled out grapheme by grapheme.
    for &c in script::LETTERS.iter().chain(script::DIACRITICS.iter()) {
        for position in [Initial, Medial, Final] {
            assert!(
                table.lookup(&[c], position).is_some(),
                "no rule for U+{:04X} in {} position",
                c as u32,
                position
            );
        }
    }
}

#[test]
fn national_name_scenario() {
    let lutfiy = Lutfiy::new();
    let word = "اۉزبېکستان";
    // No morpheme boundary, so correction leaves the word alone.
    assert_eq!(lutfiy.fix_zwnj(word), word);
    let latin = lutfiy.transliterate(word).unwrap();
    assert_eq!(latin, "oʻzbekston");
    assert_eq!(latin.split_whitespace().count(), 1);
}

#[test]
fn trailing_punctuation_scenario() {
    let lutfiy = Lutfiy::new();
    assert_eq!(lutfiy.transliterate("...دیر.").unwrap(), "...dir.");
    assert_eq!(lutfiy.fix_zwnj("...دیر."), "...دیر.");
}

#[test]
fn empty_input_scenario() {
    let lutfiy = Lutfiy::new();
    assert_eq!(lutfiy.fix_zwnj(""), "");
    assert_eq!(lutfiy.transliterate("").unwrap(), "");
    assert_eq!(
        lutfiy.process("", ProcessOptions::default()).unwrap(),
        ""
    );
}

#[test]
fn canonical_sentence_end_to_end() {
    let lutfiy = Lutfiy::new();

    let fixed = lutfiy.fix_zwnj(SENTENCE);
    assert_eq!(zwnj_count(&fixed), 1);
    assert_eq!(fixed, format!("اۉزبېکستان کېله{}جگی بویوک دولت دیر.", ZWNJ));

    let both = ProcessOptions {
        fix_zwnj: true,
        transliterate: true,
    };
    let latin = lutfiy.process(SENTENCE, both).unwrap();
    assert_eq!(latin, "oʻzbekston kelhjgi bvivk dvlt dir.");
    // The joiner never leaks into Latin output.
    assert_eq!(zwnj_count(&latin), 0);
}

#[test]
fn process_defaults_to_correction_only() {
    let lutfiy = Lutfiy::new();
    let out = lutfiy.process(SENTENCE, ProcessOptions::default()).unwrap();
    assert_eq!(out, lutfiy.fix_zwnj(SENTENCE));
}

#[test]
fn analysis_agrees_with_fixing() {
    let lutfiy = Lutfiy::new();
    let decisions = lutfiy.analyze_zwnj(SENTENCE);
    let required: Vec<_> = decisions.iter().filter(|d| d.required).collect();
    assert_eq!(required.len(), 1);
    assert_eq!(required[0].stem_final, 'ه');
    assert_eq!(required[0].matched_suffix.as_deref(), Some("جگ"));

    let inserted = zwnj_count(&lutfiy.fix_zwnj(SENTENCE)) - zwnj_count(SENTENCE);
    assert_eq!(inserted, required.len());
}

#[test]
fn gappy_table_is_rejected_at_load_and_precise_at_runtime() {
    let mut rules = RuleSet::southern_uzbek();
    rules.mapping.retain(|r| !r.source.contains('ق'));

    // Building a facade from the gappy set fails up front.
    match Lutfiy::from_rules(rules.clone()) {
        Err(RulesError::Coverage { letter, .. }) => assert_eq!(letter, 'ق'),
        other => panic!("expected coverage error, got {:?}", other.err()),
    }

    // Driven directly, the mapper names the miss exactly.
    let mapper = lutfiy_core::core::mapper::TransliterationMapper::new(&rules.mapping);
    let err: UnmappedGraphemeError = mapper.transliterate("دیر قلم").unwrap_err();
    assert_eq!(err.grapheme, "ق");
    assert_eq!(err.position, lutfiy_core::core::types::LetterPosition::Initial);
    assert_eq!(err.offset, 4);
}

#[test]
fn rule_files_round_trip_in_both_formats() {
    let dir = tempfile::tempdir().unwrap();
    let rules = RuleSet::southern_uzbek();

    let json_path = dir.path().join("southern_uzbek.json");
    persistence::save_rules(&rules, &json_path).unwrap();
    assert_eq!(persistence::load_rules(&json_path).unwrap(), rules);

    let bin_path = dir.path().join("southern_uzbek.rules");
    persistence::save_rules(&rules, &bin_path).unwrap();
    assert_eq!(persistence::load_rules(&bin_path).unwrap(), rules);
}

#[test]
fn loaded_rules_behave_like_the_bundled_ones() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rules.json");
    persistence::save_rules(&RuleSet::southern_uzbek(), &path).unwrap();

    let loaded = Lutfiy::from_rules(persistence::load_rules(&path).unwrap()).unwrap();
    let bundled = Lutfiy::new();
    assert_eq!(loaded.fix_zwnj(SENTENCE), bundled.fix_zwnj(SENTENCE));
    assert_eq!(
        loaded.transliterate(SENTENCE).unwrap(),
        bundled.transliterate(SENTENCE).unwrap()
    );
}
