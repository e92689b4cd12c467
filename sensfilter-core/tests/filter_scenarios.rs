// sensfilter-core/tests/filter_scenarios.rs
//! End-to-end scenarios for both scanning strategies: the reference
//! vocabularies, add/delete round trips and the delete-policy regression.

use std::collections::HashMap;

use sensfilter_core::{DeletePolicy, FilterOptions, ScanStrategy, SensitiveFilter};
use test_log::test;

const STRATEGIES: [ScanStrategy; 2] = [ScanStrategy::AhoCorasick, ScanStrategy::Greedy];

fn filter_with(strategy: ScanStrategy, words: &[&str]) -> SensitiveFilter {
    let filter = SensitiveFilter::new(strategy);
    filter.add_words(words);
    filter
}

fn counts(pairs: &[(&str, usize)]) -> HashMap<String, usize> {
    pairs.iter().map(|(w, n)| (w.to_string(), *n)).collect()
}

#[test]
fn test_aho_corasick_find_all_badword() {
    let filter = filter_with(ScanStrategy::AhoCorasick, &["bad", "word", "badword"]);
    let mut found = filter.find_all("this is a badword");
    assert_eq!(found.len(), 3);
    found.sort();
    assert_eq!(found, vec!["bad", "badword", "word"]);
}

#[test]
fn test_aho_corasick_find_one_badword() {
    let filter = filter_with(ScanStrategy::AhoCorasick, &["bad", "word", "badword"]);
    assert_eq!(filter.find_one("this is a badword").as_deref(), Some("bad"));
}

#[test]
fn test_replace_and_remove_badword() {
    for strategy in STRATEGIES {
        let filter = filter_with(strategy, &["badword"]);
        assert_eq!(filter.replace("badword", '*'), "*******", "{}", strategy);
        assert_eq!(filter.remove("xbadwordy"), "xy", "{}", strategy);
    }
}

#[test]
fn test_aho_corasick_counts_usher() {
    let filter = filter_with(ScanStrategy::AhoCorasick, &["she", "he", "her"]);
    assert_eq!(
        filter.find_all_count("usher"),
        counts(&[("he", 1), ("she", 1), ("her", 1)])
    );
}

#[test]
fn test_greedy_counts_usher_reference_run() {
    let filter = filter_with(ScanStrategy::Greedy, &["she", "he", "her"]);
    assert_eq!(
        filter.find_all_count("usher"),
        counts(&[("she", 1), ("he", 1), ("her", 1)])
    );
    assert_eq!(filter.find_all("usher"), vec!["she", "he", "her"]);
}

#[test]
fn test_counts_include_overlapping_occurrences() {
    let ac = filter_with(ScanStrategy::AhoCorasick, &["aba", "b"]);
    assert_eq!(ac.find_all_count("ababa"), counts(&[("aba", 2), ("b", 2)]));

    let greedy = filter_with(ScanStrategy::Greedy, &["aba", "b"]);
    assert_eq!(greedy.find_all_count("ababa"), counts(&[("aba", 2), ("b", 2)]));
}

#[test]
fn test_find_one_differs_by_strategy_when_starts_differ() {
    // AC reports the match that ends first, greedy the one that starts first.
    let ac = filter_with(ScanStrategy::AhoCorasick, &["abcd", "bc"]);
    assert_eq!(ac.find_one("abcd").as_deref(), Some("bc"));

    let greedy = filter_with(ScanStrategy::Greedy, &["abcd", "bc"]);
    assert_eq!(greedy.find_one("abcd").as_deref(), Some("abcd"));
}

#[test]
fn test_add_then_delete_round_trip() {
    for strategy in STRATEGIES {
        let filter = filter_with(strategy, &["alpha", "beta"]);
        filter.add_word("gamma");
        assert_eq!(filter.find_one("say gamma").as_deref(), Some("gamma"));
        filter.del_word("gamma");
        assert_eq!(filter.find_one("say gamma"), None, "{}", strategy);
        assert_eq!(filter.find_one("say beta").as_deref(), Some("beta"));
    }
}

#[test]
fn test_ref_counted_delete_keeps_words_sharing_the_path() {
    for strategy in STRATEGIES {
        let filter = filter_with(strategy, &["bad", "badword", "badwords"]);
        filter.del_word("badword");
        assert_eq!(filter.find_all("badwords"), vec!["bad", "badwords"], "{}", strategy);
        filter.del_word("bad");
        assert_eq!(filter.find_all("badwords"), vec!["badwords"], "{}", strategy);
    }
}

#[test]
fn test_last_leaf_edge_prunes_later_inserted_extension() {
    // Regression pin for the legacy prune rule: "badword" was inserted after
    // "bad" and extends it. Deleting "bad" cuts the edge into its leaf and
    // takes "badword" along.
    let filter = SensitiveFilter::with_options(FilterOptions {
        strategy: ScanStrategy::AhoCorasick,
        delete_policy: DeletePolicy::LastLeafEdge,
        ..FilterOptions::default()
    });
    filter.add_word("bad");
    filter.add_word("badword");
    assert_eq!(filter.del_words(["bad"]), 2);
    assert!(filter.is_empty());
    assert_eq!(filter.find_one("badword"), None);
}

#[test]
fn test_delete_of_absent_word_is_silent() {
    for strategy in STRATEGIES {
        let filter = filter_with(strategy, &["bad"]);
        assert!(!filter.del_word("good"));
        assert!(!filter.del_word(""));
        assert_eq!(filter.len(), 1);
    }
}

#[test]
fn test_empty_vocabulary_and_text() {
    for strategy in STRATEGIES {
        let empty = SensitiveFilter::new(strategy);
        assert!(empty.find_all("anything").is_empty());
        assert!(empty.find_all_count("anything").is_empty());
        assert_eq!(empty.find_one("anything"), None);
        assert_eq!(empty.replace("anything", '*'), "anything");
        assert_eq!(empty.remove("anything"), "anything");

        let filter = filter_with(strategy, &["bad"]);
        assert!(filter.find_all("").is_empty());
        assert_eq!(filter.replace("", '*'), "");
        assert_eq!(filter.remove(""), "");
    }
}

#[test]
fn test_control_and_unusual_code_points_are_opaque() {
    for strategy in STRATEGIES {
        let filter = filter_with(strategy, &["\u{0}\u{1b}[", "\u{fffd}", "🙂🙃"]);
        let text = "a\u{0}\u{1b}[b\u{fffd}c🙂🙃d";
        assert_eq!(filter.remove(text), "abcd", "{}", strategy);
        assert_eq!(filter.replace(text, '-').chars().count(), text.chars().count());
    }
}

#[test]
fn test_multibyte_vocabulary() {
    for strategy in STRATEGIES {
        let filter = filter_with(strategy, &["敏感", "敏感词", "词"]);
        assert_eq!(filter.replace("这是敏感词。", '*'), "这是***。", "{}", strategy);
        assert_eq!(filter.remove("这是敏感词。"), "这是。");
    }
}
