// Copyright (c) 2025 Lau Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Integration tests for Lau Trie.
//! Loads a text file line by line and checks that every line can be restored
//! from a walk over the resulting trie.

use std::collections::BTreeMap;

use lau_trie_lib::config::printer::{PrinterConfig, PrinterStyle};
use lau_trie_lib::config::ConfigLoader;
use lau_trie_lib::data_structures::lau_trie::{tag_sequentially, LauTrie, LauTrieError, Tag};
use lau_trie_lib::data_structures::tree_walker::TreeWalker;
use lau_trie_lib::printer::{self, DepthTriePrinter};

const SAMPLE: &str = "\
the quick brown fox
the quick brown dog

then
there
the
quick
quickly
qu
a
ab
abc
ab
Ärger
Ärgernis
";

fn numbered_lines(text: &str) -> BTreeMap<Tag, String> {
    text.lines()
        .zip(1..)
        .filter(|(line, _)| !line.is_empty())
        .map(|(line, tag)| (tag, line.to_string()))
        .collect()
}

#[test]
fn test_strings_restored_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sample.txt");
    std::fs::write(&path, SAMPLE).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    let trie = LauTrie::from_strings(text.lines()).unwrap();
    let mut expected = numbered_lines(&text);

    let mut stack: Vec<String> = Vec::new();
    trie.walk_depth_first(|node| {
        stack.truncate(node.value.level());
        stack.push(node.value.value().to_string());
        for tag in node.value.tags() {
            assert_eq!(expected.remove(tag), Some(stack.concat()));
        }
        true
    })
    .unwrap();

    assert!(expected.is_empty(), "lines never visited: {expected:?}");
    trie.verify_invariants().unwrap();
}

#[test]
fn test_duplicate_lines_share_a_node() {
    let trie = LauTrie::from_strings(SAMPLE.lines()).unwrap();
    let tags: Vec<Tag> = trie.tags_of("ab").unwrap().into_iter().collect();
    assert_eq!(tags, [11, 13]);
    assert_eq!(
        trie.find_by_prefix("the q"),
        BTreeMap::from([
            (1, "the quick brown fox".to_string()),
            (2, "the quick brown dog".to_string()),
        ])
    );
}

#[test]
fn test_snapshot_goes_stale_after_fork() {
    let mut trie = LauTrie::from_strings(["abc", "abd"]).unwrap();
    let before = trie.node_info("ac").unwrap().value;
    assert_eq!(before.value(), "c");

    trie.insert("a", 3).unwrap();

    let mut walker = trie.walker().unwrap();
    assert_eq!(
        walker.go_to_child(&before),
        Err(LauTrieError::StaleDescriptor {
            descriptor: "ac".to_string()
        })
    );
    // The same node is now reachable under its new descriptor.
    assert_eq!(trie.node_info("abc").unwrap().value.value(), "c");
}

#[test]
fn test_printers() {
    let trie = LauTrie::from_strings(["abcd", "abcde", "abcdf", "st", "sf"]).unwrap();

    assert_eq!(
        trie.to_string(),
        "0: (root)\n1: abcd [1] | s\n2: e [2] | f [3] | t [4] | f [5]\n"
    );
    assert_eq!(
        trie.render_with(&DepthTriePrinter::new("  ")),
        "(root)\n  abcd [1]\n    e [2]\n    f [3]\n  s\n    t [4]\n    f [5]\n"
    );

    let config = PrinterConfig {
        style: PrinterStyle::Depth,
        ..PrinterConfig::default()
    };
    assert!(trie
        .render_with(printer::from_config(&config).as_ref())
        .starts_with("(root)\n.abcd [1]\n"));
}

#[test]
fn test_config_drives_bulk_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("lau.toml");
    std::fs::write(&path, "[trie]\nauto_tag_start = 100\nskip_blank_lines = true\n").unwrap();

    let config = ConfigLoader::new(Some(&path), "LAU_IT").load().unwrap();
    let lines = SAMPLE
        .lines()
        .filter(|line| !(config.trie.skip_blank_lines && line.trim().is_empty()));
    let trie = LauTrie::from_strings_starting_at(lines, config.trie.auto_tag_start).unwrap();

    // "then" follows the skipped blank line and takes the next tag.
    assert_eq!(trie.tags_of("then").unwrap().into_iter().collect::<Vec<_>>(), [102]);
    assert_eq!(trie.reconstruct().len(), 14);
}

#[test]
fn test_configured_tag_start_at_limit() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("lau.toml");
    std::fs::write(&path, format!("[trie]\nauto_tag_start = {}\n", Tag::MAX)).unwrap();

    let config = ConfigLoader::new(Some(&path), "LAU_IT_LIMIT").load().unwrap();

    let trie = LauTrie::from_strings_starting_at(["last"], config.trie.auto_tag_start).unwrap();
    assert_eq!(trie.reconstruct(), BTreeMap::from([(Tag::MAX, "last".to_string())]));

    assert_eq!(
        tag_sequentially(["last", "one too many"], config.trie.auto_tag_start).unwrap_err(),
        LauTrieError::TagOverflow {
            start: Tag::MAX,
            assigned: 1
        }
    );
}
