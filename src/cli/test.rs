use std::io::Cursor;

use clap::Parser;
use tripod::{ByteTrie, CharTrie, Error};

use super::*;

#[test]
fn split_lines() {
    assert_eq!(load::split("hello world", false), vec!["hello world"]);
    assert!(load::split("", false).is_empty());
}

#[test]
fn split_words() {
    assert_eq!(
        load::split("The quick (\"brown\") fox", true),
        vec!["The", "quick", "brown", "fox"]
    );
    assert!(load::split("  ...  ", true).is_empty());
}

#[test]
fn load_lines() {
    let mut trie = CharTrie::new(4);
    let input = Cursor::new("test\nte\n\ntest\ntest123\nãããã\n");
    let loaded = load(&mut trie, input, false, false).unwrap();
    assert_eq!(
        loaded,
        load::Loaded {
            added: 3,
            duplicates: 1,
            rejected: 1,
        }
    );
    assert!(trie.exists("ãããã"));
    assert!(!trie.exists("test123"));
}

#[test]
fn load_strict() {
    let mut trie = ByteTrie::new(4);
    let input = Cursor::new("test\nãããã\n");
    match load(&mut trie, input, false, true) {
        Err(LoadError::Trie { line, source }) => {
            assert_eq!(line, 2);
            assert_eq!(
                source,
                Error::KeyTooLong {
                    limit: 4,
                    length: 8
                }
            );
        }
        other => panic!("expected a rejected key, got {other:?}"),
    }
    assert!(trie.exists("test"));
}

#[test]
fn load_words() {
    let mut trie = ByteTrie::new(16);
    let input = Cursor::new("one two, three\ntwo four\n");
    let loaded = load(&mut trie, input, true, false).unwrap();
    assert_eq!(loaded.added, 4);
    assert_eq!(loaded.duplicates, 1);
    assert_eq!(trie.len(), 4);
}

#[test]
fn render() {
    assert_eq!(u8::render("ãb".as_bytes()), "ãb");
    assert_eq!(char::render(&['ã', 'b']), "ãb");
}

#[test]
fn parse_args() {
    let cli = Cli::try_parse_from([
        "tripod", "-s", "bytes", "-m", "8", "-vv", "prefix", "te", "--sorted",
    ])
    .unwrap();
    assert_eq!(cli.trie.symbols, Symbols::Bytes);
    assert_eq!(cli.trie.max_key_length, 8);
    assert_eq!(cli.level(), Level::DEBUG);
    match cli.cmd {
        Cmd::Prefix(opts) => {
            assert_eq!(opts.prefix, "te");
            assert!(opts.sorted);
            assert!(!opts.count);
        }
        other => panic!("expected prefix, got {other:?}"),
    }

    assert!(Cli::try_parse_from(["tripod", "exists"]).is_err());
}
