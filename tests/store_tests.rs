//! Tests for store mutators and membership getters

use tokenview::models::{Token, TokenType};
use tokenview::store::TokenStore;

fn token(id: &str, name: &str) -> Token {
    Token {
        id: id.to_string(),
        name: name.to_string(),
        token_type: TokenType::Software,
        status: None,
        logged_in: false,
        available: true,
        saved_to_configuration: false,
        read_only: false,
        serial_number: None,
        keys: Vec::new(),
    }
}

#[test]
fn test_expand_then_hide_leaves_id_absent() {
    let store = TokenStore::new();

    store.set_token_expanded("0");
    assert!(store.token_expanded("0"));

    store.set_token_hidden("0");
    assert!(!store.token_expanded("0"));
}

#[test]
fn test_expanding_twice_equals_expanding_once() {
    let store = TokenStore::new();

    store.set_token_expanded("0");
    store.set_token_expanded("0");

    // A single hide removes the id; no duplicate was inserted
    store.set_token_hidden("0");
    assert!(!store.token_expanded("0"));
}

#[test]
fn test_set_tokens_replaces_without_merging() {
    let store = TokenStore::new();

    store.set_tokens(vec![token("0", "a"), token("1", "b")]);
    assert_eq!(store.tokens().len(), 2);

    store.set_tokens(vec![token("2", "c")]);
    let tokens = store.tokens();
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].id, "2");

    store.set_tokens(Vec::new());
    assert!(store.tokens().is_empty());
}

#[test]
fn test_overlapping_replacements_last_write_wins() {
    let store = TokenStore::new();

    // Two in-flight fetches resolving out of order: the later mutator call
    // wholly replaces the snapshot, with no generation check.
    store.set_tokens(vec![token("0", "newer")]);
    store.set_tokens(vec![token("0", "older")]);

    assert_eq!(store.tokens()[0].name, "older");
}

#[test]
fn test_sorted_tokens_repeated_calls_are_equal() {
    let store = TokenStore::new();
    store.set_tokens(vec![token("2", "b"), token("1", "a")]);

    let first = store.sorted_tokens();
    let second = store.sorted_tokens();
    assert_eq!(first, second);

    let ids: Vec<&str> = first.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, ["1", "2"]);
}

#[test]
fn test_getters_hand_out_independent_copies() {
    let store = TokenStore::new();
    store.set_tokens(vec![token("1", "a")]);

    let mut snapshot = store.tokens();
    snapshot.clear();

    assert_eq!(store.tokens().len(), 1);
}

#[test]
fn test_selected_token_passthrough() {
    let store = TokenStore::new();
    assert!(store.selected_token().is_none());

    store.set_selected_token(token("7", "focused"));
    assert_eq!(store.selected_token().unwrap().id, "7");

    // Replaced, not merged
    store.set_selected_token(token("8", "refocused"));
    assert_eq!(store.selected_token().unwrap().id, "8");
}
