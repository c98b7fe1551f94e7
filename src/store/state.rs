//! Token inventory state store
//!
//! Single source of truth for the token management screen: the fetched token
//! snapshot, which tokens are expanded in the UI, and the selected token.
//! All change goes through the mutator methods; the read methods hand out
//! independent copies and never touch stored state.

use std::sync::{Arc, RwLock};

use crate::models::Token;
use crate::store::filter;

/// Raw inventory state behind the store handle
#[derive(Debug, Default)]
struct TokensState {
    /// Snapshot from the last successful fetch, in backend reply order
    tokens: Vec<Token>,
    /// Ids of tokens with their detail rows open. Set semantics: membership
    /// only, duplicate-free via existence check before insertion.
    expanded_tokens: Vec<String>,
    /// Token focused for detail views. Set independently of `tokens` and
    /// never validated against the snapshot.
    selected_token: Option<Token>,
}

/// Thread-safe token inventory store
#[derive(Clone, Default)]
pub struct TokenStore {
    inner: Arc<RwLock<TokensState>>,
}

impl TokenStore {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(TokensState::default())),
        }
    }

    /// Mark a token's detail rows as open. Idempotent.
    pub fn set_token_expanded(&self, id: &str) {
        let mut state = self.inner.write().unwrap();
        if !state.expanded_tokens.iter().any(|e| e == id) {
            state.expanded_tokens.push(id.to_string());
        }
    }

    /// Mark a token's detail rows as closed. Idempotent.
    pub fn set_token_hidden(&self, id: &str) {
        let mut state = self.inner.write().unwrap();
        if let Some(index) = state.expanded_tokens.iter().position(|e| e == id) {
            state.expanded_tokens.remove(index);
        }
    }

    /// Replace the token snapshot wholesale. No merge with the prior
    /// snapshot; expanded ids are left as-is even if their token is gone.
    pub fn set_tokens(&self, tokens: Vec<Token>) {
        let mut state = self.inner.write().unwrap();
        state.tokens = tokens;
    }

    /// Replace the selected token.
    pub fn set_selected_token(&self, token: Token) {
        let mut state = self.inner.write().unwrap();
        state.selected_token = Some(token);
    }

    /// Whether a token's detail rows are open
    pub fn token_expanded(&self, id: &str) -> bool {
        let state = self.inner.read().unwrap();
        state.expanded_tokens.iter().any(|e| e == id)
    }

    /// Current snapshot in backend reply order
    pub fn tokens(&self) -> Vec<Token> {
        let state = self.inner.read().unwrap();
        state.tokens.clone()
    }

    /// Snapshot sorted by token id
    pub fn sorted_tokens(&self) -> Vec<Token> {
        let state = self.inner.read().unwrap();
        filter::sorted_tokens(&state.tokens)
    }

    /// Currently selected token, if any
    pub fn selected_token(&self) -> Option<Token> {
        let state = self.inner.read().unwrap();
        state.selected_token.clone()
    }

    /// Sorted snapshot pruned down to entries matching `search`.
    /// See [`filter::filtered_tokens`] for the matching rules.
    pub fn filtered_tokens(&self, search: &str) -> Vec<Token> {
        let state = self.inner.read().unwrap();
        filter::filtered_tokens(&state.tokens, search)
    }

    /// Sorted snapshot filtered on token name only
    pub fn tokens_filtered_by_name(&self, search: &str) -> Vec<Token> {
        let state = self.inner.read().unwrap();
        filter::tokens_filtered_by_name(&state.tokens, search)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TokenType;

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
    fn test_expand_is_idempotent() {
        let store = TokenStore::new();
        store.set_token_expanded("0");
        store.set_token_expanded("0");

        assert!(store.token_expanded("0"));
        store.set_token_hidden("0");
        assert!(!store.token_expanded("0"));
    }

    #[test]
    fn test_hide_absent_id_is_a_noop() {
        let store = TokenStore::new();
        store.set_token_hidden("missing");
        assert!(!store.token_expanded("missing"));
    }

    #[test]
    fn test_set_tokens_replaces_wholesale() {
        let store = TokenStore::new();
        store.set_tokens(vec![token("0", "a"), token("1", "b")]);
        assert_eq!(store.tokens().len(), 2);

        store.set_tokens(Vec::new());
        assert!(store.tokens().is_empty());
    }

    #[test]
    fn test_expanded_ids_survive_refetch() {
        let store = TokenStore::new();
        store.set_tokens(vec![token("0", "a")]);
        store.set_token_expanded("0");

        // Token "0" disappears from the next snapshot; its expanded id
        // is left inert rather than reconciled.
        store.set_tokens(vec![token("1", "b")]);
        assert!(store.token_expanded("0"));
    }

    #[test]
    fn test_selected_token_is_independent_of_snapshot() {
        let store = TokenStore::new();
        assert!(store.selected_token().is_none());

        store.set_selected_token(token("9", "detached"));
        assert_eq!(store.selected_token().unwrap().id, "9");
        assert!(store.tokens().is_empty());
    }
}
