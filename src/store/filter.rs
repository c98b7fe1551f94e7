//! Derived views over the token snapshot
//!
//! Pure functions from (snapshot, search term) to a new list. Callers get an
//! independent copy; the stored snapshot is never modified.

use crate::models::Token;

/// Copy of `tokens` sorted by id.
///
/// The backend reply order changes between requests, so the list is re-sorted
/// on the client to keep rows from jumping around on refresh.
pub fn sorted_tokens(tokens: &[Token]) -> Vec<Token> {
    if tokens.is_empty() {
        return Vec::new();
    }

    let mut arr = tokens.to_vec();
    arr.sort_by(|a, b| a.id.cmp(&b.id));
    arr
}

/// Sorted copy of `tokens` pruned down to entries matching `search`.
///
/// The term is matched case-insensitively against token names, key names and
/// certificate owner ids. Pruning is bottom-up on the copy:
///
/// 1. certificates whose owner id is absent or does not contain the term are
///    dropped,
/// 2. keys keep their place if they retained a certificate or their name
///    matches; unnamed keys with no remaining certificates are dropped,
/// 3. tokens keep their place if they retained a key or their name matches.
///
/// Step 3 only decides token survival: a token kept on a name match is
/// returned with whatever the earlier steps left of its keys, possibly
/// nothing.
pub fn filtered_tokens(tokens: &[Token], search: &str) -> Vec<Token> {
    let mut arr = sorted_tokens(tokens);

    if search.is_empty() {
        return arr;
    }

    let term = search.to_lowercase();

    for token in &mut arr {
        for key in &mut token.keys {
            key.certificates.retain(|cert| match &cert.owner_id {
                Some(owner) => owner.to_lowercase().contains(&term),
                None => false,
            });
        }
    }

    for token in &mut arr {
        token.keys.retain(|key| {
            if !key.certificates.is_empty() {
                return true;
            }
            match &key.name {
                Some(name) => name.to_lowercase().contains(&term),
                None => false,
            }
        });
    }

    arr.retain(|token| !token.keys.is_empty() || token.name.to_lowercase().contains(&term));

    arr
}

/// Sorted copy of `tokens` filtered on token name only
pub fn tokens_filtered_by_name(tokens: &[Token], search: &str) -> Vec<Token> {
    let mut arr = sorted_tokens(tokens);

    if search.is_empty() {
        return arr;
    }

    let term = search.to_lowercase();
    arr.retain(|token| token.name.to_lowercase().contains(&term));
    arr
}
