//! Token, chunk and relation types

use crate::error::{ConvertError, Result};
use std::collections::HashMap;

/// Feature carrying a token's canonical identifier
pub const NAME_KEY: &str = "name";
/// Feature carrying `<role>:<chunkTag>`
pub const CHUNK_TYPE_KEY: &str = "chunkType";
/// Feature carrying `<label>:<targetIdentifier>`
pub const DREL_KEY: &str = "drel";
/// Feature re-emitted on token lines
pub const AF_KEY: &str = "af";

/// Morphological feature mapping of one token
///
/// Keys are unique; a repeated key keeps its last value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Features {
    values: HashMap<String, String>,
}

impl Features {
    /// Create an empty mapping
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a feature value
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Insert or replace a feature value
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// Whether the feature is present
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Number of features
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the mapping is empty
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Features {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut features = Features::new();
        for (key, value) in iter {
            features.insert(key, value);
        }
        features
    }
}

/// One decoded token line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Surface form
    pub form: String,
    /// Part-of-speech tag
    pub pos: String,
    /// Feature mapping; always contains `name`
    pub features: Features,
    /// Whether this token heads its chunk (set during grouping)
    pub is_head: bool,
}

impl Token {
    /// Build a token, defaulting `name` to the surface form
    pub fn new(form: impl Into<String>, pos: impl Into<String>, mut features: Features) -> Self {
        let form = form.into();
        if !features.contains(NAME_KEY) {
            features.insert(NAME_KEY, form.clone());
        }
        Self {
            form,
            pos: pos.into(),
            features,
            is_head: false,
        }
    }

    /// Canonical identifier used for cross-referencing heads
    pub fn identifier(&self) -> &str {
        self.features.get(NAME_KEY).unwrap_or(&self.form)
    }

    /// Parse the `chunkType` feature into role and chunk tag
    pub fn chunk_membership(&self) -> Result<(ChunkRole, &str)> {
        let value =
            self.features
                .get(CHUNK_TYPE_KEY)
                .ok_or_else(|| ConvertError::MissingChunkType {
                    token: self.identifier().to_string(),
                })?;

        let (role, tag) =
            value
                .split_once(':')
                .ok_or_else(|| ConvertError::MalformedChunkType {
                    token: self.identifier().to_string(),
                    value: value.to_string(),
                })?;

        Ok((ChunkRole::from_role(role), tag))
    }

    /// Parse the `drel` feature, if present
    pub fn relation(&self) -> Result<Option<Relation<'_>>> {
        let Some(value) = self.features.get(DREL_KEY) else {
            return Ok(None);
        };

        let (label, target) =
            value
                .split_once(':')
                .ok_or_else(|| ConvertError::MalformedRelation {
                    token: self.identifier().to_string(),
                    value: value.to_string(),
                })?;

        Ok(Some(Relation { label, target }))
    }

    /// The `af` feature, required on every emitted token line
    pub fn analysis(&self) -> Result<&str> {
        self.features
            .get(AF_KEY)
            .ok_or_else(|| ConvertError::MissingFeature {
                token: self.identifier().to_string(),
                key: AF_KEY.to_string(),
            })
    }
}

/// Role a token plays inside its chunk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChunkRole {
    /// Syntactic head of the chunk
    Head,
    /// Non-head member
    Child,
}

impl ChunkRole {
    /// Only the exact role `child` marks a non-head member
    fn from_role(role: &str) -> Self {
        if role == "child" {
            ChunkRole::Child
        } else {
            ChunkRole::Head
        }
    }
}

/// A dependency relation as written on a head token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Relation<'a> {
    /// Relation label, e.g. `k1`
    pub label: &'a str,
    /// Identifier of the head token of the governing chunk
    pub target: &'a str,
}

/// An ordered group of tokens sharing a chunk tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    /// Full chunk tag, e.g. `NP1`
    pub tag: String,
    /// Tokens in append order
    pub tokens: Vec<Token>,
}

impl Chunk {
    /// Create an empty chunk
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            tokens: Vec::new(),
        }
    }

    /// Bracket label: the first run of uppercase ASCII letters in the tag
    pub fn label(&self) -> Result<&str> {
        chunk_label(&self.tag)
    }

    /// Tokens flagged as head, in append order
    pub fn heads(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter().filter(|token| token.is_head)
    }
}

/// Strip the disambiguating numeral from a chunk tag (`NP2` -> `NP`)
pub fn chunk_label(tag: &str) -> Result<&str> {
    let start = tag
        .find(|c: char| c.is_ascii_uppercase())
        .ok_or_else(|| ConvertError::InvalidChunkTag {
            tag: tag.to_string(),
        })?;
    let rest = &tag[start..];
    let end = rest
        .find(|c: char| !c.is_ascii_uppercase())
        .unwrap_or(rest.len());
    Ok(&rest[..end])
}

/// Maps a head token's identifier to the tag of the chunk it heads
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeadIndex {
    entries: HashMap<String, String>,
}

impl HeadIndex {
    /// Create an empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a head; returns the chunk previously registered for the
    /// identifier, if any
    pub fn register(
        &mut self,
        identifier: impl Into<String>,
        chunk_tag: impl Into<String>,
    ) -> Option<String> {
        self.entries.insert(identifier.into(), chunk_tag.into())
    }

    /// Chunk tag headed by `identifier`
    pub fn get(&self, identifier: &str) -> Option<&str> {
        self.entries.get(identifier).map(String::as_str)
    }

    /// Resolve a relation target on behalf of `chunk`
    pub fn resolve(&self, chunk: &str, target: &str) -> Result<&str> {
        self.get(target)
            .ok_or_else(|| ConvertError::DanglingRelation {
                chunk: chunk.to_string(),
                target: target.to_string(),
            })
    }

    /// Number of registered heads
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no head was registered
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(form: &str, features: &[(&str, &str)]) -> Token {
        Token::new(form, "NN", features.iter().copied().collect())
    }

    #[test]
    fn test_name_defaults_to_form() {
        let t = token("राम", &[("af", "राम,n,m,sg,3,d,0,0")]);
        assert_eq!(t.identifier(), "राम");
        assert_eq!(t.features.get(NAME_KEY), Some("राम"));
    }

    #[test]
    fn test_explicit_name_wins() {
        let t = token("राम", &[("name", "rAma")]);
        assert_eq!(t.identifier(), "rAma");
    }

    #[test]
    fn test_chunk_membership_roles() {
        let head = token("a", &[("chunkType", "head:NP1")]);
        assert_eq!(head.chunk_membership().unwrap(), (ChunkRole::Head, "NP1"));

        let child = token("b", &[("chunkType", "child:NP1")]);
        assert_eq!(child.chunk_membership().unwrap(), (ChunkRole::Child, "NP1"));

        // Anything other than exactly `child` is a head
        let other = token("c", &[("chunkType", "Child:NP1")]);
        assert_eq!(other.chunk_membership().unwrap().0, ChunkRole::Head);
    }

    #[test]
    fn test_chunk_membership_splits_on_first_colon() {
        let t = token("a", &[("chunkType", "head:NP:1")]);
        assert_eq!(t.chunk_membership().unwrap(), (ChunkRole::Head, "NP:1"));
    }

    #[test]
    fn test_missing_chunk_type() {
        let t = token("a", &[]);
        assert_eq!(
            t.chunk_membership(),
            Err(ConvertError::MissingChunkType {
                token: "a".to_string()
            })
        );
    }

    #[test]
    fn test_malformed_chunk_type() {
        let t = token("a", &[("chunkType", "headNP1")]);
        assert!(matches!(
            t.chunk_membership(),
            Err(ConvertError::MalformedChunkType { .. })
        ));
    }

    #[test]
    fn test_relation_parsing() {
        let t = token("a", &[("drel", "k1:KAyA")]);
        let relation = t.relation().unwrap().unwrap();
        assert_eq!(relation.label, "k1");
        assert_eq!(relation.target, "KAyA");

        assert_eq!(token("b", &[]).relation().unwrap(), None);
        assert!(token("c", &[("drel", "k1")]).relation().is_err());
    }

    #[test]
    fn test_chunk_label() {
        assert_eq!(chunk_label("NP2").unwrap(), "NP");
        assert_eq!(chunk_label("VGF").unwrap(), "VGF");
        assert_eq!(chunk_label("CCP12").unwrap(), "CCP");
        assert!(chunk_label("12").is_err());
    }

    #[test]
    fn test_head_index_resolve() {
        let mut index = HeadIndex::new();
        assert_eq!(index.register("KAyA", "VGF1"), None);
        assert_eq!(index.resolve("NP1", "KAyA").unwrap(), "VGF1");
        assert_eq!(
            index.resolve("NP1", "missing"),
            Err(ConvertError::DanglingRelation {
                chunk: "NP1".to_string(),
                target: "missing".to_string(),
            })
        );
    }
}
