//! Core domain types for the built corpus.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Token
// ---------------------------------------------------------------------------

/// One tagged word occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Surface text as printed, punctuation included.
    pub text: String,
    /// Dictionary form.
    pub lemma: String,
    /// Part-of-speech tag (e.g. `N-`, `V-`).
    pub pos: String,
    /// Morphological parsing code (e.g. `----NSM-`).
    pub parsing: String,
}

// ---------------------------------------------------------------------------
// BookText
// ---------------------------------------------------------------------------

/// Verse number → tokens in source order.
pub type VerseMap = BTreeMap<u32, Vec<Token>>;

/// Chapter → verse → tokens for one book.
///
/// Keys are held as integers and serialize as canonical decimal strings
/// (`"1"`, never `"01"`), ordered numerically. This is the on-disk shape of
/// each `<CODE>.json` document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookText {
    chapters: BTreeMap<u32, VerseMap>,
}

impl BookText {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a token to `chapter:verse`, creating either level on first use.
    pub fn push(&mut self, chapter: u32, verse: u32, token: Token) {
        self.chapters
            .entry(chapter)
            .or_default()
            .entry(verse)
            .or_default()
            .push(token);
    }

    /// Number of distinct chapters.
    pub fn chapter_count(&self) -> usize {
        self.chapters.len()
    }

    /// Number of verses across all chapters.
    pub fn verse_count(&self) -> usize {
        self.chapters.values().map(|verses| verses.len()).sum()
    }

    /// Number of tokens across all verses.
    pub fn token_count(&self) -> usize {
        self.chapters
            .values()
            .flat_map(|verses| verses.values())
            .map(|tokens| tokens.len())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.chapters.is_empty()
    }

    pub fn chapter(&self, chapter: u32) -> Option<&VerseMap> {
        self.chapters.get(&chapter)
    }

    /// Tokens of one verse, in source order.
    pub fn verse(&self, chapter: u32, verse: u32) -> Option<&[Token]> {
        self.chapters
            .get(&chapter)
            .and_then(|verses| verses.get(&verse))
            .map(Vec::as_slice)
    }

    /// Iterate chapters in numeric order.
    pub fn chapters(&self) -> impl Iterator<Item = (u32, &VerseMap)> {
        self.chapters.iter().map(|(k, v)| (*k, v))
    }
}

// ---------------------------------------------------------------------------
// ManifestEntry
// ---------------------------------------------------------------------------

/// One row of the run-level `books.json` manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestEntry {
    /// Three-letter book code (also the document filename stem).
    pub code: String,
    /// Display name.
    pub name: String,
    /// Number of distinct chapters in the persisted document.
    pub chapter_count: usize,
}
