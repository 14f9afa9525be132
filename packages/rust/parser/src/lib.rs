//! MorphGNT source-file parser.
//!
//! Each non-blank line of a source file describes one word:
//!
//! ```text
//! 040101 N- ----NSM- λόγος, λόγος λόγος λόγος
//! ^ref   ^pos ^parsing ^text  (ignored x2) ^lemma
//! ```
//!
//! Fields are separated by single spaces. Lines with fewer than seven fields,
//! or whose reference code cannot be decoded, are dropped without error: the
//! upstream files carry the occasional irregular line and one of them must
//! never cost the whole book.

mod reference;

use morphcorpus_shared::{BookText, CorpusError, Result, Token};
use tracing::debug;

pub use reference::{REFERENCE_LEN, VerseRef, decode_reference};

/// Fields a well-formed line carries.
pub const MIN_FIELDS: usize = 7;

// Field positions within a line.
const REF: usize = 0;
const POS: usize = 1;
const PARSING: usize = 2;
const TEXT: usize = 3;
const LEMMA: usize = 6;

/// A single decoded line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine {
    pub reference: VerseRef,
    pub token: Token,
}

/// Parse one trimmed, non-blank line. `None` means the line is malformed.
pub fn parse_line(line: &str) -> Option<ParsedLine> {
    let fields: Vec<&str> = line.split(' ').collect();
    if fields.len() < MIN_FIELDS {
        return None;
    }

    let reference = decode_reference(fields[REF])?;

    Some(ParsedLine {
        reference,
        token: Token {
            text: fields[TEXT].to_string(),
            lemma: fields[LEMMA].to_string(),
            pos: fields[POS].to_string(),
            parsing: fields[PARSING].to_string(),
        },
    })
}

/// Parse a whole source document into chapter → verse → tokens.
///
/// Token order within a verse follows line order. Fails with a parse error
/// only when no line at all was usable.
pub fn parse_book(content: &str) -> Result<BookText> {
    let mut book = BookText::new();
    let mut dropped = 0usize;

    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        match parse_line(trimmed) {
            Some(ParsedLine { reference, token }) => {
                book.push(reference.chapter, reference.verse, token);
            }
            None => dropped += 1,
        }
    }

    if book.is_empty() {
        return Err(CorpusError::parse(format!(
            "document yielded no chapters ({dropped} malformed lines)"
        )));
    }

    debug!(
        chapters = book.chapter_count(),
        tokens = book.token_count(),
        dropped,
        "parsed source document"
    );

    Ok(book)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(tokens: &[Token]) -> Vec<&str> {
        tokens.iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn parse_single_line_document() {
        let book = parse_book("0101011 N- ----NSM- λόγος λόγος λόγος λόγος\n").unwrap();

        let json = serde_json::to_value(&book).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "1": { "1": [
                    { "text": "λόγος", "lemma": "λόγος", "pos": "N-", "parsing": "----NSM-" }
                ] }
            })
        );
    }

    #[test]
    fn parse_line_field_positions() {
        let parsed = parse_line("040101 N- ----NSM- λόγος, λόγος λόγος λογος").unwrap();
        assert_eq!(parsed.reference, VerseRef { chapter: 1, verse: 1 });
        assert_eq!(parsed.token.text, "λόγος,");
        assert_eq!(parsed.token.lemma, "λογος");
        assert_eq!(parsed.token.pos, "N-");
        assert_eq!(parsed.token.parsing, "----NSM-");
    }

    #[test]
    fn parse_sample_fixture() {
        let content = std::fs::read_to_string("../../../fixtures/morphgnt/sample-jhn.txt")
            .expect("read fixture");
        let book = parse_book(&content).unwrap();

        assert_eq!(book.chapter_count(), 2);
        assert_eq!(book.verse_count(), 3);
        assert_eq!(book.token_count(), 29);

        let v1 = book.verse(1, 1).unwrap();
        assert_eq!(v1.len(), 17);
        assert_eq!(texts(&v1[..5]), ["Ἐν", "ἀρχῇ", "ἦν", "ὁ", "λόγος,"]);
        assert_eq!(v1[2].lemma, "εἰμί");
        assert_eq!(v1[2].parsing, "3IAI-S--");
        assert_eq!(v1.last().unwrap().text, "λόγος.");

        let v2 = book.verse(1, 2).unwrap();
        assert_eq!(texts(v2), ["οὗτος", "ἦν", "ἐν", "ἀρχῇ", "πρὸς", "τὸν", "θεόν."]);

        assert_eq!(book.verse(2, 1).unwrap()[4].lemma, "τρίτος");
    }

    #[test]
    fn malformed_lines_are_dropped() {
        let content = std::fs::read_to_string("../../../fixtures/morphgnt/malformed.txt")
            .expect("read fixture");
        let book = parse_book(&content).unwrap();

        assert_eq!(book.chapter_count(), 1);
        assert_eq!(texts(book.verse(1, 1).unwrap()), ["Παῦλος", "Χριστοῦ"]);
        assert_eq!(texts(book.verse(1, 2).unwrap()), ["καὶ"]);
    }

    #[test]
    fn short_lines_never_abort() {
        let content = "\
010101 N- ----NSF- Βίβλος Βίβλος βίβλος βίβλος
010101 N-
010101 N- ----GSF- γενέσεως γενέσεως γενέσεως
01010 N- ----GSF- γενέσεως γενέσεως γενέσεως γένεσις
";
        let book = parse_book(content).unwrap();
        assert_eq!(texts(book.verse(1, 1).unwrap()), ["Βίβλος"]);
    }

    #[test]
    fn order_follows_source_lines() {
        let content = "\
010102 A- a a a a a
010101 B- b b b b b
010102 C- c c c c c
010101 D- d d d d d
";
        let book = parse_book(content).unwrap();
        let poses: Vec<&str> = book.verse(1, 2).unwrap().iter().map(|t| t.pos.as_str()).collect();
        assert_eq!(poses, ["A-", "C-"]);
        let poses: Vec<&str> = book.verse(1, 1).unwrap().iter().map(|t| t.pos.as_str()).collect();
        assert_eq!(poses, ["B-", "D-"]);
    }

    #[test]
    fn lines_are_trimmed() {
        let book = parse_book("  \t010203 N- x t a b l  \r\n").unwrap();
        assert_eq!(book.verse(2, 3).unwrap()[0].lemma, "l");
    }

    #[test]
    fn empty_document_is_parse_error() {
        let err = parse_book("").unwrap_err();
        assert!(matches!(err, CorpusError::Parse { .. }));

        let err = parse_book("404: Not Found\n\n<html>\n").unwrap_err();
        assert!(err.to_string().contains("no chapters"));
    }

    #[test]
    fn parsing_is_deterministic() {
        let content = std::fs::read_to_string("../../../fixtures/morphgnt/sample-jhn.txt")
            .expect("read fixture");
        assert_eq!(parse_book(&content).unwrap(), parse_book(&content).unwrap());
    }
}
