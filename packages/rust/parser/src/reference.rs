//! Decoding of the positional `BBCCVV` reference code that prefixes each line.

/// Minimum length of a usable reference code.
pub const REFERENCE_LEN: usize = 6;

/// Chapter and verse decoded from a reference code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerseRef {
    pub chapter: u32,
    pub verse: u32,
}

/// Decode chapter (positions 3–4) and verse (positions 5–6) from `code`.
///
/// The book digits are not checked. Returns `None` when the code is too short
/// or either slot is not a number.
pub fn decode_reference(code: &str) -> Option<VerseRef> {
    if code.chars().count() < REFERENCE_LEN {
        return None;
    }
    let chapter = code.get(2..4)?.parse().ok()?;
    let verse = code.get(4..6)?.parse().ok()?;
    Some(VerseRef { chapter, verse })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_leading_zeros() {
        let r = decode_reference("040108").unwrap();
        assert_eq!(r, VerseRef { chapter: 1, verse: 8 });
        assert_eq!(r.chapter.to_string(), "1");
        assert_eq!(r.verse.to_string(), "8");
    }

    #[test]
    fn two_digit_values() {
        assert_eq!(
            decode_reference("662316"),
            Some(VerseRef { chapter: 23, verse: 16 })
        );
    }

    #[test]
    fn extra_characters_are_ignored() {
        assert_eq!(
            decode_reference("0101011"),
            Some(VerseRef { chapter: 1, verse: 1 })
        );
    }

    #[test]
    fn short_codes_are_rejected() {
        assert!(decode_reference("").is_none());
        assert!(decode_reference("04010").is_none());
    }

    #[test]
    fn non_numeric_slots_are_rejected() {
        assert!(decode_reference("04ab08").is_none());
        assert!(decode_reference("0401x8").is_none());
        assert!(decode_reference("λόγος").is_none());
    }
}
