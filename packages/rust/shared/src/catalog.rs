//! The SBLGNT book catalog, in canonical order.

/// One source document in the corpus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookDescriptor {
    /// Numeric book id as used by the source files (61 = Matthew).
    pub id: u8,
    /// Source filename, joined onto the configured base URL.
    pub source: &'static str,
    /// Three-letter code; names the output document.
    pub code: &'static str,
    /// Display name.
    pub name: &'static str,
}

impl BookDescriptor {
    pub const fn new(id: u8, source: &'static str, code: &'static str, name: &'static str) -> Self {
        Self {
            id,
            source,
            code,
            name,
        }
    }
}

/// The 27 books of the New Testament, Matthew through Revelation.
pub const SBLGNT_BOOKS: &[BookDescriptor] = &[
    BookDescriptor::new(61, "61-Mt-morphgnt.txt", "MAT", "Matthew"),
    BookDescriptor::new(62, "62-Mk-morphgnt.txt", "MRK", "Mark"),
    BookDescriptor::new(63, "63-Lk-morphgnt.txt", "LUK", "Luke"),
    BookDescriptor::new(64, "64-Jn-morphgnt.txt", "JHN", "John"),
    BookDescriptor::new(65, "65-Ac-morphgnt.txt", "ACT", "Acts"),
    BookDescriptor::new(66, "66-Ro-morphgnt.txt", "ROM", "Romans"),
    BookDescriptor::new(67, "67-1Co-morphgnt.txt", "1CO", "1 Corinthians"),
    BookDescriptor::new(68, "68-2Co-morphgnt.txt", "2CO", "2 Corinthians"),
    BookDescriptor::new(69, "69-Ga-morphgnt.txt", "GAL", "Galatians"),
    BookDescriptor::new(70, "70-Eph-morphgnt.txt", "EPH", "Ephesians"),
    BookDescriptor::new(71, "71-Php-morphgnt.txt", "PHP", "Philippians"),
    BookDescriptor::new(72, "72-Col-morphgnt.txt", "COL", "Colossians"),
    BookDescriptor::new(73, "73-1Th-morphgnt.txt", "1TH", "1 Thessalonians"),
    BookDescriptor::new(74, "74-2Th-morphgnt.txt", "2TH", "2 Thessalonians"),
    BookDescriptor::new(75, "75-1Ti-morphgnt.txt", "1TI", "1 Timothy"),
    BookDescriptor::new(76, "76-2Ti-morphgnt.txt", "2TI", "2 Timothy"),
    BookDescriptor::new(77, "77-Tit-morphgnt.txt", "TIT", "Titus"),
    BookDescriptor::new(78, "78-Phm-morphgnt.txt", "PHM", "Philemon"),
    BookDescriptor::new(79, "79-Heb-morphgnt.txt", "HEB", "Hebrews"),
    BookDescriptor::new(80, "80-Jas-morphgnt.txt", "JAS", "James"),
    BookDescriptor::new(81, "81-1Pe-morphgnt.txt", "1PE", "1 Peter"),
    BookDescriptor::new(82, "82-2Pe-morphgnt.txt", "2PE", "2 Peter"),
    BookDescriptor::new(83, "83-1Jn-morphgnt.txt", "1JN", "1 John"),
    BookDescriptor::new(84, "84-2Jn-morphgnt.txt", "2JN", "2 John"),
    BookDescriptor::new(85, "85-3Jn-morphgnt.txt", "3JN", "3 John"),
    BookDescriptor::new(86, "86-Jud-morphgnt.txt", "JUD", "Jude"),
    BookDescriptor::new(87, "87-Re-morphgnt.txt", "REV", "Revelation"),
];

/// Look up a book by its three-letter code (case-insensitive).
pub fn find_book(code: &str) -> Option<&'static BookDescriptor> {
    SBLGNT_BOOKS
        .iter()
        .find(|b| b.code.eq_ignore_ascii_case(code))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_is_complete_and_ordered() {
        assert_eq!(SBLGNT_BOOKS.len(), 27);
        assert_eq!(SBLGNT_BOOKS[0].name, "Matthew");
        assert_eq!(SBLGNT_BOOKS[26].name, "Revelation");
        assert!(SBLGNT_BOOKS.windows(2).all(|w| w[0].id + 1 == w[1].id));
    }

    #[test]
    fn codes_are_unique_three_letter_keys() {
        let codes: HashSet<&str> = SBLGNT_BOOKS.iter().map(|b| b.code).collect();
        assert_eq!(codes.len(), SBLGNT_BOOKS.len());
        assert!(SBLGNT_BOOKS.iter().all(|b| b.code.len() == 3));
    }

    #[test]
    fn source_names_carry_book_id() {
        for book in SBLGNT_BOOKS {
            assert!(book.source.starts_with(&book.id.to_string()), "{}", book.source);
        }
    }

    #[test]
    fn find_book_by_code() {
        assert_eq!(find_book("jhn").map(|b| b.name), Some("John"));
        assert_eq!(find_book("1CO").map(|b| b.id), Some(67));
        assert!(find_book("XYZ").is_none());
    }
}
