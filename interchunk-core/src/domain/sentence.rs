//! Sentence record extraction
//!
//! A sentence is an open-tag line `<Sentence id=...>`, one or more body
//! lines, and the literal close line `</Sentence>`. The body is the
//! shortest span between a sentence's own open and close tags.

use std::borrow::Cow;

/// Opening delimiter of a sentence header
pub const SENTENCE_OPEN: &str = "<Sentence id=";
/// Closing delimiter line of a sentence
pub const SENTENCE_CLOSE: &str = "</Sentence>";

/// One delimited sentence, borrowed from the document text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SentenceRecord<'a> {
    /// Header line, verbatim
    pub header: &'a str,
    /// Token lines between header and footer
    pub body: &'a str,
    /// Footer line, always `</Sentence>`
    pub footer: &'a str,
}

impl<'a> SentenceRecord<'a> {
    /// Header with double quotes rewritten as single quotes
    pub fn normalized_header(&self) -> Cow<'a, str> {
        if self.header.contains('"') {
            Cow::Owned(self.header.replace('"', "'"))
        } else {
            Cow::Borrowed(self.header)
        }
    }

    /// Body lines with any trailing carriage return removed
    pub fn lines(&self) -> impl Iterator<Item = &'a str> {
        self.body
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
    }
}

/// Single-pass iterator over the sentences of a document
#[derive(Debug, Clone)]
pub struct SentenceExtractor<'a> {
    text: &'a str,
    cursor: usize,
}

impl<'a> SentenceExtractor<'a> {
    /// Start scanning a document
    pub fn new(text: &'a str) -> Self {
        Self { text, cursor: 0 }
    }

    /// End of the header line: the first `>` followed by a line break.
    /// Returns (index just past `>`, index of the first body byte).
    fn header_end(&self, from: usize) -> Option<(usize, usize)> {
        let bytes = self.text.as_bytes();
        let mut search = from;
        while let Some(offset) = self.text[search..].find('>') {
            let gt = search + offset;
            match (bytes.get(gt + 1), bytes.get(gt + 2)) {
                (Some(b'\n'), _) => return Some((gt + 1, gt + 2)),
                (Some(b'\r'), Some(b'\n')) => return Some((gt + 1, gt + 3)),
                _ => search = gt + 1,
            }
        }
        None
    }
}

impl<'a> Iterator for SentenceExtractor<'a> {
    type Item = SentenceRecord<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let text = self.text;

        let open = self.cursor + text[self.cursor..].find(SENTENCE_OPEN)?;
        let (header_end, body_start) = self.header_end(open + SENTENCE_OPEN.len())?;

        let close_marker = "\n</Sentence>";
        // The line break ending the header may double as the one before the
        // footer when the body is empty.
        let close = (body_start - 1) + text[body_start - 1..].find(close_marker)?;
        let body_end = close.max(body_start);
        let footer_start = close + 1;
        let footer_end = footer_start + SENTENCE_CLOSE.len();

        self.cursor = footer_end;

        let body = &text[body_start..body_end];
        Some(SentenceRecord {
            header: &text[open..header_end],
            body: body.strip_suffix('\r').unwrap_or(body),
            footer: &text[footer_start..footer_end],
        })
    }
}

/// Collect every sentence of a document, in document order
pub fn extract_sentences(text: &str) -> Vec<SentenceRecord<'_>> {
    SentenceExtractor::new(text).collect()
}
