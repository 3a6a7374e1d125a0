//! Page assembly and whitespace normalization for extracted document text.
//!
//! Upstream converters hand us either a list of page texts or one string whose
//! pages are separated by form feeds. Both end up as a [`TextBlob`]: the text with
//! `\n[[[PAGE n]]]\n` markers and the byte offset of every marker.

use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, info};
use unicode_normalization::UnicodeNormalization;

use crate::pages::PageOffsets;

/// Pseudo-page size used when the extracted text carries no form feeds.
pub const DEFAULT_PAGE_CHUNK_CHARS: usize = 8000;

lazy_static! {
    // Any whitespace run that does not contain a newline
    static ref INLINE_SPACE: Regex = Regex::new(r"[^\S\n]+").unwrap();
    static ref PAGE_MARKER: Regex = Regex::new(r"\n\[\[\[PAGE (\d+)\]\]\]\n").unwrap();
}

/// Render the marker that opens page `page` (1-based).
pub fn page_marker(page: usize) -> String {
    format!("\n[[[PAGE {}]]]\n", page)
}

/// Collapse runs of non-newline whitespace to a single space. Newlines survive so
/// line-anchored rules still see line structure.
pub fn collapse_inline_whitespace(text: &str) -> String {
    INLINE_SPACE.replace_all(text, " ").into_owned()
}

/// Collapse every whitespace run, newlines included, and trim.
pub fn clean_spaces(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Compose decomposed diacritics (e.g. `a` + U+0303) into their precomposed forms.
pub fn compose(text: &str) -> String {
    text.nfc().collect()
}

/// Split converter output into pages. Form feeds delimit pages; without them the
/// text is cut into pseudo-pages of `chunk_chars` characters.
pub fn split_pages(text: &str, chunk_chars: usize) -> Vec<String> {
    let pages: Vec<&str> = text.split('\u{c}').collect();
    if pages.len() > 1 {
        return pages.into_iter().map(str::to_string).collect();
    }
    if text.is_empty() || chunk_chars == 0 {
        return vec![text.to_string()];
    }

    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut count = 0;
    for c in text.chars() {
        current.push(c);
        count += 1;
        if count == chunk_chars {
            chunks.push(std::mem::take(&mut current));
            count = 0;
        }
    }
    if !current.is_empty() {
        chunks.push(current);
    }
    chunks
}

/// Immutable page-marked text plus the offsets of its page markers.
#[derive(Debug, Clone, Default)]
pub struct TextBlob {
    text: String,
    offsets: PageOffsets,
}

impl TextBlob {
    /// Build a blob from per-page texts. Each page is composed and whitespace-collapsed
    /// before its marker offset is recorded, so offsets match the final text exactly.
    pub fn from_pages<S: AsRef<str>>(pages: &[S]) -> Self {
        let mut text = String::new();
        let mut offsets = PageOffsets::default();

        for (i, page) in pages.iter().enumerate() {
            offsets.push(text.len());
            text.push_str(&page_marker(i + 1));
            text.push_str(&collapse_inline_whitespace(&compose(page.as_ref())));
        }

        info!(pages = offsets.len(), bytes = text.len(), "Assembled page-marked text");
        Self { text, offsets }
    }

    /// Adopt text that already carries page markers. The text is normalized first and
    /// the markers are located afterwards.
    pub fn from_marked(marked: &str) -> Self {
        let text = collapse_inline_whitespace(&compose(marked));
        let offsets = PageOffsets::new(PAGE_MARKER.find_iter(&text).map(|m| m.start()).collect());
        debug!(pages = offsets.len(), "Located page markers");
        Self { text, offsets }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn offsets(&self) -> &PageOffsets {
        &self.offsets
    }

    pub fn page_count(&self) -> usize {
        self.offsets.len()
    }

    pub fn page_of(&self, offset: usize) -> usize {
        self.offsets.page_of(offset)
    }

    /// True when the blob holds nothing but page markers and whitespace.
    pub fn is_empty_text(&self) -> bool {
        PAGE_MARKER.replace_all(&self.text, "").trim().is_empty()
    }
}
