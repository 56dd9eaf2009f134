// src/doc.rs
//
// The loaded results page and its listing elements. PageDoc owns the
// raw source; records refer back into it only through SourceRef, a
// lookup relation that degrades to absence when it no longer resolves.

use crate::core::html;
use crate::core::sanitize::normalize_entities;
use crate::specs::{FieldLocator, SiteSpec};

/// Weak back-reference from a record to its listing element:
/// document-order index plus the element's byte span in the source.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SourceRef {
    pub ix: usize,
    start: usize,
    end: usize,
}

#[derive(Debug)]
pub struct PageDoc {
    text: String,
}

impl PageDoc {
    pub fn parse(text: String) -> Self {
        Self { text }
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// All listing elements, in document order. An element whose close
    /// tag never appears ends the scan; everything before it is kept.
    pub fn listing_blocks(&self, site: &SiteSpec) -> Vec<ListingBlock<'_>> {
        let mut out = Vec::new();
        let mut pos = 0usize;
        while let Some((start, open_end)) = html::next_marked_tag(&self.text, site.listing_marker, pos) {
            let Some((inner_end, end)) = html::element_end(&self.text, start, open_end) else {
                break;
            };
            out.push(ListingBlock {
                ix: out.len(),
                start,
                end,
                inner: &self.text[open_end..inner_end],
            });
            pos = end;
        }
        out
    }

    /// Resolve a back-reference to the element's raw source.
    /// Stale or out-of-range refs resolve to None, never a panic.
    pub fn slice(&self, r: SourceRef) -> Option<&str> {
        self.text.get(r.start..r.end)
    }
}

/// One listing element: an opaque handle over its slice of the page.
pub struct ListingBlock<'a> {
    ix: usize,
    start: usize,
    end: usize,
    inner: &'a str,
}

impl ListingBlock<'_> {
    /// Text of the locator's nth matching descendant, entity-normalized,
    /// tag-stripped and whitespace-collapsed. Absence (no match, or a
    /// match with no text) is a normal outcome.
    pub fn text(&self, loc: &FieldLocator) -> Option<String> {
        let mut pos = 0usize;
        let mut seen = 0usize;
        while let Some((start, open_end)) = html::next_marked_tag(self.inner, loc.marker, pos) {
            seen += 1;
            if seen == loc.nth {
                let (inner_end, _) = html::element_end(self.inner, start, open_end)?;
                let text = html::strip_tags(normalize_entities(&self.inner[open_end..inner_end]));
                return if text.is_empty() { None } else { Some(text) };
            }
            pos = open_end;
        }
        None
    }

    pub fn source_ref(&self) -> SourceRef {
        SourceRef { ix: self.ix, start: self.start, end: self.end }
    }
}
