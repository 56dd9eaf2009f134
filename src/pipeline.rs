// src/pipeline.rs
//
// One extraction pass over a loaded page, in fixed order: enumerate
// listing elements, build candidates, apply the price floor, derive
// the age range from what survived, assign colors. Document order is
// preserved end to end.

use crate::color::age_color;
use crate::config::consts::PRICE_FLOOR;
use crate::doc::PageDoc;
use crate::listing::{Listing, build_candidate};
use crate::specs::SiteSpec;

/// Counts from one extraction pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScanStats {
    /// Listing elements found in the page.
    pub scanned: usize,
    /// Dropped: a required field was missing or unparseable.
    pub incomplete: usize,
    /// Dropped: price at or below the floor.
    pub priced_out: usize,
}

impl ScanStats {
    pub fn kept(&self) -> usize {
        self.scanned - self.incomplete - self.priced_out
    }
}

/// Result of one pass: colored listings in document order, the age
/// range they were colored against, and the counts. An empty pass is a
/// normal outcome and carries no age range.
pub struct ListingSet {
    pub listings: Vec<Listing>,
    pub age_range: Option<(i32, i32)>,
    pub stats: ScanStats,
}

pub fn run(doc: &PageDoc, site: &SiteSpec, current_year: i32) -> ListingSet {
    let blocks = doc.listing_blocks(site);
    let mut stats = ScanStats { scanned: blocks.len(), ..ScanStats::default() };

    let mut kept = Vec::new();
    for block in &blocks {
        let Some(c) = build_candidate(block, site, current_year) else {
            stats.incomplete += 1;
            continue;
        };
        if c.price <= PRICE_FLOOR {
            stats.priced_out += 1;
            continue;
        }
        kept.push(c);
    }

    // Nothing survived: report emptiness before any range math.
    if kept.is_empty() {
        return ListingSet { listings: Vec::new(), age_range: None, stats };
    }

    // Age range over the kept set only. A cheap outlier that was
    // filtered out must not stretch the gradient.
    let (min_age, max_age) = kept
        .iter()
        .fold((i32::MAX, i32::MIN), |(lo, hi), c| (lo.min(c.age), hi.max(c.age)));

    let listings = kept
        .into_iter()
        .map(|c| {
            let color = age_color(c.age, min_age, max_age);
            c.colored(color)
        })
        .collect();

    ListingSet { listings, age_range: Some((min_age, max_age)), stats }
}
