// src/chart.rs
//
// Binds a pass's listings to scatter-plot form: one point per listing
// (x = mileage, y = price), a color per point, and padded axis bounds.
// Point order is listing order, so an index into one is an index into
// all of them.

use crate::color::Hsl;
use crate::config::consts::{AXIS_PAD_HIGH, AXIS_PAD_LOW};
use crate::doc::SourceRef;
use crate::listing::Listing;

/// Inclusive axis range, already padded.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
}

impl Bounds {
    fn padded(min: f64, max: f64) -> Self {
        Bounds { min: min * AXIS_PAD_LOW, max: max * AXIS_PAD_HIGH }
    }
}

/// Everything a renderer needs for one chart. Immutable once bound;
/// a new pass binds a new spec.
#[derive(Debug)]
pub struct ChartSpec {
    listings: Vec<Listing>,
    points: Vec<[f64; 2]>,
    colors: Vec<Hsl>,
    x_bounds: Bounds,
    y_bounds: Bounds,
}

/// `None` when there is nothing to plot. Callers branch on that rather
/// than rendering an empty plot with degenerate bounds.
pub fn bind(listings: Vec<Listing>) -> Option<ChartSpec> {
    if listings.is_empty() {
        return None;
    }

    let points: Vec<[f64; 2]> = listings
        .iter()
        .map(|l| [f64::from(l.mileage()), f64::from(l.price())])
        .collect();
    let colors: Vec<Hsl> = listings.iter().map(|l| l.color()).collect();

    let (mut x_min, mut x_max) = (f64::INFINITY, f64::NEG_INFINITY);
    let (mut y_min, mut y_max) = (f64::INFINITY, f64::NEG_INFINITY);
    for p in &points {
        x_min = x_min.min(p[0]);
        x_max = x_max.max(p[0]);
        y_min = y_min.min(p[1]);
        y_max = y_max.max(p[1]);
    }

    Some(ChartSpec {
        listings,
        points,
        colors,
        x_bounds: Bounds::padded(x_min, x_max),
        y_bounds: Bounds::padded(y_min, y_max),
    })
}

impl ChartSpec {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    pub fn listing(&self, ix: usize) -> Option<&Listing> {
        self.listings.get(ix)
    }

    pub fn points(&self) -> &[[f64; 2]] {
        &self.points
    }

    pub fn colors(&self) -> &[Hsl] {
        &self.colors
    }

    pub fn x_bounds(&self) -> Bounds {
        self.x_bounds
    }

    pub fn y_bounds(&self) -> Bounds {
        self.y_bounds
    }

    /// Tooltip heading for a point. Untitled listings fall back to
    /// their 1-based position.
    pub fn tooltip_title(&self, ix: usize) -> Option<String> {
        let l = self.listings.get(ix)?;
        Some(match l.title() {
            Some(t) => s!(t),
            None => format!("Listing {}", ix + 1),
        })
    }

    /// Tooltip detail lines for a point.
    pub fn tooltip_body(&self, ix: usize) -> Option<[String; 3]> {
        let l = self.listings.get(ix)?;
        Some([
            format!("Price: {}", l.price()),
            format!("Driven Kilometers: {}", l.mileage()),
            format!("Year: {}", l.year()),
        ])
    }

    /// Where the point's listing sits in the loaded page.
    pub fn source_of(&self, ix: usize) -> Option<SourceRef> {
        self.listings.get(ix).map(|l| l.source())
    }
}
