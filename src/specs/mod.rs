// src/specs/mod.rs
//! # Site specs
//!
//! This module hosts the **per-site extraction specifications**: where
//! the ground truth lives in each supported site's listing markup.
//!
//! ## What lives here
//! - The **class marker** identifying one listing element.
//! - A **field locator** per extracted field (title, price, mileage,
//!   model year): a class-marker substring plus which match to take.
//!
//! ## What does **not** live here
//! - **Scanning mechanics** – `core::html` does the tag matching.
//! - **Parsing/filtering** – `core::parse` and `pipeline` own those.
//! - **GUI concerns or output formatting.**
//!
//! Generated (styled-components) class names carry an unstable hash
//! suffix, so markers are stable prefixes, never full class names.
//! Everything site-shaped stays in this module; the rest of the
//! pipeline is agnostic to how a site structures its pages.

pub mod blocket;

/// Where a field lives inside a listing block: a class-marker substring
/// matched against open tags, plus which match to take (1-based).
#[derive(Clone, Copy, Debug)]
pub struct FieldLocator {
    pub marker: &'static str,
    pub nth: usize,
}

#[derive(Clone, Copy, Debug)]
pub struct SiteSpec {
    pub name: &'static str,
    pub host: &'static str,
    /// Marks one listing element.
    pub listing_marker: &'static str,
    pub title: FieldLocator,
    pub price: FieldLocator,
    pub mileage: FieldLocator,
    pub year: FieldLocator,
}

pub fn all() -> &'static [SiteSpec] {
    std::slice::from_ref(&blocket::BLOCKET)
}

pub fn by_name(name: &str) -> Option<&'static SiteSpec> {
    all().iter().find(|s| s.name.eq_ignore_ascii_case(name))
}

pub fn default_site() -> &'static SiteSpec {
    &blocket::BLOCKET
}
