// src/specs/blocket.rs
//! Extraction spec for blocket.se car search results.
//!
//! One listing is a `styled__Article-…` element. Inside it:
//! - title: the `Title__StyledTitle-…` element;
//! - price: the `Price__StyledPrice-…` element;
//! - parameter list items (`ParametersList__ListItem-…`): the 1st is
//!   the model year, the 3rd the mileage band ("10 000 - 15 000").

use super::{FieldLocator, SiteSpec};

pub static BLOCKET: SiteSpec = SiteSpec {
    name: "blocket",
    host: "www.blocket.se",
    listing_marker: "styled__Article",
    title: FieldLocator { marker: "Title__StyledTitle", nth: 1 },
    price: FieldLocator { marker: "Price__StyledPrice", nth: 1 },
    year: FieldLocator { marker: "ParametersList__ListItem", nth: 1 },
    mileage: FieldLocator { marker: "ParametersList__ListItem", nth: 3 },
};
