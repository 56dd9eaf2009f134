// src/listing.rs

use crate::color::Hsl;
use crate::core::parse::{parse_price, parse_range_floor};
use crate::doc::{ListingBlock, SourceRef};
use crate::specs::SiteSpec;

/// A fully extracted listing, before color assignment. Color depends on
/// the age range of the whole plotted set, so it cannot be decided per
/// element; `colored` is the only way to finish the record.
#[derive(Clone, Debug)]
pub struct Candidate {
    pub title: Option<String>,
    pub price: u32,
    pub mileage: u32,
    pub year: i32,
    pub age: i32,
    pub source: SourceRef,
}

impl Candidate {
    pub fn colored(self, color: Hsl) -> Listing {
        Listing {
            title: self.title,
            price: self.price,
            mileage: self.mileage,
            year: self.year,
            age: self.age,
            color,
            source: self.source,
        }
    }
}

/// One plotted listing. Immutable once built; the color always matches
/// the age range it was finalized against.
#[derive(Clone, Debug)]
pub struct Listing {
    title: Option<String>,
    price: u32,
    mileage: u32,
    year: i32,
    age: i32,
    color: Hsl,
    source: SourceRef,
}

impl Listing {
    #[inline]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }
    #[inline]
    pub fn price(&self) -> u32 {
        self.price
    }
    #[inline]
    pub fn mileage(&self) -> u32 {
        self.mileage
    }
    #[inline]
    pub fn year(&self) -> i32 {
        self.year
    }
    #[inline]
    pub fn age(&self) -> i32 {
        self.age
    }
    #[inline]
    pub fn color(&self) -> Hsl {
        self.color
    }
    #[inline]
    pub fn source(&self) -> SourceRef {
        self.source
    }
}

/// Extract one candidate from a listing block. Price, mileage and year
/// are all required: a record without any of them cannot be plotted or
/// age-colored, so the element is skipped, silently. Title is optional.
pub fn build_candidate(
    block: &ListingBlock<'_>,
    site: &SiteSpec,
    current_year: i32,
) -> Option<Candidate> {
    let price = parse_price(&block.text(&site.price)?)?;
    let mileage = parse_range_floor(&block.text(&site.mileage)?)?;
    let year = i32::try_from(parse_range_floor(&block.text(&site.year)?)?).ok()?;
    let title = block.text(&site.title);

    Some(Candidate {
        title,
        price,
        mileage,
        year,
        age: current_year - year,
        source: block.source_ref(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::doc::PageDoc;
    use crate::specs;

    fn page(body: &str) -> PageDoc {
        PageDoc::parse(format!("<html><body>{body}</body></html>"))
    }

    const FULL: &str = r#"
        <article class="styled__Article-sc-1 a">
          <h2 class="Title__StyledTitle-sc-1">Audi A4 Avant</h2>
          <p class="Price__StyledPrice-sc-1">62 500 kr</p>
          <ul>
            <li class="ParametersList__ListItem-sc-1">2016</li>
            <li class="ParametersList__ListItem-sc-1">Diesel</li>
            <li class="ParametersList__ListItem-sc-1">12 000 - 12 499</li>
          </ul>
        </article>
    "#;

    #[test]
    fn full_block_builds_a_candidate() {
        let doc = page(FULL);
        let site = specs::default_site();
        let blocks = doc.listing_blocks(site);
        let c = build_candidate(&blocks[0], site, 2024).unwrap();

        assert_eq!(c.title.as_deref(), Some("Audi A4 Avant"));
        assert_eq!(c.price, 62_500);
        assert_eq!(c.mileage, 12_000);
        assert_eq!(c.year, 2016);
        assert_eq!(c.age, 8);
    }

    #[test]
    fn missing_price_skips_even_with_other_fields() {
        let doc = page(
            r#"<article class="styled__Article-sc-1 a">
                 <h2 class="Title__StyledTitle-sc-1">Opel</h2>
                 <ul>
                   <li class="ParametersList__ListItem-sc-1">2012</li>
                   <li class="ParametersList__ListItem-sc-1">Bensin</li>
                   <li class="ParametersList__ListItem-sc-1">9 000</li>
                 </ul>
               </article>"#,
        );
        let site = specs::default_site();
        let blocks = doc.listing_blocks(site);
        assert!(build_candidate(&blocks[0], site, 2024).is_none());
    }

    #[test]
    fn unparseable_year_skips() {
        let doc = page(
            r#"<article class="styled__Article-sc-1 a">
                 <p class="Price__StyledPrice-sc-1">15 000 kr</p>
                 <ul>
                   <li class="ParametersList__ListItem-sc-1">Nyskick</li>
                   <li class="ParametersList__ListItem-sc-1">Bensin</li>
                   <li class="ParametersList__ListItem-sc-1">5 000</li>
                 </ul>
               </article>"#,
        );
        let site = specs::default_site();
        let blocks = doc.listing_blocks(site);
        assert!(build_candidate(&blocks[0], site, 2024).is_none());
    }

    #[test]
    fn title_is_optional() {
        let doc = page(
            r#"<article class="styled__Article-sc-1 a">
                 <p class="Price__StyledPrice-sc-1">30 000 kr</p>
                 <ul>
                   <li class="ParametersList__ListItem-sc-1">2020</li>
                   <li class="ParametersList__ListItem-sc-1">El</li>
                   <li class="ParametersList__ListItem-sc-1">3 000</li>
                 </ul>
               </article>"#,
        );
        let site = specs::default_site();
        let blocks = doc.listing_blocks(site);
        let c = build_candidate(&blocks[0], site, 2024).unwrap();
        assert_eq!(c.title, None);
        assert_eq!(c.age, 4);
    }

    #[test]
    fn next_model_year_gives_negative_age() {
        let doc = page(
            r#"<article class="styled__Article-sc-1 a">
                 <p class="Price__StyledPrice-sc-1">450 000 kr</p>
                 <ul>
                   <li class="ParametersList__ListItem-sc-1">2025</li>
                   <li class="ParametersList__ListItem-sc-1">El</li>
                   <li class="ParametersList__ListItem-sc-1">0</li>
                 </ul>
               </article>"#,
        );
        let site = specs::default_site();
        let blocks = doc.listing_blocks(site);
        let c = build_candidate(&blocks[0], site, 2024).unwrap();
        assert_eq!(c.age, -1);
    }
}
