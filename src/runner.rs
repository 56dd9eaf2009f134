// src/runner.rs
use std::error::Error;
use std::fs;

use chrono::Datelike;

use crate::chart::{self, ChartSpec};
use crate::config::options::Source;
use crate::core::net;
use crate::doc::PageDoc;
use crate::pipeline::{self, ScanStats};
use crate::progress::Progress;
use crate::specs::SiteSpec;

/// Everything one pass produces. The document is kept alive so
/// frontends can show the source markup behind individual listings.
#[derive(Debug)]
pub struct RunOutput {
    pub doc: PageDoc,
    pub stats: ScanStats,
    pub age_range: Option<(i32, i32)>,
    pub chart: Option<ChartSpec>,
}

/// Year the age math runs against: an explicit override, otherwise the
/// local calendar year.
pub fn evaluation_year(option: Option<i32>) -> i32 {
    option.unwrap_or_else(|| chrono::Local::now().year())
}

/// Top-level runner: acquire the page, scan it, bind the chart.
/// A page that yields no listings is Ok; only acquisition fails here.
pub fn run(
    source: &Source,
    site: &SiteSpec,
    current_year: i32,
    progress: &mut dyn Progress,
) -> Result<RunOutput, Box<dyn Error>> {
    let text = match source {
        Source::File(path) => {
            progress.log(&format!("Reading {} ...", path.display()));
            fs::read_to_string(path)
                .map_err(|e| format!("Could not read {}: {}", path.display(), e))?
        }
        Source::Url(url) => {
            progress.log(&format!("Fetching {} ...", url));
            net::fetch(url)?
        }
    };

    let doc = PageDoc::parse(text);
    logf!("loaded {} bytes from {:?}", doc.len(), source);

    let set = pipeline::run(&doc, site, current_year);
    progress.log(&format!(
        "{} elements scanned, {} kept ({} incomplete, {} at or below {} kr).",
        set.stats.scanned,
        set.stats.kept(),
        set.stats.incomplete,
        set.stats.priced_out,
        crate::config::consts::PRICE_FLOOR,
    ));

    let output = RunOutput {
        stats: set.stats,
        age_range: set.age_range,
        chart: chart::bind(set.listings),
        doc,
    };
    progress.finish();
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_year_wins() {
        assert_eq!(evaluation_year(Some(1999)), 1999);
    }

    #[test]
    fn fallback_year_is_current() {
        assert!(evaluation_year(None) >= 2024);
    }
}
