// src/gui/actions/load.rs
use std::path::PathBuf;

use crate::{
    config::options::Source,
    gui::app::App,
    gui::progress::GuiProgress,
    runner,
};

/// URLs keep their scheme, anything else is a file path.
fn parse_source(text: &str) -> Option<Source> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    if text.starts_with("http://") || text.starts_with("https://") {
        Some(Source::Url(s!(text)))
    } else {
        Some(Source::File(PathBuf::from(text)))
    }
}

pub fn load(app: &mut App) {
    // Re-entry guard; the scan runs on the UI thread.
    if app.running {
        return;
    }

    let Some(source) = parse_source(&app.state.gui.source_text) else {
        app.status("Nothing to load; enter a file path or an http:// URL");
        return;
    };
    app.state.options.scan.source = Some(source.clone());

    let site = app.site();
    let year = runner::evaluation_year(app.state.options.scan.year);

    logf!("Load: Begin site={} source={:?}", site.name, source);
    app.running = true;

    let mut prog = GuiProgress::new(app.status.clone());

    // → This is where the pass happens ←
    let result = runner::run(&source, site, year, &mut prog);
    app.running = false;

    match result {
        Ok(output) => {
            logf!(
                "Load: OK scanned={} kept={} incomplete={} priced_out={}",
                output.stats.scanned,
                output.stats.kept(),
                output.stats.incomplete,
                output.stats.priced_out
            );

            // Wholesale replace; stale selection must not survive a reload.
            app.hovered_point = None;
            app.selected = None;
            app.scroll_to = None;

            app.stats = Some(output.stats);
            app.age_range = output.age_range;
            let n = output.chart.as_ref().map(|c| c.len()).unwrap_or(0);
            app.chart = output.chart;
            app.doc = Some(output.doc);

            if n == 0 {
                app.status("No listings above the price floor.");
            } else {
                app.status(format!("Plotted {} listings", n));
            }
        }
        Err(e) => {
            loge!("Load: Error: {}", e);
            app.status(format!("Error: {e}"));
        }
    }
}
