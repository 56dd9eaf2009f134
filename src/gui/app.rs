// src/gui/app.rs
use std::{
    error::Error,
    sync::{Arc, Mutex},
};

use eframe::egui;

use crate::{
    chart::ChartSpec,
    config::state::AppState,
    doc::PageDoc,
    pipeline::ScanStats,
    specs::{self, SiteSpec},
};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Carplot",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::default())))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // last successful pass; replaced wholesale on reload
    pub doc: Option<PageDoc>,
    pub stats: Option<ScanStats>,
    pub age_range: Option<(i32, i32)>,
    pub chart: Option<ChartSpec>,

    // chart/table interaction
    pub hovered_point: Option<usize>,
    pub selected: Option<usize>,
    pub scroll_to: Option<usize>,

    // status/progress (the load path writes here)
    pub status: Arc<Mutex<String>>,
    pub running: bool,
}

impl App {
    pub fn new(state: AppState) -> Self {
        logf!("Init: site={}", state.options.scan.site);

        Self {
            state,
            doc: None,
            stats: None,
            age_range: None,
            chart: None,
            hovered_point: None,
            selected: None,
            scroll_to: None,
            status: Arc::new(Mutex::new(s!("Idle"))),
            running: false,
        }
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn site(&self) -> &'static SiteSpec {
        specs::by_name(&self.state.options.scan.site).unwrap_or_else(specs::default_site)
    }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        *self.status.lock().unwrap() = msg.into();
    }

    /// Select a listing: highlight its point, scroll its table row into
    /// view, surface where it sits in the page.
    pub fn select_listing(&mut self, ix: usize) {
        self.selected = Some(ix);
        self.scroll_to = Some(ix);

        let Some(chart) = &self.chart else { return };
        // same heading as the tooltip, untitled listings included
        if let (Some(l), Some(title)) = (chart.listing(ix), chart.tooltip_title(ix)) {
            self.status(format!(
                "Selected: {} (element {} in the page)",
                title,
                l.source().ix + 1
            ));
            logf!("UI: Selected listing ix={} element={}", ix, l.source().ix);
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("source")
            .resizable(false)
            .default_width(280.0)
            .show(ctx, |ui| {
                crate::gui::components::source_panel::draw(ui, self);
            });

        egui::TopBottomPanel::bottom("listings")
            .resizable(true)
            .default_height(220.0)
            .show(ctx, |ui| {
                crate::gui::components::listing_table::draw(ui, self);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            crate::gui::components::chart_panel::draw(ui, self);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::doc::PageDoc;
    use crate::{chart, pipeline};

    fn untitled_chart() -> ChartSpec {
        let page = r#"<html><body>
            <article class="styled__Article-sc-1 a">
              <p class="Price__StyledPrice-sc-1">30 000 kr</p>
              <ul>
                <li class="ParametersList__ListItem-sc-1">2020</li>
                <li class="ParametersList__ListItem-sc-1">El</li>
                <li class="ParametersList__ListItem-sc-1">3 000 km</li>
              </ul>
            </article>
        </body></html>"#;
        let set = pipeline::run(&PageDoc::parse(s!(page)), specs::default_site(), 2024);
        chart::bind(set.listings).unwrap()
    }

    #[test]
    fn selection_status_uses_the_tooltip_heading() {
        let mut app = App::new(AppState::default());
        app.chart = Some(untitled_chart());

        app.select_listing(0);

        assert_eq!(app.selected, Some(0));
        assert_eq!(app.scroll_to, Some(0));
        let status = app.status.lock().unwrap().clone();
        assert!(status.contains("Listing 1"), "status was: {status}");
    }
}
