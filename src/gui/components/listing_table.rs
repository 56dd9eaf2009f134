// src/gui/components/listing_table.rs
//
// The plotted listings as rows; selection runs both ways. Clicking a
// row selects the listing, clicking a chart point scrolls its row into
// view.

use eframe::egui::{self, Align, RichText, Sense};
use egui_extras::{Column, TableBuilder};

use crate::gui::{app::App, color32};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let Some(chart) = app.chart.as_ref() else {
        ui.label("No listings loaded.");
        return;
    };

    let selected = app.selected;
    let mut clicked_row = None;

    let mut table = TableBuilder::new(ui)
        .striped(true)
        .sense(Sense::click())
        .column(Column::remainder().at_least(180.0).clip(true))
        .column(Column::auto().at_least(70.0))
        .column(Column::auto().at_least(70.0))
        .column(Column::auto().at_least(50.0))
        .column(Column::auto().at_least(40.0));

    if let Some(ix) = app.scroll_to.take() {
        table = table.scroll_to_row(ix, Some(Align::Center));
    }

    table
        .header(24.0, |mut header| {
            for title in ["Title", "Price", "Mileage", "Year", "Age"] {
                header.col(|ui| {
                    ui.label(RichText::new(title).strong());
                });
            }
        })
        .body(|body| {
            body.rows(20.0, chart.len(), |mut row| {
                let ix = row.index();
                let Some(l) = chart.listing(ix) else { return };
                row.set_selected(selected == Some(ix));

                row.col(|ui| {
                    ui.label(l.title().unwrap_or("(untitled)"));
                });
                row.col(|ui| {
                    ui.label(l.price().to_string());
                });
                row.col(|ui| {
                    ui.label(l.mileage().to_string());
                });
                row.col(|ui| {
                    ui.label(l.year().to_string());
                });
                row.col(|ui| {
                    // The point color doubles as the age swatch.
                    ui.label(RichText::new(l.age().to_string()).color(color32(l.color())).strong());
                });

                if row.response().clicked() {
                    clicked_row = Some(ix);
                }
            });
        });

    if let Some(ix) = clicked_row {
        app.select_listing(ix);
    }
}
