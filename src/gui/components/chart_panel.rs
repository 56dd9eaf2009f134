// src/gui/components/chart_panel.rs
//
// The scatter chart: mileage across, price up, one point per listing,
// colored by age. Hover raises the point and shows its tooltip; click
// selects the listing in the table below.

use eframe::egui::{self, RichText};
use egui_plot::{Plot, PlotPoint, PlotPoints, Points};

use crate::config::consts::{HIT_RADIUS_PX, POINT_RADIUS, POINT_RADIUS_HOVER};
use crate::gui::{app::App, color32};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let Some(chart) = app.chart.as_ref() else {
        ui.centered_and_justified(|ui| {
            ui.label("Load a listings page to plot it.");
        });
        return;
    };

    let hovered = app.hovered_point;
    let x = chart.x_bounds();
    let y = chart.y_bounds();

    // Fixed frame: the padded bounds are the whole view.
    let plot = Plot::new("price_vs_mileage")
        .x_axis_label("Driven Kilometers")
        .y_axis_label("Price")
        .include_x(x.min)
        .include_x(x.max)
        .include_y(y.min)
        .include_y(y.max)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .show_x(false)
        .show_y(false);

    let response = plot.show(ui, |plot_ui| {
        // One item per listing so every point keeps its own color.
        for (ix, (p, c)) in chart.points().iter().zip(chart.colors()).enumerate() {
            let radius = if hovered == Some(ix) { POINT_RADIUS_HOVER } else { POINT_RADIUS };
            plot_ui.points(
                Points::new("", PlotPoints::from(vec![*p]))
                    .color(color32(*c))
                    .radius(radius),
            );
        }
    });

    // Nearest point within HIT_RADIUS_PX of the pointer, in screen space.
    let mut hit = None;
    if let Some(pointer) = response.response.hover_pos() {
        let mut best = HIT_RADIUS_PX;
        for (ix, p) in chart.points().iter().enumerate() {
            let pos = response
                .transform
                .position_from_point(&PlotPoint::new(p[0], p[1]));
            let d = pos.distance(pointer);
            if d <= best {
                best = d;
                hit = Some(ix);
            }
        }
    }

    // clicked() has to be read before the hover call consumes the response
    let clicked = response.response.clicked();

    if let Some(ix) = hit {
        let title = chart.tooltip_title(ix);
        let body = chart.tooltip_body(ix);
        response.response.on_hover_ui_at_pointer(|ui| {
            if let Some(t) = title {
                ui.label(RichText::new(t).strong());
            }
            if let Some(lines) = body {
                for line in lines {
                    ui.label(line);
                }
            }
        });
    }

    app.hovered_point = hit;
    if clicked {
        if let Some(ix) = hit {
            app.select_listing(ix);
        }
    }
}
