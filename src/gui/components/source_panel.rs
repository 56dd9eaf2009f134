// src/gui/components/source_panel.rs
//
// Left panel: where the page comes from, the site layout to scan with,
// and the pass summary. Applies changes directly to `app`.

use eframe::egui;

use crate::gui::app::App;
use crate::specs;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Source");

    ui.add_space(4.0);
    ui.label("File path or http:// URL:");
    ui.add(
        egui::TextEdit::singleline(&mut app.state.gui.source_text)
            .font(egui::TextStyle::Monospace)
            .desired_width(f32::INFINITY),
    );

    ui.horizontal(|ui| {
        ui.label("Site:");
        let sites = specs::all();
        let mut ix = app.state.gui.site_ix.min(sites.len() - 1);
        egui::ComboBox::from_id_salt("site_picker")
            .selected_text(sites[ix].name)
            .show_ui(ui, |ui| {
                for (i, site) in sites.iter().enumerate() {
                    ui.selectable_value(&mut ix, i, site.name);
                }
            });
        if ix != app.state.gui.site_ix {
            app.state.gui.site_ix = ix;
            app.state.options.scan.site = s!(sites[ix].name);
            logf!("UI: Site → {}", sites[ix].name);
        }
    });

    ui.horizontal(|ui| {
        let load_clicked = ui
            .add_enabled(!app.running, egui::Button::new("Load"))
            .clicked();
        if load_clicked {
            crate::gui::actions::load(app);
        }

        if app.running {
            ui.add(egui::Spinner::new().size(16.0));
        }
    });

    let status = app.status.lock().unwrap().clone();
    ui.label(status);

    ui.separator();

    if let Some(stats) = app.stats {
        ui.label(format!("Elements scanned: {}", stats.scanned));
        ui.label(format!("Plotted: {}", stats.kept()));
        ui.label(format!("Incomplete: {}", stats.incomplete));
        ui.label(format!("Below price floor: {}", stats.priced_out));
        if let Some((lo, hi)) = app.age_range {
            ui.label(format!("Ages: {} to {} years", lo, hi));
        }
        ui.separator();
    }

    source_snippet(ui, app);
}

/// Source markup for the selected listing, clipped to a readable size.
fn source_snippet(ui: &mut egui::Ui, app: &App) {
    let (Some(doc), Some(chart), Some(sel)) = (&app.doc, &app.chart, app.selected) else {
        return;
    };
    let Some(src) = chart.source_of(sel) else { return };
    let Some(markup) = doc.slice(src) else {
        // Doc was replaced under the selection; nothing to show.
        return;
    };

    ui.label(egui::RichText::new("Listing markup").strong());

    let cut = snippet_cut(markup, 600);
    let mut text = s!(&markup[..cut]);
    if cut < markup.len() {
        text.push_str(" ...");
    }

    egui::ScrollArea::vertical()
        .id_salt("source_snippet_scroll")
        .max_height(160.0)
        .show(ui, |ui| {
            ui.add(egui::Label::new(
                egui::RichText::new(text).monospace().size(10.0),
            ));
        });
}

/// Largest char boundary at or below `max` bytes.
fn snippet_cut(s: &str, max: usize) -> usize {
    if s.len() <= max {
        return s.len();
    }
    let mut cut = max;
    while cut > 0 && !s.is_char_boundary(cut) {
        cut -= 1;
    }
    cut
}
