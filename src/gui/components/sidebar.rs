// src/gui/components/sidebar.rs
//
// Renders the "Filters" panel and applies selection changes directly to `app`.
// Any change queues a new request; the pipeline cache decides whether it hits
// the network.

use eframe::egui;

use crate::{
    config::{
        consts::DATA_SOURCE_NOTE,
        leagues,
        options::{DocumentKind, Season},
    },
    gui::{actions, app::App},
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Filters");
    ui.add_space(4.0);

    let before = app.state.options.query;
    let query = &mut app.state.options.query;

    ui.label("Select League");
    egui::ComboBox::from_id_salt("league")
        .selected_text(query.competition.name)
        .width(ui.available_width())
        .show_ui(ui, |ui| {
            for c in leagues::all() {
                ui.selectable_value(&mut query.competition, *c, c.name);
            }
        });

    ui.add_space(4.0);
    ui.label("Select Season");
    egui::ComboBox::from_id_salt("season")
        .selected_text(query.season.to_string())
        .width(ui.available_width())
        .show_ui(ui, |ui| {
            for s in Season::available() {
                ui.selectable_value(&mut query.season, s, s.to_string());
            }
        });

    ui.add_space(4.0);
    ui.label("Select Data Type");
    egui::ComboBox::from_id_salt("kind")
        .selected_text(query.kind.label())
        .width(ui.available_width())
        .show_ui(ui, |ui| {
            for k in DocumentKind::ALL {
                ui.selectable_value(&mut query.kind, k, k.label());
            }
        });

    if app.state.options.query != before {
        logf!("UI: Selection → {}", app.state.options.query.heading());
        actions::request(app);
    }

    ui.separator();
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(DATA_SOURCE_NOTE);
    });
}
