// src/gui/actions/copy.rs
use eframe::egui;

use crate::{csv::table_to_string, gui::app::App};

pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    let Some(table) = app.table.as_ref().filter(|t| !t.is_empty()) else {
        app.note = Some(s!("Nothing to copy"));
        logd!("Copy: Clicked, but there's nothing to copy");
        return;
    };

    let export = &app.state.options.export;
    let txt = table_to_string(table, export.include_headers, export.format.delim());
    logf!(
        "Copy: {:?} rows={} headers={}",
        table.kind(),
        table.len(),
        export.include_headers
    );

    ui_ctx.copy_text(txt);
    app.note = Some(s!("Copied to clipboard"));
}
