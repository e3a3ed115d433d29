// src/gui/components/data_table.rs
//
// Draws the normalized table. Purely a view over `app.table`.

use eframe::egui::{self, Align, Layout, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::gui::app::App;

const ROW_H: f32 = 20.0;
const MAX_TABLE_H: f32 = 420.0;

pub fn draw(ui: &mut egui::Ui, app: &App) {
    let Some(table) = app.table.as_ref() else { return };

    let headers = table.headers();
    let rows = table.rows();
    let numeric = table.numeric_columns();
    let kind = table.kind();

    // Ensure scroll bars allocate space (not floating over content)
    {
        let s = &mut ui.style_mut().spacing.scroll;
        s.floating = false;
        s.bar_width = 10.0;
        s.handle_min_length = 48.0;
    }

    egui::ScrollArea::horizontal()
        .id_salt("table_hscroll")
        .show(ui, |ui| {
            let mut builder = TableBuilder::new(ui)
                .id_salt(("normalized_table", kind))
                .striped(true)
                .resizable(true)
                .max_scroll_height(MAX_TABLE_H)
                .min_scrolled_height(0.0);
            for ci in 0..headers.len() {
                let col = if numeric.contains(&ci) {
                    Column::auto().at_least(48.0)
                } else {
                    Column::auto().at_least(120.0).clip(true)
                };
                builder = builder.column(col);
            }

            builder
                .header(24.0, |mut header| {
                    for (ci, h) in headers.iter().enumerate() {
                        header.col(|ui| {
                            ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                            let label = RichText::new(h.as_str()).strong();
                            if numeric.contains(&ci) {
                                ui.centered_and_justified(|ui| { ui.label(label); });
                            } else {
                                ui.with_layout(Layout::left_to_right(Align::Center), |ui| { ui.label(label); });
                            }
                        });
                    }
                })
                .body(|body| {
                    body.rows(ROW_H, rows.len(), |mut row| {
                        let Some(cells) = rows.get(row.index()) else { return };
                        for (ci, cell) in cells.iter().enumerate() {
                            row.col(|ui| {
                                ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                                if numeric.contains(&ci) {
                                    ui.centered_and_justified(|ui| { ui.label(cell.as_str()); });
                                } else {
                                    ui.with_layout(Layout::left_to_right(Align::Center), |ui| { ui.label(cell.as_str()); });
                                }
                            });
                        }
                    });
                });
        });

    if table.is_empty() {
        ui.label("The table has no rows.");
    }
}
