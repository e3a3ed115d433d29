// src/gui/components/status_line.rs
use eframe::egui::{self, Color32, RichText};

use crate::gui::{app::App, progress::Status};

const OK_GREEN: Color32 = Color32::from_rgb(0x2E, 0x9E, 0x4F);
const ERR_RED: Color32 = Color32::from_rgb(0xDC, 0x61, 0x49);

pub fn draw(ui: &mut egui::Ui, app: &App) {
    match &app.status {
        Status::Idle => {}
        Status::Busy(msg) => {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label(msg.as_str());
            });
        }
        Status::Fetched => {
            ui.label(RichText::new("Data fetched successfully!").color(OK_GREEN));
        }
        Status::Failed(msg) => {
            ui.label(RichText::new(msg.as_str()).color(ERR_RED));
            ui.label(RichText::new("Failed to fetch data. Please try again.").color(ERR_RED));
        }
    }
}
