// src/gui/app.rs
use std::error::Error;

use eframe::egui;

use crate::{
    charts::{self, BarChart},
    config::{consts::APP_TITLE, options::Query, state::AppState},
    core::net::HttpFetcher,
    data::NormalizedTable,
    scrape::Pipeline,
};

use super::{actions, components, progress::Status};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::default())))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    /// `Err` holds the reason the HTTP client could not be built.
    pub pipeline: Result<Pipeline<HttpFetcher>, String>,

    // result of the last request, and the query it answered
    pub table: Option<NormalizedTable>,
    pub shown: Query,
    pub bars: Option<BarChart>,

    pub status: Status,
    /// Set by selection changes; the request runs on the next frame so the
    /// "Fetching data..." line gets painted first.
    pub pending: bool,
    pub armed: bool,

    // output text field UX (we map this <-> ExportOptions)
    pub out_path_text: String,
    pub out_path_dirty: bool,
    pub note: Option<String>,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let pipeline = HttpFetcher::new()
            .map(Pipeline::new)
            .map_err(|e| e.to_string());
        if let Err(e) = &pipeline {
            loge!("Init: HTTP client unavailable: {}", e);
        }

        let shown = state.options.query;
        let out_path_text = state.options.export.out_path(&shown).to_string_lossy().into_owned();

        logf!("Init: {}", shown.heading());

        let mut app = Self {
            state,
            pipeline,
            table: None,
            shown,
            bars: None,
            status: Status::Idle,
            pending: false,
            armed: false,
            out_path_text,
            out_path_dirty: false,
            note: None,
        };
        // the page shows data for the default selection right away
        actions::request(&mut app);
        app
    }

    /// Swap in a new request result; derived views follow.
    pub fn set_table(&mut self, query: Query, table: Option<NormalizedTable>) {
        self.bars = table.as_ref().and_then(|t| t.standings()).map(charts::bar_chart);
        self.state.gui.reset_comparison();
        self.shown = query;
        self.table = table;
        if !self.out_path_dirty {
            self.out_path_text = self.state.options.export.out_path(&query).to_string_lossy().into_owned();
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        actions::run_pending(self, ctx);

        egui::SidePanel::left("filters")
            .resizable(false)
            .default_width(220.0)
            .show(ctx, |ui| {
                components::sidebar::draw(ui, self);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(APP_TITLE);
            components::status_line::draw(ui, self);

            if self.table.is_none() {
                return;
            }

            egui::ScrollArea::vertical()
                .id_salt("page_scroll")
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    ui.add_space(6.0);
                    ui.heading(self.shown.heading());
                    components::export_bar::draw(ui, self);
                    ui.separator();
                    components::data_table::draw(ui, self);
                    components::charts::draw(ui, self);
                });
        });
    }
}
