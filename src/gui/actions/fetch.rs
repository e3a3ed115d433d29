// src/gui/actions/fetch.rs
use eframe::egui;

use crate::{
    error::PipelineError,
    gui::{app::App, progress::{GuiProgress, Status}},
};

/// Selection changed: queue a request for the current query.
pub fn request(app: &mut App) {
    logd!("UI: request queued for {}", app.state.options.query.heading());
    app.pending = true;
    app.armed = false;
    app.note = None;
    app.status = Status::Busy(s!("Fetching data..."));
}

/// Runs a queued request, one frame after it was queued.
pub fn run_pending(app: &mut App, ctx: &egui::Context) {
    if !app.pending {
        return;
    }
    if !app.armed {
        app.armed = true;
        ctx.request_repaint();
        return;
    }
    app.pending = false;
    app.armed = false;

    let query = app.state.options.query;
    let res = match &mut app.pipeline {
        Ok(pipeline) => {
            let mut prog = GuiProgress::new(&mut app.status);
            pipeline.run(&query, Some(&mut prog))
        }
        Err(e) => Err(PipelineError::Fetch(e.clone())),
    };

    match res {
        Ok(table) => {
            app.status = Status::Fetched;
            app.set_table(query, Some(table));
        }
        Err(e) => {
            app.status = Status::Failed(e.to_string());
            app.set_table(query, None);
        }
    }
}
