// src/gui/actions/export.rs
use crate::{file, gui::app::App};

pub fn export(app: &mut App) {
    // normalize out_path first (mutates app) before any &app borrows
    if app.out_path_dirty {
        app.state.options.export.set_path(&app.out_path_text);
        logf!(
            "Export: Out path set → {}",
            app.state.options.export.out_path(&app.shown).display()
        );
        app.out_path_dirty = false;
    }

    let Some(table) = app.table.as_ref().filter(|t| !t.is_empty()) else {
        logd!("Export: Clicked, but there's nothing to export");
        app.note = Some(s!("Nothing to export"));
        return;
    };

    let msg = match file::export_table(&app.state.options.export, &app.shown, table) {
        Ok(path) => format!("Exported to {}", path.display()),
        Err(e) => {
            loge!("Export: Error: {}", e);
            format!("Export error: {e}")
        }
    };
    app.note = Some(msg);
}
