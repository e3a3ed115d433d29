// src/progress.rs
/// Lightweight progress reporting for a pipeline run.
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called once the request is answered, successful or not.
    fn finish(&mut self, _ok: bool) {}
}
