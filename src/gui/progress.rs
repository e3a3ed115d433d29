// src/gui/progress.rs
use crate::progress::Progress;

/// What the status line above the table shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Status {
    Idle,
    Busy(String),
    Fetched,
    Failed(String),
}

/// Routes pipeline progress into the app's status line.
pub struct GuiProgress<'a> {
    status: &'a mut Status,
}

impl<'a> GuiProgress<'a> {
    pub fn new(status: &'a mut Status) -> Self {
        Self { status }
    }
}

impl Progress for GuiProgress<'_> {
    fn log(&mut self, msg: &str) {
        *self.status = Status::Busy(s!(msg));
    }
    fn finish(&mut self, ok: bool) {
        // failures carry the error text; the caller fills that in
        if ok {
            *self.status = Status::Fetched;
        }
    }
}
