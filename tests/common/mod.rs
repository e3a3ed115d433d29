// tests/common/mod.rs
#![allow(dead_code)]

use std::cell::{Cell, RefCell};

use fbref_dash::core::net::{Fetch, NetError};
use reqwest::StatusCode;

pub const STANDINGS_HTML: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/standings.html"));
pub const FIXTURES_HTML: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/fixtures.html"));
pub const NO_TABLES_HTML: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/no_tables.html"));

pub enum Reply {
    Body(String),
    NotFound,
    Status(u16),
}

/// Canned `Fetch` that counts calls and remembers URLs.
pub struct FakeFetch {
    reply: Reply,
    calls: Cell<usize>,
    urls: RefCell<Vec<String>>,
}

impl FakeFetch {
    pub fn new(reply: Reply) -> Self {
        Self { reply, calls: Cell::new(0), urls: RefCell::new(Vec::new()) }
    }

    pub fn body(doc: &str) -> Self {
        Self::new(Reply::Body(doc.to_string()))
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    pub fn urls(&self) -> Vec<String> {
        self.urls.borrow().clone()
    }
}

impl Fetch for FakeFetch {
    fn get(&self, url: &str) -> Result<String, NetError> {
        self.calls.set(self.calls.get() + 1);
        self.urls.borrow_mut().push(url.to_string());
        match &self.reply {
            Reply::Body(b) => Ok(b.clone()),
            Reply::NotFound => Err(NetError::NotFound(url.to_string())),
            Reply::Status(code) => Err(NetError::Status {
                status: StatusCode::from_u16(*code).unwrap(),
                url: url.to_string(),
            }),
        }
    }
}
