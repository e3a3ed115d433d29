// src/scrape/mod.rs
mod pipeline;

pub use pipeline::extract_table;
pub use pipeline::fetch_and_normalize;
pub use pipeline::Pipeline;
