// src/config/mod.rs
pub mod consts;
pub mod leagues;
pub mod options;
pub mod state;
