// src/config/consts.rs

// Net config
pub const BASE_URL: &str = "https://fbref.com/en/comps";
pub const USER_AGENT: &str = concat!("fbref_dash/", env!("CARGO_PKG_VERSION"));

// In-memory cache
pub const CACHE_TTL_SECS: u64 = 3600;

// Seasons offered in the selectors: 2010-2011 ..= 2023-2024
pub const FIRST_SEASON_START: u16 = 2010;
pub const LAST_SEASON_START: u16 = 2023;

// Log sink
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";

// Window
pub const APP_TITLE: &str = "Football League Data Dashboard";
pub const DATA_SOURCE_NOTE: &str = "Data sourced from fbref.com";
