// src/config/consts.rs

// Net config
pub const TARGET_URL: &str =
    "https://www.legalbluebook.com/bluebook/v21/tables/t2-foreign-jurisdictions/t2-18-india";
pub const REQUEST_TIMEOUT_SECS: u64 = 30;
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

// Structure
pub const DEFAULT_ANCHOR_HEADING: &str = "T2.18";
pub const CELL_SEP: &str = " | ";

// Raw snapshot
pub const DEFAULT_DATA_DIR: &str = "data";
pub const DEFAULT_RAW_FILE: &str = "bluebook_india_raw.html";

// Export
pub const DEFAULT_OUT_DIR: &str = "output";
pub const DEFAULT_FILE: &str = "bluebook_india";
pub const TIMESTAMP_FMT: &str = "%Y%m%d_%H%M%S";
