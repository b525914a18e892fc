// src/config/consts.rs

// Local store (logs)
pub const STORE_DIR: &str = ".store";
pub const LOG_BASENAME: &str = "debug";
pub const LOG_MAX_BYTES: u64 = 5 * 1024 * 1024;
pub const LOG_KEEP_FILES: usize = 3;

// Export artifact
pub const DEFAULT_OUTPUT: &str = "data/lifelist.json";
pub const DEFAULT_ARTIFACT_MODE: u32 = 0o644;

// Column positions in the life-list export (0-based)
pub const COL_COMMON_NAME: usize = 3;
pub const COL_SCIENTIFIC_NAME: usize = 4;
pub const COL_LOCATION: usize = 6;
pub const COL_REGION: usize = 7;
pub const COL_DATE: usize = 8;
