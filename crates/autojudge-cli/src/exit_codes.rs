//! Unified exit codes for the autojudge CLI.

pub const SUCCESS: i32 = 0;
pub const CONFIG_ERROR: i32 = 2; // Startup-fatal: config/input/credential/provider
pub const WRITE_ERROR: i32 = 3; // Output-fatal: report destination unwritable
