//! Exit codes for the storecheck CLI. Part of the public contract.

pub const SUCCESS: i32 = 0;
/// Argument/config failure, or the report could not be written.
pub const CONFIG_ERROR: i32 = 2;
