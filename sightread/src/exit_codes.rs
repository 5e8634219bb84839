//! Stable exit codes for `sightread` CLI commands.

/// Command succeeded.
pub const OK: i32 = 0;
/// Command failed (unreadable directory, bad arguments, serialization error).
pub const INVALID: i32 = 1;
/// `sightread check` found catalog entries without a rendered image.
pub const MISSING_IMAGES: i32 = 2;
