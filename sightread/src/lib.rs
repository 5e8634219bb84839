//! Daily sight-reading exercise selection.
//!
//! The crate keeps a strict separation:
//!
//! - **[`core`]**: Pure catalog type and selectors (today, random, next,
//!   previous). No I/O, fully testable with fabricated catalogs.
//! - **[`io`]**: The one-time directory scan that produces the catalog.
//!
//! The HTTP server (`sightread-server`) and the `sightread` CLI both load the
//! catalog once at startup and pass it by reference into the selectors.

pub mod core;
pub mod exit_codes;
pub mod io;
pub mod logging;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
