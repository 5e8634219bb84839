//! Filesystem helpers for exercise discovery.

pub mod catalog;
