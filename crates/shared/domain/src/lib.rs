//! # Domain Models
//!
//! Pure configuration and registry types shared by every slice, with `serde` as the only
//! dependency. Keep it lean: data and simple helpers, no I/O.

pub mod config;
pub mod constants;
pub mod registry;
