//! REST surface of the catalog slice.

pub mod dto;
mod handlers;
pub mod router;

pub use router::catalog_router;
