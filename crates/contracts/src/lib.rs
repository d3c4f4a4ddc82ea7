//! Wire types and client-side logic shared by the compliance console.
//!
//! Nothing in this crate touches the browser, so everything here is unit
//! tested natively.

pub mod domain;
pub mod enums;
pub mod projections;
pub mod shared;
pub mod system;
pub mod usecases;
