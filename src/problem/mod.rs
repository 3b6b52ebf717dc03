//! Static problem definition
//!
//! This module provides the response-quantity catalogs supplied by the driver.

pub mod catalog;

pub mod prelude {
    pub use super::catalog::*;
}
