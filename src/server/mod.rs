//! Server-side persistence modules.
//!
//! This module contains everything that touches the database: configuration and startup,
//! repositories over the SeaORM entities, services returning outward projections, and the
//! error types shared between them.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod service;
pub mod startup;
