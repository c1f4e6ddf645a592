//! Outward projections of database records.
//!
//! Each DTO is the flat field-name to value mapping handed to consumers of the
//! persistence layer. Field names match the table columns.

pub mod catalog;
pub mod favorite;
pub mod user;
