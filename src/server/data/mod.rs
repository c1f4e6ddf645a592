//! Data access layer repositories.
//!
//! One repository per table. Every repository borrows any [`sea_orm::ConnectionTrait`],
//! so the same repository runs against the pooled connection or inside a transaction
//! opened by the caller.

pub mod character;
pub mod favorite;
pub mod planet;
pub mod user;
pub mod vehicle;
