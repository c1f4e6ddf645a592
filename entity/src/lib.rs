//! `SeaORM` entities for the favorites catalog.

pub mod prelude;

pub mod character;
pub mod favorite;
pub mod planet;
pub mod user;
pub mod vehicle;
