pub mod builder;
pub mod constant;
pub mod context;
pub mod error;
pub mod fixtures;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{
        fixtures::{
            catalog::factory as catalog_factory, favorite::factory as favorite_factory,
            user::factory as user_factory,
        },
        TestBuilder, TestContext, TestError,
    };
}
