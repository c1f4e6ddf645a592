//! Factory functions for generating mock user models.
//!
//! These are in-memory model instances that don't require database interaction,
//! suitable for unit tests of projections.

use crate::constant::{TEST_FIRST_NAME, TEST_LAST_NAME, TEST_PASSWORD};

/// Create a mock user model with standard test values.
///
/// # Arguments
/// - `id` - Primary key of the model
/// - `email` - Email of the user
pub fn mock_user_model(id: i32, email: &str) -> entity::user::Model {
    entity::user::Model {
        id,
        email: email.to_string(),
        password: TEST_PASSWORD.to_string(),
        first_name: TEST_FIRST_NAME.to_string(),
        last_name: TEST_LAST_NAME.to_string(),
    }
}
