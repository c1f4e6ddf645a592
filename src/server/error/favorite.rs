use thiserror::Error;

#[derive(Error, Debug)]
pub enum FavoriteError {
    /// The row references no catalog item or more than one.
    ///
    /// Cannot be produced through the application, only by rows written by other tools.
    #[error(
        "Favorite ID {favorite_id} must reference exactly one character, planet, or vehicle but references {targets}"
    )]
    AmbiguousTarget { favorite_id: i32, targets: usize },
    /// The referenced catalog item was not returned alongside the favorite.
    #[error("Favorite ID {favorite_id} references {target} which could not be found")]
    TargetNotFound { favorite_id: i32, target: String },
}
