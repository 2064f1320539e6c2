//! Repository structs wrapping raw SQL for each table.

mod game_repo;
mod genre_repo;

pub use game_repo::GameRepo;
pub use genre_repo::GenreRepo;
