pub mod game;
pub mod genre;
