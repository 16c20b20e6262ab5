pub mod build;
pub mod game;
pub mod manifest;
