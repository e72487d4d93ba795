pub mod assets;
pub mod audio;
pub mod config;
pub mod constants;
pub mod entities;
pub mod game;
pub mod host;
pub mod rendering;
pub mod terminal_io;
pub mod types;
pub mod ui;
