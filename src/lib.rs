pub mod app;
pub mod entities;
pub mod error;
pub mod event;
pub mod game;
pub mod logging;
pub mod record;
pub mod scoreboard;
pub mod settings;
pub mod stats;
pub mod ui;
