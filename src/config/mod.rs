//! Configuration modules.

pub mod game;
pub mod logging;

pub use game::GameConfig;
pub use logging::LoggingConfig;
