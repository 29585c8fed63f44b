pub mod sqlite_controller;

pub use sqlite_controller::SqliteController;
