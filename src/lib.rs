pub mod configuration;
pub mod models;
pub mod store;
pub mod tasks;

pub mod built_info {
    // The file has been placed there by the build script.
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}
