pub mod components;
pub mod config;
pub mod error;
pub mod feedback;
pub mod local_storage;
pub mod state;
pub mod timer;
