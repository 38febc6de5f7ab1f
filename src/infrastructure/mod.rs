// src/infrastructure/mod.rs
pub mod config;
pub mod dummyjson;
pub mod local_storage;
pub mod renderer;

pub use config::Config;
pub use dummyjson::DummyJsonSource;
pub use local_storage::{FileStorage, MemoryStorage};
pub use renderer::PageRenderer;
