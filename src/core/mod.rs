pub mod clipboard;
pub mod engine;
pub mod sync;
pub mod theme;
