pub mod errors;
pub mod events;
pub mod settings;
pub mod types;

#[cfg(test)]
mod types_test;
