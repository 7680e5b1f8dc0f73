/// TTRPG Names - themed name generator datasets
///
/// Core library for loading pre-written name lists, drawing random names
/// from them, and looking up the flavor text behind a generated name.

pub mod config;
pub mod core;

#[cfg(test)]
mod tests;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
