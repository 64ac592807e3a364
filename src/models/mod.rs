pub mod category;
#[cfg(feature = "server")]
pub mod config;
