//! Core library exports for the catalog administration service.
//!
//! This crate exposes the category aggregate, its store contract with a
//! Diesel/SQLite implementation, and the use cases built on top of them.

#[cfg(feature = "data")]
pub mod commands;
#[cfg(feature = "data")]
pub mod db;
#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "data")]
pub mod dto;
#[cfg(feature = "data")]
mod error_conversions;
#[cfg(feature = "data")]
pub mod forms;
#[cfg(feature = "data")]
pub mod models;
#[cfg(feature = "data")]
pub mod repository;
#[cfg(feature = "data")]
pub mod schema;
#[cfg(feature = "data")]
pub mod services;
