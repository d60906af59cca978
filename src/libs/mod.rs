//! Core library modules for the kaglo application.
//!
//! The heart of the crate is the pure task pipeline (`filter`, `summary`):
//! synchronous, allocation-light transformations over an in-memory task list
//! that every dashboard and listing is built from. Everything else here is
//! supporting infrastructure: configuration, storage paths, console views,
//! exports and the typed message system.

pub mod config;
pub mod data_storage;
pub mod export;
pub mod filter;
pub mod formatter;
pub mod messages;
pub mod summary;
pub mod task;
pub mod view;
