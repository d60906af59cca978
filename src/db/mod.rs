//! Database layer for the kaglo application.
//!
//! SQLite-backed persistence for tasks, with a versioned migration system
//! applied on every connection open. Display-time filtering and sorting do
//! not happen here; the database hands out full task lists and the pure
//! pipeline in `libs::filter` does the rest.

/// Core database connection and initialization module.
pub mod db;

/// Database schema migration system.
pub mod migrations;

/// Tag maintenance queries over the task store.
pub mod tags;

/// Core task CRUD operations.
pub mod tasks;
