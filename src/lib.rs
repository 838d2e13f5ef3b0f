//! linkvault - a personal bookmark manager
//!
//! Save links with titles, descriptions, categories and tags, then search and
//! filter them.
//!
//! # Features
//! - **cli**: Command-line interface (default)
//!
//! # Architecture
//! - `filter`: Pure link filter over an in-memory collection
//! - `storage`: `BookmarkStore` trait and the SeaORM backend
//! - `services`: Validated CRUD for links, categories and tags
//! - `event`: Data-changed notifications
//! - `dashboard`: View model that recomputes the filtered view
//! - `interfaces`: Command-line front end
//! - `config` / `system`: Configuration and logging

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod dashboard;
pub mod errors;
pub mod event;
pub mod filter;
#[cfg(feature = "cli")]
pub mod interfaces;
pub mod services;
pub mod storage;
pub mod system;
pub mod utils;
