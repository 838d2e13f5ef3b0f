//! Service layer
//!
//! Validation and business rules on top of [`BookmarkStore`](crate::storage::BookmarkStore).
//! Every successful mutation publishes a [`DataEvent`](crate::event::DataEvent).

mod category_service;
mod link_service;
mod tag_service;

pub use category_service::*;
pub use link_service::*;
pub use tag_service::*;
