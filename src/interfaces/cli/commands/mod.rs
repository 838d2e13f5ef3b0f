//! CLI command implementations

mod category;
mod config_gen;
mod link_management;
mod stats;
mod tag;

pub use category::{add_category, list_categories, remove_category};
pub use config_gen::config_generate;
pub use link_management::*;
pub use stats::show_stats;
pub use tag::{add_tag, list_tags, remove_tag};
