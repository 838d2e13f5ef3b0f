mod r#impl;
mod structs;

pub use r#impl::{current_user_id, get_config, init_config};
pub use structs::*;
