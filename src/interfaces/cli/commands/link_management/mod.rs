//! Link management commands

mod add;
mod favorite;
mod helpers;
mod list;
mod remove;
mod update;

pub use add::add_link;
pub use favorite::toggle_favorite;
pub use helpers::format_link;
pub use list::list_links;
pub use remove::remove_link;
pub use update::update_link;
