//! Dashboard view model
//!
//! [`Dashboard`] holds the fetched collection, the criteria and the filtered
//! view, recomputing the view on every change. [`DashboardSession`] keeps a
//! dashboard in sync with the store by re-fetching on data events.

mod session;
mod view;

pub use session::DashboardSession;
pub use view::{Dashboard, EmptyState};
