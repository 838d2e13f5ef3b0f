use std::sync::{Arc, OnceLock};

use arc_swap::ArcSwap;

use super::StaticConfig;

static CONFIG: OnceLock<ArcSwap<StaticConfig>> = OnceLock::new();

/// Get the global configuration instance
///
/// Falls back to loading `config.toml` + environment on first access when
/// `init_config` was never called.
pub fn get_config() -> Arc<StaticConfig> {
    CONFIG
        .get_or_init(|| ArcSwap::from_pointee(StaticConfig::load(None)))
        .load_full()
}

/// Initialize the global configuration from an optional file path.
///
/// Later calls keep the first loaded configuration.
pub fn init_config(path: Option<&str>) {
    CONFIG.get_or_init(|| ArcSwap::from_pointee(StaticConfig::load(path)));
}

/// Identity of the current user; every store call is scoped to it.
pub fn current_user_id() -> String {
    get_config().user.id.clone()
}
