mod settings;

pub use settings::{init_app_config, ApiConfig, AppConfig};
