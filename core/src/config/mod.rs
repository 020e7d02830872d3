mod load;
mod types;

pub use load::{
    apply_env_overrides, get_taskboard_data_dir, load, load_default, load_from_path, ENV_API_KEY,
    ENV_API_URL,
};
pub use types::{ApiConfig, AppConfig, LoggingConfig};
