pub mod paths;

pub use paths::{artifact_filename, default_config_path, default_data_dir};
