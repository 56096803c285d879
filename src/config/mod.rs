//! Configuration for the schedule import engine.
//!
//! [`ImportConfig::default`] reproduces the built-in keyword tables.
//! [`ConfigLoader`] reads overrides from a directory of YAML files.
//!
//! # Example
//!
//! ```no_run
//! use schedule_import::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap().into_config();
//! println!("Roster name headers: {:?}", config.detection.roster_name_headers);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{DepartmentConfig, DetectionConfig, ImportConfig, KeywordSet};
