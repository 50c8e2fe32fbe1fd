//! Configuration loading and management for the calculator service.
//!
//! This module loads the statutory rates, the admin access policy and the
//! A/B experiments from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use clt_calc::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("INSS rate: {}", config.rates().inss_rate);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{AccessConfig, AppConfig, StatutoryRates};
