pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::TreeModel;
pub use config::{cli::LocalStorage, Settings};
pub use core::advisor::{Assessment, ChurnAdvisor};
pub use utils::error::{ChurnError, Result};
