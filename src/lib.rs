pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::{CliConfig, SpellerArgs};

pub use crate::config::Settings;
pub use crate::core::extenso::{translate, MAX_NUMBER, MIN_NUMBER};
pub use crate::core::server::{router, ExtensoServer};
pub use crate::core::speller::write_spellings;
pub use crate::domain::model::{ErroResponse, ExtensoResponse, LogFormat};
pub use crate::utils::error::{ExtensoError, Result, RANGE_ERROR_MESSAGE};
