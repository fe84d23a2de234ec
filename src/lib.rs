// systran8-provider - SYSTRAN 8 machine translation provider for localization hosts
// Author: kelexine (https://github.com/kelexine)

pub mod cli;
pub mod config;
pub mod error;
pub mod language;
pub mod models;
pub mod provider;
pub mod systran;
pub mod utils;

pub use error::{ProviderError, Result};
pub use provider::{Systran8Provider, TranslationProvider};
