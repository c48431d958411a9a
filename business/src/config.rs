use std::any::Any;

use log::info;
use serde::Deserialize;
use thiserror::Error;
use userdesk_states::State;
use ustr::Ustr;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read environment: {0}")]
    Env(#[from] serde_env::Error),
    #[error("DEFAULT_PAGE_SIZE must be at least 1")]
    ZeroPageSize,
}

/// Environment variables, all optional.
#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    api_base_url: Option<String>,
    default_page_size: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusinessConfig {
    pub api_base_url: String,
    /// Page size the users table starts with.
    pub default_page_size: u32,
}

impl BusinessConfig {
    pub const DEFAULT_API_BASE_URL: &'static str = "http://localhost:8080";
    pub const DEFAULT_PAGE_SIZE: u32 = 100;

    pub fn new(base_url: String) -> Self {
        Self {
            api_base_url: base_url,
            default_page_size: Self::DEFAULT_PAGE_SIZE,
        }
    }

    /// Reads `API_BASE_URL` and `DEFAULT_PAGE_SIZE` from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(std::env::vars())
    }

    pub fn from_vars<I, S>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (S, S)>,
        S: AsRef<str>,
    {
        let RawConfig {
            api_base_url,
            default_page_size,
        } = serde_env::from_iter(vars)?;

        let api_base_url = match api_base_url {
            Some(url) => {
                info!("Using provided API_BASE_URL: {url}");
                url
            }
            None => Self::DEFAULT_API_BASE_URL.to_owned(),
        };

        let default_page_size = match default_page_size {
            Some(0) => return Err(ConfigError::ZeroPageSize),
            Some(size) => size,
            None => Self::DEFAULT_PAGE_SIZE,
        };

        Ok(Self {
            api_base_url,
            default_page_size,
        })
    }

    pub fn api_url(&self) -> Ustr {
        let base = self.api_base_url.trim_end_matches('/');
        Ustr::from(&format!("{base}/api"))
    }
}

impl Default for BusinessConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_API_BASE_URL.to_owned())
    }
}

impl State for BusinessConfig {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn snapshot(&self) -> Option<Box<dyn Any + Send>> {
        Some(Box::new(self.clone()))
    }
}
