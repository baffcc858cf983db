use crate::utils::error::{Result, SummaryError};
use std::net::SocketAddr;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_bind_addr(field_name: &str, addr: &str) -> Result<()> {
    if addr.is_empty() {
        return Err(SummaryError::ConfigError {
            field: field_name.to_string(),
            reason: "bind address cannot be empty".to_string(),
        });
    }

    match addr.parse::<SocketAddr>() {
        Ok(_) => Ok(()),
        Err(e) => Err(SummaryError::ConfigError {
            field: field_name.to_string(),
            reason: format!("invalid bind address '{}': {}", addr, e),
        }),
    }
}
