//! Server configuration.

use thiserror::Error;

/// Runtime configuration of the room server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Host address to bind to
    pub host: String,
    /// Port number to bind to
    pub port: u16,
    /// Capacity of each connection's outbound queue
    pub outbound_queue_capacity: usize,
    /// Remove a room from the directory when its last connection leaves
    pub evict_empty_rooms: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
            outbound_queue_capacity: 64,
            evict_empty_rooms: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("outbound queue capacity must be at least 1")]
    ZeroQueueCapacity,
}

impl ServerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.outbound_queue_capacity == 0 {
            return Err(ConfigError::ZeroQueueCapacity);
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
