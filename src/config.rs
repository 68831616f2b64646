//! Register configuration.
//!
//! [`RegisterConfig`] can be built in code through
//! [`LandRegisterBuilder`](crate::LandRegisterBuilder) or deserialized from
//! any serde format; missing fields take their defaults.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Options for creating a land register.
///
/// ```ignore
/// let config: RegisterConfig = serde_json::from_str(r#"{"initial_capacity": 1024}"#)?;
/// let register = LandRegister::builder().config(config).build()?;
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegisterConfig {
    /// Parcels to reserve room for up front
    pub initial_capacity: usize,
    /// Acquisition order given to the first ownership transfer
    pub first_acquisition_order: u64,
}

impl RegisterConfig {
    /// Default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Check the options before a register is built from them
    pub fn validate(&self) -> Result<()> {
        if self.first_acquisition_order == 0 {
            return Err(Error::InvalidConfig(
                "first_acquisition_order must be at least 1".to_string(),
            ));
        }
        if self.first_acquisition_order == u64::MAX {
            return Err(Error::InvalidConfig(
                "first_acquisition_order leaves no room for later transfers".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for RegisterConfig {
    fn default() -> Self {
        Self {
            initial_capacity: 0,
            first_acquisition_order: 1,
        }
    }
}
