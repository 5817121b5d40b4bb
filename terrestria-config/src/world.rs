use serde::{Deserialize, Serialize};

use crate::LoadConfigError;

/// Vertical extent of the host world.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct WorldConfig {
    pub min_y: i32,
    pub height: u32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            min_y: 0,
            height: 256,
        }
    }
}

impl WorldConfig {
    /// First y above the world, exclusive.
    pub fn top_y(&self) -> i32 {
        self.min_y + self.height as i32
    }

    pub(crate) fn validate(&self) -> Result<(), LoadConfigError> {
        if self.height == 0 || self.height % 16 != 0 {
            return Err(LoadConfigError::Invalid(format!(
                "world height must be a positive multiple of 16, got {}",
                self.height
            )));
        }
        if i32::try_from(self.height)
            .ok()
            .and_then(|height| self.min_y.checked_add(height))
            .is_none()
        {
            return Err(LoadConfigError::Invalid(format!(
                "world top overflows: min_y {} + height {}",
                self.min_y, self.height
            )));
        }
        Ok(())
    }
}
