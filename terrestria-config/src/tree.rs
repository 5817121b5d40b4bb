use serde::{Deserialize, Serialize};
use terrestria_util::math::{float_provider::FloatProvider, int_provider::IntProvider};

use crate::{LoadConfigError, WorldConfig};

/// The two materials a tree species is built from.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct TreeDefinition {
    pub wood: String,
    pub leaves: String,
}

impl Default for TreeDefinition {
    fn default() -> Self {
        Self {
            wood: "terrestria:rubber_log".to_string(),
            leaves: "terrestria:rubber_leaves".to_string(),
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct RubberTreeConfig {
    #[serde(flatten)]
    pub definition: TreeDefinition,
    /// Notify neighbours of every block the tree places.
    pub notify: bool,
    pub height: IntProvider,
    pub bare_trunk_height: IntProvider,
    pub max_radius: IntProvider,
    pub branch_length: FloatProvider,
}

impl Default for RubberTreeConfig {
    fn default() -> Self {
        Self {
            definition: TreeDefinition::default(),
            notify: false,
            height: IntProvider::uniform(8, 11),
            bare_trunk_height: IntProvider::uniform(1, 12),
            max_radius: IntProvider::uniform(2, 7),
            branch_length: FloatProvider::uniform(2.0, 9.0),
        }
    }
}

/// Branches start somewhere in `[MIN_BRANCH_BASE, height)`.
pub const MIN_BRANCH_BASE: i32 = 4;
/// Widest canopy a config may ask the placement check to scan.
pub const MAX_CANOPY_RADIUS: i32 = 32;
/// Longest branch a config may ask for.
pub const MAX_BRANCH_LENGTH: f32 = 64.0;

impl RubberTreeConfig {
    pub(crate) fn validate(&self, world: &WorldConfig) -> Result<(), LoadConfigError> {
        if self.definition.wood.is_empty() || self.definition.leaves.is_empty() {
            return Err(LoadConfigError::Invalid(
                "tree wood and leaves must name a block".to_string(),
            ));
        }
        if self.height.get_min() <= MIN_BRANCH_BASE {
            return Err(LoadConfigError::Invalid(format!(
                "rubber tree height must always exceed {MIN_BRANCH_BASE}, minimum is {}",
                self.height.get_min()
            )));
        }
        for (name, provider) in [
            ("height", &self.height),
            ("bare_trunk_height", &self.bare_trunk_height),
            ("max_radius", &self.max_radius),
        ] {
            if provider.get_min() < 0 || provider.get_max() < provider.get_min() {
                return Err(LoadConfigError::Invalid(format!(
                    "{name} range {}..={} is empty or negative",
                    provider.get_min(),
                    provider.get_max()
                )));
            }
        }
        // One block of ground below and one of headroom above the trunk.
        let tallest = i64::from(world.height) - 2;
        if i64::from(self.height.get_max()) > tallest {
            return Err(LoadConfigError::Invalid(format!(
                "rubber tree height can reach {}, the world fits at most {tallest}",
                self.height.get_max()
            )));
        }
        if i64::from(self.bare_trunk_height.get_max()) > tallest {
            return Err(LoadConfigError::Invalid(format!(
                "bare_trunk_height can reach {}, the world fits at most {tallest}",
                self.bare_trunk_height.get_max()
            )));
        }
        if self.max_radius.get_max() > MAX_CANOPY_RADIUS {
            return Err(LoadConfigError::Invalid(format!(
                "max_radius can reach {}, at most {MAX_CANOPY_RADIUS} is allowed",
                self.max_radius.get_max()
            )));
        }
        let (min_length, max_length) = (self.branch_length.get_min(), self.branch_length.get_max());
        // Negated comparisons also reject NaN.
        if !(min_length >= 0.0 && max_length >= min_length && max_length <= MAX_BRANCH_LENGTH) {
            return Err(LoadConfigError::Invalid(format!(
                "branch_length range {min_length}..{max_length} must lie within 0..{MAX_BRANCH_LENGTH}"
            )));
        }
        Ok(())
    }
}
