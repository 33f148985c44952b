use serde::{Deserialize, Serialize};

use crate::slug::slugify;

/// A titled, ordered set of preparation steps. Step text may carry limited
/// inline HTML; it is sanitized at render time, not here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstructionGroup {
    pub title: String,
    #[serde(default)]
    pub steps: Vec<String>,
}

impl InstructionGroup {
    /// CSS-identifying slug for the group, derived from its title.
    pub fn slug(&self) -> String {
        slugify(&self.title)
    }
}
