use serde::{Deserialize, Serialize};

/// Prep, cook, and derived total durations, in minutes. `None` means the
/// field was never set; `Some(0)` is a real duration and renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CookTimes {
    pub prep: Option<u32>,
    pub cook: Option<u32>,
    pub total: Option<u32>,
}
