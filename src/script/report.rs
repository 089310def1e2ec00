use serde::{Deserialize, Serialize};

use crate::viewport::ViewportTransform;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StepReport {
    pub action: String,
    pub duration_us: u128,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScriptReport {
    pub script_name: Option<String>,
    pub steps: Vec<StepReport>,
    pub history_len: usize,
    pub history_cursor: usize,
    pub viewport: ViewportTransform,
    pub width: u32,
    pub height: u32,
}
