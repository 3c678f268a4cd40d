use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Model", inline)]
#[serde(default)]
/// Node names used to locate the model's animated parts.
pub struct ModelOptions {
    /// Case-insensitive substring identifying the model root.
    pub root_hint: String,
    /// Headband node name.
    pub headband: String,
    /// Node holding both cups, used when the cups are not split.
    pub cups: String,
    /// Left cup node name.
    pub left_cup: String,
    /// Right cup node name.
    pub right_cup: String,
    /// Frame node name.
    pub frame: String,
    /// Idle spin of a fallback model in radians per second.
    #[schemars(skip)]
    pub fallback_spin: f32,
}

impl Default for ModelOptions {
    fn default() -> Self {
        Self {
            root_hint: "airpods".to_owned(),
            headband: "Headband".to_owned(),
            cups: "Cups".to_owned(),
            left_cup: "Cup_L".to_owned(),
            right_cup: "Cup_R".to_owned(),
            frame: "Frame".to_owned(),
            fallback_spin: 0.2,
        }
    }
}
