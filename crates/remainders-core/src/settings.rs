//! Display settings persisted alongside the item set.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoxShape {
    Square,
    Rectangle,
}

impl BoxShape {
    pub fn as_str(self) -> &'static str {
        match self {
            BoxShape::Square => "square",
            BoxShape::Rectangle => "rectangle",
        }
    }
}

/// Card shape and size, as chosen in the size dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoxSettings {
    #[serde(default = "default_shape")]
    pub shape: BoxShape,
    /// Card width in pixels.
    #[serde(default = "default_size")]
    pub size: u32,
}

fn default_shape() -> BoxShape {
    BoxShape::Rectangle
}

fn default_size() -> u32 {
    250
}

impl Default for BoxSettings {
    fn default() -> Self {
        Self {
            shape: default_shape(),
            size: default_size(),
        }
    }
}

pub fn default_theme() -> String {
    "light-theme".to_string()
}
