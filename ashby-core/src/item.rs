use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::r2::R2;

/// One material on the chart: mean values on the two plotted properties, with half-extents derived
/// from their standard deviations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceItem {
    pub family: String,
    #[serde(default)]
    pub label: String,
    pub c: R2<f64>,
    pub r: R2<f64>,
    /// Degrees, counter-clockwise.
    #[serde(default)]
    pub rotation: f64,
}

impl SourceItem {
    pub fn new(family: impl Into<String>, cx: f64, cy: f64, rx: f64, ry: f64) -> Self {
        SourceItem {
            family: family.into(),
            label: String::new(),
            c: R2 { x: cx, y: cy },
            r: R2 { x: rx, y: ry },
            rotation: 0.,
        }
    }
    pub fn with_label(self, label: impl Into<String>) -> Self {
        SourceItem { label: label.into(), ..self }
    }
    pub fn with_rotation(self, rotation: f64) -> Self {
        SourceItem { rotation, ..self }
    }
}

impl Display for SourceItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.label.is_empty() {
            write!(f, "{{ family: {}, c: {}, r: {} }}", self.family, self.c, self.r)
        } else {
            write!(f, "{}/{}", self.family, self.label)
        }
    }
}
