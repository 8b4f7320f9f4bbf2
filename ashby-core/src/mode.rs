use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const DEFAULT_EXPANSION_RATIO: f64 = 2.;
pub const DEFAULT_RESOLUTION: usize = 200;
pub const MIN_RESOLUTION: usize = 3;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScaleMode {
    Linear,
    #[default]
    Log10,
}

/// Direction of increasing Y in display space.
///
/// `Down` negates every display-space Y coordinate, for scenes whose Y axis points down.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum YAxis {
    #[default]
    Up,
    Down,
}

/// Whether boundary sampling honors [`crate::EllipseGeometry::rotation`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RotationMode {
    #[default]
    Ignore,
    Apply,
}

/// Plot configuration shared by every conversion and hull computation of one chart.
///
/// Immutable: the `with_*` methods return updated copies.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotCoordinateMode {
    pub expansion_ratio: f64,
    pub resolution: usize,
    pub scale: ScaleMode,
    pub y_axis: YAxis,
    pub rotation: RotationMode,
}

impl Default for PlotCoordinateMode {
    fn default() -> Self {
        PlotCoordinateMode {
            expansion_ratio: DEFAULT_EXPANSION_RATIO,
            resolution: DEFAULT_RESOLUTION,
            scale: ScaleMode::default(),
            y_axis: YAxis::default(),
            rotation: RotationMode::default(),
        }
    }
}

impl PlotCoordinateMode {
    pub fn linear() -> Self {
        Self::default().with_scale(ScaleMode::Linear)
    }
    pub fn log10() -> Self {
        Self::default().with_scale(ScaleMode::Log10)
    }
    pub fn with_expansion_ratio(self, expansion_ratio: f64) -> Self {
        PlotCoordinateMode { expansion_ratio, ..self }
    }
    pub fn with_resolution(self, resolution: usize) -> Self {
        PlotCoordinateMode { resolution, ..self }
    }
    pub fn with_scale(self, scale: ScaleMode) -> Self {
        PlotCoordinateMode { scale, ..self }
    }
    pub fn with_y_axis(self, y_axis: YAxis) -> Self {
        PlotCoordinateMode { y_axis, ..self }
    }
    pub fn with_rotation(self, rotation: RotationMode) -> Self {
        PlotCoordinateMode { rotation, ..self }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_sampling(self.resolution, self.expansion_ratio)
    }
}

pub(crate) fn validate_sampling(resolution: usize, expansion_ratio: f64) -> Result<(), ConfigError> {
    if resolution < MIN_RESOLUTION {
        return Err(ConfigError::Resolution(resolution));
    }
    if !expansion_ratio.is_finite() || expansion_ratio <= 0. {
        return Err(ConfigError::ExpansionRatio(expansion_ratio));
    }
    Ok(())
}
