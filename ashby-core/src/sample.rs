use std::f64::consts::TAU;

use crate::{ellipse::EllipseGeometry, error::ConfigError, mode::{validate_sampling, PlotCoordinateMode, RotationMode}, r2::R2, transform::{CanProject, Projection, Transform::{Rotate, Scale, Translate}}};

/// Samples ellipse boundaries at a fixed resolution, scaled about each ellipse's center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundarySampler {
    resolution: usize,
    expansion_ratio: f64,
    rotation: RotationMode,
}

impl BoundarySampler {
    pub fn new(resolution: usize, expansion_ratio: f64) -> Result<Self, ConfigError> {
        validate_sampling(resolution, expansion_ratio)?;
        Ok(BoundarySampler { resolution, expansion_ratio, rotation: RotationMode::Ignore })
    }

    pub fn with_rotation(self, rotation: RotationMode) -> Self {
        BoundarySampler { rotation, ..self }
    }

    pub fn resolution(&self) -> usize {
        self.resolution
    }

    /// Maps the unit circle onto `e`'s (expanded) boundary.
    pub fn projection(&self, e: &EllipseGeometry) -> Projection {
        let mut transforms = vec![Scale(e.half_size() * self.expansion_ratio)];
        if self.rotation == RotationMode::Apply && e.rotation != 0. {
            transforms.push(Rotate(e.rotation.to_radians()));
        }
        transforms.push(Translate(e.c));
        Projection(transforms)
    }

    /// `resolution` points over the closed interval `[0, 2π]`; the last point repeats the first exactly.
    pub fn sample(&self, e: &EllipseGeometry) -> Vec<R2<f64>> {
        let projection = self.projection(e);
        let steps = self.resolution - 1;
        (0..self.resolution)
            .map(|i| {
                let t = TAU * ((i % steps) as f64) / (steps as f64);
                R2 { x: t.sin(), y: t.cos() }.apply(&projection)
            })
            .collect()
    }
}

impl TryFrom<&PlotCoordinateMode> for BoundarySampler {
    type Error = ConfigError;
    fn try_from(mode: &PlotCoordinateMode) -> Result<Self, ConfigError> {
        Ok(BoundarySampler::new(mode.resolution, mode.expansion_ratio)?.with_rotation(mode.rotation))
    }
}

/// Sample `e`'s boundary, ignoring its rotation.
pub fn sample(e: &EllipseGeometry, resolution: usize, expansion_ratio: f64) -> Result<Vec<R2<f64>>, ConfigError> {
    Ok(BoundarySampler::new(resolution, expansion_ratio)?.sample(e))
}
