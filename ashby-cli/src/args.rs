use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use ashby_core::{PlotCoordinateMode, RotationMode, ScaleMode, YAxis};
use clap::{Args, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Scale {
    Linear,
    Log10,
}

impl From<Scale> for ScaleMode {
    fn from(scale: Scale) -> Self {
        match scale {
            Scale::Linear => ScaleMode::Linear,
            Scale::Log10 => ScaleMode::Log10,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Rotation {
    Ignore,
    Apply,
}

impl From<Rotation> for RotationMode {
    fn from(rotation: Rotation) -> Self {
        match rotation {
            Rotation::Ignore => RotationMode::Ignore,
            Rotation::Apply => RotationMode::Apply,
        }
    }
}

#[derive(Args, Debug, Default)]
pub struct ModeArgs {
    /// Plot mode JSON file; the flags below override its fields
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Axis scale [default: log10]
    #[arg(short, long, value_enum)]
    pub scale: Option<Scale>,

    /// Multiplier applied to each ellipse before hulling [default: 2]
    #[arg(short, long)]
    pub expansion_ratio: Option<f64>,

    /// Boundary samples per ellipse [default: 200]
    #[arg(short, long)]
    pub resolution: Option<usize>,

    /// Whether hulls account for ellipse rotation [default: ignore]
    #[arg(long, value_enum)]
    pub rotation: Option<Rotation>,

    /// Negate display-space Y (for scenes whose Y axis points down)
    #[arg(long)]
    pub y_down: bool,
}

impl ModeArgs {
    pub fn mode(&self) -> Result<PlotCoordinateMode> {
        let mut mode = match &self.config {
            Some(path) => {
                let json = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
                serde_json::from_str(&json).with_context(|| format!("parsing {}", path.display()))?
            }
            None => PlotCoordinateMode::default(),
        };
        if let Some(scale) = self.scale {
            mode = mode.with_scale(scale.into());
        }
        if let Some(expansion_ratio) = self.expansion_ratio {
            mode = mode.with_expansion_ratio(expansion_ratio);
        }
        if let Some(resolution) = self.resolution {
            mode = mode.with_resolution(resolution);
        }
        if let Some(rotation) = self.rotation {
            mode = mode.with_rotation(rotation.into());
        }
        if self.y_down {
            mode = mode.with_y_axis(YAxis::Down);
        }
        mode.validate()?;
        Ok(mode)
    }
}

#[derive(Args, Debug, Default)]
pub struct IoArgs {
    /// JSON array of items; reads stdin if omitted or "-"
    pub input: Option<PathBuf>,

    /// Output file (JSON); writes stdout if omitted
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(short, long)]
    pub pretty: bool,
}
