//! Geometry behind Ashby charts: material bubbles placed on linear or log10 axes, and the convex
//! hulls drawn around each family of them.
//!
//! - [`convert`] maps a [`SourceItem`] to an [`EllipseGeometry`] in display space.
//! - [`sample`] / [`BoundarySampler`] trace an ellipse's (expanded) boundary.
//! - [`compute_hull`] pools the samples of many ellipses and returns their [`Hull`].
//!
//! Everything here is a pure function of its inputs; the [`PlotCoordinateMode`] is passed explicitly
//! to every call.

pub mod draw;
pub mod ellipse;
pub mod error;
pub mod family;
pub mod hull;
pub mod item;
pub mod mode;
pub mod r2;
pub mod sample;
pub mod scale;
pub mod transform;

pub use draw::{DrawRequest, Drawable};
pub use ellipse::{convert, EllipseGeometry};
pub use error::{ConfigError, DomainError, Error};
pub use family::{family_hulls, FamilyHull};
pub use hull::{compute_hull, convex_hull, Hull};
pub use item::SourceItem;
pub use mode::{PlotCoordinateMode, RotationMode, ScaleMode, YAxis};
pub use r2::R2;
pub use sample::{sample, BoundarySampler};

/// Parse a log level string into LevelFilter.
pub fn parse_log_level(level: Option<&str>) -> Result<log::LevelFilter, String> {
    match level {
        Some("error") => Ok(log::LevelFilter::Error),
        Some("warn") => Ok(log::LevelFilter::Warn),
        Some("info") | Some("") | None => Ok(log::LevelFilter::Info),
        Some("debug") => Ok(log::LevelFilter::Debug),
        Some("trace") => Ok(log::LevelFilter::Trace),
        Some(level) => Err(format!("invalid log level: {}", level)),
    }
}
