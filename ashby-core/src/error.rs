use derive_more::Display;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    #[display(fmt = "x")]
    X,
    #[display(fmt = "y")]
    Y,
}

/// An item (or ellipse) that can't be placed in display space under the requested mode.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum DomainError {
    #[error("Non-positive {axis} half-extent: {value}")]
    NonPositiveExtent { axis: Axis, value: f64 },

    #[error("Log scale requires positive {axis} corners, lower corner is {value}")]
    NonPositiveLogCorner { axis: Axis, value: f64 },

    /// The display-space interval rounds to a single value (e.g. a tiny extent around a huge center).
    #[error("Display {axis} extent collapses to zero: [{lo}, {hi}]")]
    CollapsedExtent { axis: Axis, lo: f64, hi: f64 },

    #[error("Non-finite {field}: {value}")]
    NonFinite { field: &'static str, value: f64 },

    #[error("Invalid ellipse at index {index}: {source}")]
    InvalidEllipse {
        index: usize,
        #[source]
        source: Box<DomainError>,
    },
}

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("Sampling resolution must be at least 3, got {0}")]
    Resolution(usize),

    #[error("Expansion ratio must be a finite positive number, got {0}")]
    ExpansionRatio(f64),
}

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
