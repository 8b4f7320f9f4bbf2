use std::fmt::Display;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::{error::{Axis, DomainError, Error}, item::SourceItem, mode::{PlotCoordinateMode, YAxis}, r2::R2, scale::{check_finite, Span}};

/// Axis-aligned bounding box of an ellipse in display space; `rotation` (degrees) is carried alongside.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EllipseGeometry {
    pub c: R2<f64>,
    /// Full width and height.
    pub size: R2<f64>,
    pub rotation: f64,
}

impl EllipseGeometry {
    pub fn new(cx: f64, cy: f64, width: f64, height: f64) -> Self {
        EllipseGeometry {
            c: R2 { x: cx, y: cy },
            size: R2 { x: width, y: height },
            rotation: 0.,
        }
    }

    pub fn with_rotation(self, rotation: f64) -> Self {
        EllipseGeometry { rotation, ..self }
    }

    fn from_spans(x: Span, y: Span, rotation: f64) -> Self {
        EllipseGeometry {
            c: R2 { x: x.center(), y: y.center() },
            size: R2 { x: x.extent, y: y.extent },
            rotation,
        }
    }

    /// Place `item` in display space.
    ///
    /// Under a log scale the bounding box corners are logged individually and the center is rebuilt
    /// from them, so `c` is generally not `log10` of the item's center.
    pub fn convert(item: &SourceItem, mode: &PlotCoordinateMode) -> Result<Self, Error> {
        mode.validate()?;
        let rotation = check_finite("rotation", item.rotation)?;
        let x = mode.scale.span(Axis::X, item.c.x, item.r.x)?;
        let y = mode.scale.span(Axis::Y, item.c.y, item.r.y)?;
        let y = match mode.y_axis {
            YAxis::Up => y,
            YAxis::Down => y.flip(),
        };
        let ellipse = EllipseGeometry::from_spans(x, y, rotation);
        debug!("convert {}: {}", item, ellipse);
        Ok(ellipse)
    }

    pub fn half_size(&self) -> R2<f64> {
        self.size / 2.
    }

    /// Corner with the smallest display coordinates: the upper-left one on screen, where Y grows downward.
    pub fn upper_left(&self) -> R2<f64> {
        self.c - self.half_size()
    }

    /// Corner with the largest display coordinates.
    pub fn lower_right(&self) -> R2<f64> {
        self.c + self.half_size()
    }

    pub fn bounds(&self) -> (R2<f64>, R2<f64>) {
        (self.upper_left(), self.lower_right())
    }

    /// Check an ellipse that didn't come from [`EllipseGeometry::convert`] before sampling it.
    pub fn validate(&self) -> Result<(), DomainError> {
        check_finite("x center", self.c.x)?;
        check_finite("y center", self.c.y)?;
        check_finite("rotation", self.rotation)?;
        for (axis, extent) in [(Axis::X, self.size.x), (Axis::Y, self.size.y)] {
            check_finite("extent", extent)?;
            if extent <= 0. {
                return Err(DomainError::NonPositiveExtent { axis, value: extent });
            }
        }
        Ok(())
    }
}

impl Display for EllipseGeometry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{ c: {}, size: {}, t: {:.3} }}", self.c, self.size, self.rotation)
    }
}

pub fn convert(item: &SourceItem, mode: &PlotCoordinateMode) -> Result<EllipseGeometry, Error> {
    EllipseGeometry::convert(item, mode)
}
