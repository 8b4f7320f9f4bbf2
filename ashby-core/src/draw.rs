use derive_more::From;
use serde::Serialize;

use crate::{ellipse::EllipseGeometry, error::Error, hull::{compute_hull, Hull}, mode::PlotCoordinateMode};

/// What a host asks to draw: one bubble, or the hull around a family of them.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawRequest {
    SingleItem(EllipseGeometry),
    FamilyHull(Vec<EllipseGeometry>),
}

#[derive(Debug, Clone, From, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Drawable {
    Ellipse(EllipseGeometry),
    Hull(Hull),
}

impl DrawRequest {
    pub fn resolve(&self, mode: &PlotCoordinateMode) -> Result<Drawable, Error> {
        match self {
            DrawRequest::SingleItem(e) => {
                mode.validate()?;
                e.validate()?;
                Ok(Drawable::Ellipse(*e))
            }
            DrawRequest::FamilyHull(ellipses) => Ok(Drawable::Hull(compute_hull(ellipses, mode)?)),
        }
    }
}

impl From<Vec<EllipseGeometry>> for DrawRequest {
    fn from(ellipses: Vec<EllipseGeometry>) -> Self {
        DrawRequest::FamilyHull(ellipses)
    }
}

impl From<EllipseGeometry> for DrawRequest {
    fn from(e: EllipseGeometry) -> Self {
        DrawRequest::SingleItem(e)
    }
}
