use crate::{error::{Axis, DomainError}, mode::ScaleMode};

/// One axis of a display-space bounding box: lower edge and (positive) extent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    pub lo: f64,
    pub extent: f64,
}

impl Span {
    pub fn hi(&self) -> f64 {
        self.lo + self.extent
    }
    pub fn center(&self) -> f64 {
        self.lo + self.extent / 2.
    }
    /// Mirror about 0, keeping the extent positive.
    pub fn flip(&self) -> Span {
        Span { lo: -self.hi(), extent: self.extent }
    }
}

pub fn check_finite(field: &'static str, value: f64) -> Result<f64, DomainError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(DomainError::NonFinite { field, value })
    }
}

impl ScaleMode {
    /// Map the linear interval `[c - r, c + r]` onto this scale.
    ///
    /// Under [`ScaleMode::Log10`] the corners are mapped independently, so the resulting center is the
    /// midpoint of the logged corners rather than `log10(c)`.
    ///
    /// The result always has finite corners and a positive extent: corners that overflow, or that
    /// round onto each other, are errors.
    pub fn span(&self, axis: Axis, c: f64, r: f64) -> Result<Span, DomainError> {
        let (c_field, r_field, corner_field, extent_field) = match axis {
            Axis::X => ("x center", "x half-extent", "x corner", "x extent"),
            Axis::Y => ("y center", "y half-extent", "y corner", "y extent"),
        };
        let c = check_finite(c_field, c)?;
        let r = check_finite(r_field, r)?;
        if r <= 0. {
            return Err(DomainError::NonPositiveExtent { axis, value: r });
        }
        let lo = check_finite(corner_field, c - r)?;
        let hi = check_finite(corner_field, c + r)?;
        let (lo, hi) = match self {
            ScaleMode::Linear => (lo, hi),
            ScaleMode::Log10 => {
                if lo <= 0. {
                    return Err(DomainError::NonPositiveLogCorner { axis, value: lo });
                }
                (lo.log10(), hi.log10())
            }
        };
        let extent = check_finite(extent_field, hi - lo)?;
        if extent <= 0. {
            return Err(DomainError::CollapsedExtent { axis, lo, hi });
        }
        Ok(Span { lo, extent })
    }
}
