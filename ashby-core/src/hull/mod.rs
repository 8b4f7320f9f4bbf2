use std::{fmt::Display, slice};

use itertools::Itertools;
use log::{debug, warn};
use ordered_float::OrderedFloat;
use serde::{Serialize, Serializer};

use crate::{ellipse::EllipseGeometry, error::{DomainError, Error}, mode::PlotCoordinateMode, r2::R2, sample::BoundarySampler};

/// Convex hull of a point set.
///
/// `Polygon` vertices run counter-clockwise (in a Y-up frame), starting from the point with the
/// smallest x (then smallest y). Fewer than 3 non-collinear input points produce one of the
/// degenerate variants instead.
#[derive(Debug, Clone, PartialEq)]
pub enum Hull {
    Empty,
    Point(R2<f64>),
    Segment([R2<f64>; 2]),
    Polygon(Vec<R2<f64>>),
}

/// `(b - a) × (c - a)`: positive for a left turn at `b`.
fn turn(a: &R2<f64>, b: &R2<f64>, c: &R2<f64>) -> f64 {
    (*b - *a).cross(&(*c - *a))
}

/// Andrew's monotone chain. Vertices are taken from `points` unchanged; collinear points along an
/// edge are dropped, as are non-finite points.
pub fn convex_hull(points: &[R2<f64>]) -> Hull {
    let mut sorted: Vec<R2<f64>> = points.iter().filter(|p| p.is_finite()).copied().collect();
    let dropped = points.len() - sorted.len();
    if dropped > 0 {
        warn!("convex_hull: dropped {} non-finite points (of {})", dropped, points.len());
    }
    sorted.sort_by_key(|p| (OrderedFloat(p.x), OrderedFloat(p.y)));
    sorted.dedup();

    match sorted.as_slice() {
        [] => return Hull::Empty,
        [p] => return Hull::Point(*p),
        _ => {}
    }

    let mut lower: Vec<R2<f64>> = Vec::with_capacity(sorted.len());
    for p in sorted.iter() {
        while lower.len() >= 2 && turn(&lower[lower.len() - 2], &lower[lower.len() - 1], p) <= 0. {
            lower.pop();
        }
        lower.push(*p);
    }
    let mut upper: Vec<R2<f64>> = Vec::with_capacity(sorted.len());
    for p in sorted.iter().rev() {
        while upper.len() >= 2 && turn(&upper[upper.len() - 2], &upper[upper.len() - 1], p) <= 0. {
            upper.pop();
        }
        upper.push(*p);
    }
    // Each chain ends where the other begins
    lower.pop();
    upper.pop();
    lower.extend(upper);

    match lower.as_slice() {
        [a, b] => Hull::Segment([*a, *b]),
        _ => Hull::Polygon(lower),
    }
}

/// Hull of the sampled (and expanded) boundaries of all `items`.
///
/// An empty `items` yields [`Hull::Empty`]. Every ellipse is validated before sampling, and its samples
/// must be finite (expansion can overflow), so a bad one is reported by index instead of corrupting the
/// hull.
pub fn compute_hull(items: &[EllipseGeometry], mode: &PlotCoordinateMode) -> Result<Hull, Error> {
    let sampler = BoundarySampler::try_from(mode)?;
    if items.is_empty() {
        debug!("compute_hull: no ellipses");
        return Ok(Hull::Empty);
    }
    let invalid = |index: usize, source: DomainError| DomainError::InvalidEllipse { index, source: Box::new(source) };
    let mut points: Vec<R2<f64>> = Vec::with_capacity(items.len() * sampler.resolution());
    for (index, e) in items.iter().enumerate() {
        e.validate().map_err(|source| invalid(index, source))?;
        let samples = sampler.sample(e);
        if let Some(p) = samples.iter().find(|p| !p.is_finite()) {
            let value = if p.x.is_finite() { p.y } else { p.x };
            return Err(invalid(index, DomainError::NonFinite { field: "boundary sample", value }).into());
        }
        points.extend(samples);
    }
    let hull = convex_hull(&points);
    debug!("compute_hull: {} ellipses, {} samples, {} vertices", items.len(), points.len(), hull.len());
    Ok(hull)
}

impl Hull {
    pub fn vertices(&self) -> &[R2<f64>] {
        match self {
            Hull::Empty => &[],
            Hull::Point(p) => slice::from_ref(p),
            Hull::Segment(s) => &s[..],
            Hull::Polygon(vertices) => &vertices[..],
        }
    }

    pub fn len(&self) -> usize {
        self.vertices().len()
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Hull::Empty)
    }

    pub fn is_degenerate(&self) -> bool {
        matches!(self, Hull::Point(_) | Hull::Segment(_))
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Hull::Empty => "empty",
            Hull::Point(_) => "point",
            Hull::Segment(_) => "segment",
            Hull::Polygon(_) => "polygon",
        }
    }

    /// Shoelace area; zero for degenerate hulls.
    pub fn area(&self) -> f64 {
        match self {
            Hull::Polygon(vertices) => {
                vertices.iter().circular_tuple_windows().map(|(a, b)| a.cross(b)).sum::<f64>() / 2.
            }
            _ => 0.,
        }
    }

    /// Area centroid of a polygon, or the mean of a degenerate hull's vertices.
    pub fn centroid(&self) -> Option<R2<f64>> {
        match self {
            Hull::Empty => None,
            Hull::Point(p) => Some(*p),
            Hull::Segment([a, b]) => Some((*a + *b) / 2.),
            Hull::Polygon(vertices) => {
                // Relative to the first vertex, to limit cancellation far from the origin
                let o = vertices[0];
                let (a2, sum) = vertices.iter().map(|v| *v - o).circular_tuple_windows().fold(
                    (0., R2 { x: 0., y: 0. }),
                    |(a2, sum), (p, q)| {
                        let cross = p.cross(&q);
                        (a2 + cross, sum + (p + q) * cross)
                    },
                );
                Some(o + sum / (3. * a2))
            }
        }
    }

    /// Whether `p` lies inside or within `eps` of the hull.
    pub fn contains(&self, p: &R2<f64>, eps: f64) -> bool {
        match self {
            Hull::Empty => false,
            Hull::Point(q) => (*p - *q).norm() <= eps,
            Hull::Segment([a, b]) => {
                let ab = *b - *a;
                let len2 = ab.x * ab.x + ab.y * ab.y;
                let t = (((*p - *a).x * ab.x + (*p - *a).y * ab.y) / len2).clamp(0., 1.);
                (*p - (*a + ab * t)).norm() <= eps
            }
            Hull::Polygon(vertices) => vertices.iter().circular_tuple_windows().all(|(a, b)| {
                turn(a, b, p) >= -eps * (*b - *a).norm()
            }),
        }
    }

    /// Mirror about the x-axis (for Y-down scenes), keeping counter-clockwise order.
    pub fn flip_y(&self) -> Hull {
        match self {
            Hull::Empty => Hull::Empty,
            _ => {
                let flipped: Vec<R2<f64>> = self.vertices().iter().map(|v| R2 { x: v.x, y: -v.y }).collect();
                convex_hull(&flipped)
            }
        }
    }
}

impl Display for Hull {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}[{}]", self.kind(), self.vertices().iter().join(", "))
    }
}

#[derive(Serialize)]
struct HullRepr<'a> {
    kind: &'static str,
    vertices: &'a [R2<f64>],
}

impl Serialize for Hull {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        HullRepr { kind: self.kind(), vertices: self.vertices() }.serialize(serializer)
    }
}

#[cfg(test)]
mod tests;
