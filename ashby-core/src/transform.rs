use crate::r2::R2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transform {
    Translate(R2<f64>),
    Scale(R2<f64>),
    /// Counter-clockwise, radians.
    Rotate(f64),
}

/// Transforms applied in order.
#[derive(Debug, Clone, PartialEq)]
pub struct Projection(pub Vec<Transform>);

pub trait CanTransform {
    type Output;
    fn transform(&self, t: &Transform) -> Self::Output;
}

pub trait CanProject {
    type Output;
    fn apply(&self, projection: &Projection) -> Self::Output;
}

impl<T: CanTransform<Output = T> + Clone> CanProject for T {
    type Output = T;
    fn apply(&self, projection: &Projection) -> T {
        projection.0.iter().fold(self.clone(), |v, t| v.transform(t))
    }
}

impl CanTransform for R2<f64> {
    type Output = R2<f64>;
    fn transform(&self, t: &Transform) -> R2<f64> {
        match t {
            Transform::Translate(v) => *self + *v,
            Transform::Scale(v) => *self * *v,
            Transform::Rotate(theta) => {
                let (sin, cos) = theta.sin_cos();
                R2 {
                    x: self.x * cos - self.y * sin,
                    y: self.x * sin + self.y * cos,
                }
            }
        }
    }
}
