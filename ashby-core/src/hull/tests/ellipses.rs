use approx::assert_relative_eq;
use test_log::test;

use crate::{error::ConfigError, mode::RotationMode, sample::sample};

use super::super::*;

fn linear(resolution: usize, expansion_ratio: f64) -> PlotCoordinateMode {
    PlotCoordinateMode::linear().with_resolution(resolution).with_expansion_ratio(expansion_ratio)
}

#[test]
fn empty_input() {
    let hull = compute_hull(&[], &PlotCoordinateMode::default()).unwrap();
    assert_eq!(hull, Hull::Empty);
    assert!(hull.vertices().is_empty());
}

#[test]
fn single_ellipse() {
    let e = EllipseGeometry::new(10., 20., 4., 6.);
    let hull = compute_hull(&[e], &linear(200, 1.)).unwrap();
    assert!(matches!(hull, Hull::Polygon(_)));
    assert!(hull.len() <= 200);
    assert!(hull.len() > 100);
    assert_relative_eq!(hull.centroid().unwrap(), e.c, epsilon = 1e-9);
    // Inscribed polygon of an ellipse with semi-axes 2 and 3
    assert!(hull.area() < std::f64::consts::PI * 6.);
    assert_relative_eq!(hull.area(), std::f64::consts::PI * 6., epsilon = 1e-2);
}

#[test]
fn expansion_ratio() {
    let e = EllipseGeometry::new(0., 0., 2., 2.);
    let small = compute_hull(&[e], &linear(101, 1.)).unwrap();
    let large = compute_hull(&[e], &linear(101, 3.)).unwrap();
    assert_relative_eq!(large.area(), small.area() * 9., epsilon = 1e-9);
}

#[test]
fn two_disjoint_families() {
    let a = EllipseGeometry::new(0., 0., 2., 4.);
    let b = EllipseGeometry::new(100., 50., 6., 2.);
    let hull = compute_hull(&[a, b], &linear(64, 1.)).unwrap();

    let from_a = sample(&a, 64, 1.).unwrap();
    let from_b = sample(&b, 64, 1.).unwrap();
    assert!(hull.vertices().iter().any(|v| from_a.contains(v)));
    assert!(hull.vertices().iter().any(|v| from_b.contains(v)));
    assert!(hull.contains(&R2::new(50., 25.), 0.));
}

#[test]
fn enclosed_ellipse_contributes_nothing() {
    let outer = EllipseGeometry::new(0., 0., 10., 10.);
    let inner = EllipseGeometry::new(1., 1., 1., 1.);
    let mode = linear(50, 1.);
    assert_eq!(compute_hull(&[outer, inner], &mode), compute_hull(&[outer], &mode));
}

#[test]
fn idempotent() {
    let items = [
        EllipseGeometry::new(1.9, 3.1, 0.4, 0.3),
        EllipseGeometry::new(2.4, 2.8, 0.2, 0.5).with_rotation(30.),
        EllipseGeometry::new(2.1, 3.6, 0.3, 0.3),
    ];
    let mode = PlotCoordinateMode::default().with_rotation(RotationMode::Apply);
    assert_eq!(compute_hull(&items, &mode), compute_hull(&items, &mode));
}

#[test]
fn rotation_mode() {
    let e = EllipseGeometry::new(0., 0., 10., 2.).with_rotation(90.);
    let ignored = compute_hull(&[e], &linear(101, 1.)).unwrap();
    let applied = compute_hull(&[e], &linear(101, 1.).with_rotation(RotationMode::Apply)).unwrap();
    assert!(ignored.contains(&R2::new(4.9, 0.), 1e-9));
    assert!(!ignored.contains(&R2::new(0., 4.9), 1e-9));
    assert!(applied.contains(&R2::new(0., 4.9), 1e-9));
    assert!(!applied.contains(&R2::new(4.9, 0.), 1e-9));
    assert_relative_eq!(ignored.area(), applied.area(), epsilon = 1e-9);
}

#[test]
fn invalid_ellipse() {
    let items = [
        EllipseGeometry::new(0., 0., 1., 1.),
        EllipseGeometry::new(f64::NAN, 0., 1., 1.),
    ];
    let err = compute_hull(&items, &PlotCoordinateMode::default()).unwrap_err();
    match err {
        Error::Domain(DomainError::InvalidEllipse { index, source }) => {
            assert_eq!(index, 1);
            assert!(matches!(*source, DomainError::NonFinite { field: "x center", .. }));
        }
        err => panic!("unexpected error: {}", err),
    }
}

#[test]
fn overflowing_expansion() {
    // Finite ellipse whose 4x-expanded boundary passes f64::MAX
    let items = [
        EllipseGeometry::new(0., 0., 1., 1.),
        EllipseGeometry::new(1.5e308, 0., 2e307, 2.),
    ];
    assert_eq!(items[1].validate(), Ok(()));
    let err = compute_hull(&items, &linear(40, 4.)).unwrap_err();
    match err {
        Error::Domain(DomainError::InvalidEllipse { index, source }) => {
            assert_eq!(index, 1);
            assert_eq!(*source, DomainError::NonFinite { field: "boundary sample", value: f64::INFINITY });
        }
        err => panic!("unexpected error: {}", err),
    }
    // Without the expansion it fits
    assert!(compute_hull(&items, &linear(40, 1.)).is_ok());
}

#[test]
fn invalid_config() {
    let e = EllipseGeometry::new(0., 0., 1., 1.);
    assert_eq!(
        compute_hull(&[e], &PlotCoordinateMode::default().with_resolution(1)),
        Err(Error::Config(ConfigError::Resolution(1))),
    );
    assert_eq!(
        compute_hull(&[], &PlotCoordinateMode::default().with_expansion_ratio(0.)),
        Err(Error::Config(ConfigError::ExpansionRatio(0.))),
    );
}

#[test]
fn minimum_resolution() {
    // 3 samples over [0, 2π]: the first and last coincide, leaving a segment
    let e = EllipseGeometry::new(0., 0., 2., 2.);
    let hull = compute_hull(&[e], &linear(3, 1.)).unwrap();
    assert!(hull.is_degenerate());
    assert_eq!(hull.len(), 2);

    let hull = compute_hull(&[e], &linear(4, 1.)).unwrap();
    assert!(matches!(hull, Hull::Polygon(ref vs) if vs.len() == 3));
}
