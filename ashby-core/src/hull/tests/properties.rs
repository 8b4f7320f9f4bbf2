use rand::{rngs::StdRng, Rng, SeedableRng};
use test_log::test;

use crate::{mode::{RotationMode, ScaleMode}, sample::BoundarySampler};

use super::super::*;

fn random_ellipses(rng: &mut StdRng, n: usize) -> Vec<EllipseGeometry> {
    (0..n)
        .map(|_| {
            EllipseGeometry::new(
                rng.gen_range(-50. ..50.),
                rng.gen_range(-50. ..50.),
                rng.gen_range(0.1..20.),
                rng.gen_range(0.1..20.),
            )
            .with_rotation(rng.gen_range(-180. ..180.))
        })
        .collect()
}

fn modes() -> Vec<PlotCoordinateMode> {
    vec![
        PlotCoordinateMode::default().with_scale(ScaleMode::Linear).with_resolution(50).with_expansion_ratio(1.),
        PlotCoordinateMode::default().with_resolution(7).with_expansion_ratio(2.5),
        PlotCoordinateMode::default().with_rotation(RotationMode::Apply),
    ]
}

#[test]
fn vertices_are_samples_and_samples_are_contained() {
    let mut rng = StdRng::seed_from_u64(0);
    for mode in modes() {
        let sampler = BoundarySampler::try_from(&mode).unwrap();
        for n in [1, 2, 5, 20] {
            let ellipses = random_ellipses(&mut rng, n);
            let samples: Vec<R2<f64>> = ellipses.iter().flat_map(|e| sampler.sample(e)).collect();
            let hull = compute_hull(&ellipses, &mode).unwrap();
            assert!(matches!(hull, Hull::Polygon(_)), "{}", hull);
            assert!(hull.area() > 0.);
            for v in hull.vertices() {
                assert!(samples.contains(v), "hull vertex {} is not a sample", v);
            }
            for p in &samples {
                assert!(hull.contains(p, 1e-9), "sample {} outside hull {}", p, hull);
            }
        }
    }
}

#[test]
fn strictly_convex_without_duplicates() {
    let mut rng = StdRng::seed_from_u64(1);
    let mode = PlotCoordinateMode::default().with_resolution(30);
    for _ in 0..20 {
        let ellipses = random_ellipses(&mut rng, 8);
        let hull = compute_hull(&ellipses, &mode).unwrap();
        let vs = hull.vertices();
        for i in 0..vs.len() {
            let (a, b, c) = (vs[i], vs[(i + 1) % vs.len()], vs[(i + 2) % vs.len()]);
            assert_ne!(a, b);
            assert!((b - a).cross(&(c - a)) > 0.);
        }
    }
}

#[test]
fn point_order_does_not_matter() {
    let mut rng = StdRng::seed_from_u64(2);
    let points: Vec<R2<f64>> = (0..500).map(|_| R2::new(rng.gen_range(-1. ..1.), rng.gen_range(-1. ..1.))).collect();
    let mut reversed = points.clone();
    reversed.reverse();
    assert_eq!(convex_hull(&points), convex_hull(&reversed));
}
