use rand::{Rng, SeedableRng, rngs::StdRng};

use super::vtest::VTest;

pub fn square() -> Vec<VTest> {
    vec![
        (0.0, 0.0).into(),
        (10.0, 0.0).into(),
        (10.0, 10.0).into(),
        (0.0, 10.0).into(),
    ]
}

pub fn star() -> Vec<VTest> {
    vec![
        (1.0, 0.0).into(),
        (2.0, 2.0).into(),
        (0.0, 1.0).into(),
        (-2.0, 2.0).into(),
        (-1.0, 0.0).into(),
        (-2.0, -2.0).into(),
        (0.0, -1.0).into(),
        (2.0, -2.0).into(),
    ]
}

pub fn half_frame() -> Vec<VTest> {
    vec![
        (0., 0.).into(), (0.05, 0.05).into(), (0.95, 0.05).into(), (0.95, 0.95).into(), (1., 1.).into(), (1., 0.).into()
    ]
}

// Concave quadrilateral, reflex at (1, 1)
pub fn arrowhead() -> Vec<VTest> {
    vec![(0., 0.).into(), (4., 2.).into(), (1., 1.).into(), (0., 4.).into()]
}

pub fn all() -> Vec<Vec<VTest>> {
    vec![square(), star(), half_frame(), arrowhead()]
}

/// Regular `n`-gon centered on the origin, counterclockwise
pub fn regular(n: usize, radius: f64) -> Vec<[f64; 2]> {
    (0..n).map(|i| {
        let theta = std::f64::consts::PI * 2. * (i as f64) / (n as f64);
        let (y, x) = theta.sin_cos();
        [x * radius, y * radius]
    }).collect()
}

/// Star-shaped polygon with `n` vertices at increasing angles and random radii, counterclockwise
pub fn random_star(n: usize, seed: u64) -> Vec<[f64; 2]> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut angles: Vec<f64> = (0..n).map(|i| (i as f64 + rng.gen_range(0.1f64..0.9)) / (n as f64)).collect();
    angles.sort_by(|a, b| a.partial_cmp(b).unwrap());
    angles.into_iter().map(|t| {
        let r: f64 = rng.gen_range(0.5..1.5);
        let (y, x) = (std::f64::consts::PI * 2. * t).sin_cos();
        [x * r, y * r]
    }).collect()
}
