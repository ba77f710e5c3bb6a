use crate::{Point2D, Polygon, contains, triangulate};

use super::util;

#[test]
fn square() {
    let polygon = util::polygon::square();
    assert!(contains(&polygon, &util::VTest::new(5., 5.)));
    assert!(!contains(&polygon, &util::VTest::new(15., 5.)));
    assert!(!contains(&polygon, &util::VTest::new(-5., 5.)));
    assert!(!contains(&polygon, &util::VTest::new(5., 15.)));
}

#[test]
fn boundary_is_deterministic() {
    let polygon = util::polygon::square();
    // Left and top edges are inside, right and bottom edges outside
    let cases = [
        ((10., 5.), false),
        ((0., 5.), true),
        ((5., 10.), true),
        ((5., 0.), false),
        ((0., 0.), false),
        ((10., 0.), false),
        ((10., 10.), false),
        ((0., 10.), true),
    ];
    for ((x, y), expected) in cases {
        let query = util::VTest::new(x, y);
        assert_eq!(contains(&polygon, &query), expected, "({}, {})", x, y);
        assert_eq!(contains(&polygon, &query), contains(&polygon, &query));
    }
}

#[test]
fn winding_independent() {
    let polygon = util::polygon::square();
    let reversed: Vec<_> = polygon.iter().rev().copied().collect();
    for (x, y) in [(5., 5.), (15., 5.), (10., 5.), (0., 5.), (5., 10.), (5., 0.)] {
        let query = util::VTest::new(x, y);
        assert_eq!(contains(&polygon, &query), contains(&reversed, &query), "({}, {})", x, y);
    }
}

#[test]
fn ray_through_vertex() {
    // The horizontal ray from each query passes exactly through the vertices at (-1, 0) and (1, 0)
    let diamond = vec![[0f64, -1.], [1., 0.], [0., 1.], [-1., 0.]];
    assert!(diamond.contains_point(&[0., 0.]));
    assert!(diamond.contains_point(&[0.5, 0.]));
    assert!(diamond.contains_point(&[-0.5, 0.]));
    assert!(!diamond.contains_point(&[-2., 0.]));
    assert!(!diamond.contains_point(&[2., 0.]));
    assert!(!diamond.contains_point(&[0., 2.]));
}

#[test]
fn concave() {
    let polygon = util::load_polygon(util::polygons_path().join("comb.txt").to_str().unwrap()).unwrap();
    assert!(contains(&polygon, &Point2D::new(0.5, 3.)));
    assert!(!contains(&polygon, &Point2D::new(1.5, 3.)));
    assert!(contains(&polygon, &Point2D::new(1.5, 0.5)));
    assert!(contains(&polygon, &Point2D::new(14.5, 4.9)));
    assert!(!contains(&polygon, &Point2D::new(15.5, 2.)));
}

#[test]
fn triangle_centroids_are_inside() {
    for seed in 0..10 {
        let polygon = util::polygon::random_star(30, seed);
        for t in triangulate(&polygon).chunks_exact(3) {
            let x = (polygon[t[0]][0] + polygon[t[1]][0] + polygon[t[2]][0]) / 3.;
            let y = (polygon[t[0]][1] + polygon[t[1]][1] + polygon[t[2]][1]) / 3.;
            assert!(contains(&polygon, &(x, y)), "Centroid of {:?} is outside", t);
        }
    }
}

#[test]
fn degenerate() {
    let empty: Vec<[f32; 2]> = Vec::new();
    assert!(!contains(&empty, &[0., 0.]));

    let segment = vec![[0f32, 0.], [1., 1.]];
    assert!(!contains(&segment, &[0., 0.]));
    assert!(!contains(&segment, &[0.5, 0.5]));

    let polygon = util::polygon::square();
    assert!(!contains(&polygon, &util::VTest::new(f32::NAN, 5.)));
}
