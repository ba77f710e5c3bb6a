pub mod polygon;
mod load_polygon;
mod vtest;
use std::{env, path};

pub use vtest::VTest;
pub use load_polygon::load_polygon;

pub fn polygons_path() -> path::PathBuf {
    path::Path::new(&env::var("CARGO_MANIFEST_DIR").unwrap()).join("resources").join("polygons")
}

/// Route `log` output through env_logger, controlled by `RUST_LOG`. Safe to call from every test.
pub fn init_logging() {
    drop(env_logger::try_init());
}

/// Sum of the absolute areas of the triangles in an indexed triangle list
pub fn triangle_area(polygon: &[[f64; 2]], indices: &[usize]) -> f64 {
    indices.chunks_exact(3).map(|t| {
        let (a, b, c) = (polygon[t[0]], polygon[t[1]], polygon[t[2]]);
        ((b[0] - a[0]) * (c[1] - a[1]) - (b[1] - a[1]) * (c[0] - a[0])).abs() / 2.
    }).sum()
}
