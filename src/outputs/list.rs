/// Storage for triangles whose corners are of type `V`.
///
/// The flat `Vec<V>` layout (three entries per triangle) is the usual GPU index buffer.
pub trait List<V> {
    fn push_triangle(&mut self, triangle: [V; 3]);

    /// Number of whole triangles stored
    fn triangle_count(&self) -> usize;

    /// Drop triangles from the end until `count` remain
    fn truncate_triangles(&mut self, count: usize);

    fn reserve_triangles(&mut self, _additional: usize) { }
}

impl<V> List<V> for Vec<V> {
    fn push_triangle(&mut self, triangle: [V; 3]) {
        self.extend(triangle);
    }

    fn triangle_count(&self) -> usize {
        self.len() / 3
    }

    fn truncate_triangles(&mut self, count: usize) {
        self.truncate(count * 3);
    }

    fn reserve_triangles(&mut self, additional: usize) {
        self.reserve(additional * 3);
    }
}

impl<V> List<V> for Vec<[V; 3]> {
    fn push_triangle(&mut self, triangle: [V; 3]) {
        self.push(triangle);
    }

    fn triangle_count(&self) -> usize {
        self.len()
    }

    fn truncate_triangles(&mut self, count: usize) {
        self.truncate(count);
    }

    fn reserve_triangles(&mut self, additional: usize) {
        self.reserve(additional);
    }
}

impl<V> List<V> for Vec<(V, V, V)> {
    fn push_triangle(&mut self, [a, b, c]: [V; 3]) {
        self.push((a, b, c));
    }

    fn triangle_count(&self) -> usize {
        self.len()
    }

    fn truncate_triangles(&mut self, count: usize) {
        self.truncate(count);
    }

    fn reserve_triangles(&mut self, additional: usize) {
        self.reserve(additional);
    }
}

// Lets a caller keep ownership and append across several triangulations
impl<V, L: List<V> + ?Sized> List<V> for &mut L {
    fn push_triangle(&mut self, triangle: [V; 3]) {
        L::push_triangle(self, triangle)
    }

    fn triangle_count(&self) -> usize {
        L::triangle_count(self)
    }

    fn truncate_triangles(&mut self, count: usize) {
        L::truncate_triangles(self, count)
    }

    fn reserve_triangles(&mut self, additional: usize) {
        L::reserve_triangles(self, additional)
    }
}
