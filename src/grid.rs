use ndarray::{Array2, ArrayView2, ArrayViewMut2, ShapeBuilder};

pub const DEFAULT_NX: usize = 50;
pub const DEFAULT_NY: usize = 50;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Phi,
    Rhs,
}
impl Field {
    pub fn name(&self) -> &'static str {
        match self {
            Field::Phi => "phi",
            Field::Rhs => "rhs",
        }
    }
}

/// Uniform mesh on the unit square carrying the `phi` and `rhs` fields.
///
/// Node indices are 1-based (`1..=nx`, `1..=ny`) in the element accessors.
/// The backing storage is 0-based and column-major: node `(i, j)` sits at
/// offset `(i - 1) + (j - 1) * nx` of [`Grid::storage`].
#[derive(Clone, Debug)]
pub struct Grid {
    nx: usize,
    ny: usize,
    dx: f64,
    dy: f64,
    phi: Array2<f64>,
    rhs: Array2<f64>,
}
impl Default for Grid {
    fn default() -> Self {
        Self::new(DEFAULT_NX, DEFAULT_NY)
    }
}
impl Grid {
    pub fn new(nx: usize, ny: usize) -> Self {
        assert!(
            nx > 0 && ny > 0,
            "grid dimensions must be positive (nx={nx}, ny={ny})"
        );
        Self {
            nx,
            ny,
            dx: 1.0 / nx as f64,
            dy: 1.0 / ny as f64,
            phi: Array2::zeros((nx, ny).f()),
            rhs: Array2::zeros((nx, ny).f()),
        }
    }
    pub fn nx(&self) -> usize {
        self.nx
    }
    pub fn ny(&self) -> usize {
        self.ny
    }
    pub fn dx(&self) -> f64 {
        self.dx
    }
    pub fn dy(&self) -> f64 {
        self.dy
    }
    pub fn dims(&self) -> (usize, usize) {
        (self.nx, self.ny)
    }
    pub fn spacing(&self) -> (f64, f64) {
        (self.dx, self.dy)
    }
    pub fn node_num(&self) -> usize {
        self.nx * self.ny
    }
    /// Physical x coordinate of the 1-based node column `i`. Panics outside `1..=nx`.
    pub fn x_coord(&self, i: usize) -> f64 {
        assert!(
            (1..=self.nx).contains(&i),
            "node column {i} outside [1, {}]",
            self.nx
        );
        i as f64 * self.dx
    }
    /// Physical y coordinate of the 1-based node row `j`. Panics outside `1..=ny`.
    pub fn y_coord(&self, j: usize) -> f64 {
        assert!(
            (1..=self.ny).contains(&j),
            "node row {j} outside [1, {}]",
            self.ny
        );
        j as f64 * self.dy
    }
    #[inline]
    fn storage_index(&self, i: usize, j: usize) -> (usize, usize) {
        assert!(
            (1..=self.nx).contains(&i) && (1..=self.ny).contains(&j),
            "node ({i}, {j}) outside [1, {}] x [1, {}]",
            self.nx,
            self.ny
        );
        (i - 1, j - 1)
    }
    pub fn phi(&self, i: usize, j: usize) -> f64 {
        self.phi[self.storage_index(i, j)]
    }
    pub fn phi_mut(&mut self, i: usize, j: usize) -> &mut f64 {
        let idx = self.storage_index(i, j);
        &mut self.phi[idx]
    }
    pub fn rhs(&self, i: usize, j: usize) -> f64 {
        self.rhs[self.storage_index(i, j)]
    }
    pub fn rhs_mut(&mut self, i: usize, j: usize) -> &mut f64 {
        let idx = self.storage_index(i, j);
        &mut self.rhs[idx]
    }
    pub fn field(&self, field: Field) -> ArrayView2<'_, f64> {
        match field {
            Field::Phi => self.phi.view(),
            Field::Rhs => self.rhs.view(),
        }
    }
    pub fn field_mut(&mut self, field: Field) -> ArrayViewMut2<'_, f64> {
        match field {
            Field::Phi => self.phi.view_mut(),
            Field::Rhs => self.rhs.view_mut(),
        }
    }
    /// Both fields at once, `(phi, rhs)`.
    pub fn fields_mut(&mut self) -> (ArrayViewMut2<'_, f64>, ArrayViewMut2<'_, f64>) {
        (self.phi.view_mut(), self.rhs.view_mut())
    }
    /// Contiguous column-major storage of `field`, `nx * ny` values long.
    /// The slice borrows the grid and cannot outlive it.
    pub fn storage(&self, field: Field) -> &[f64] {
        let array = match field {
            Field::Phi => &self.phi,
            Field::Rhs => &self.rhs,
        };
        array
            .as_slice_memory_order()
            .expect("field storage is always contiguous")
    }
    pub fn storage_mut(&mut self, field: Field) -> &mut [f64] {
        let array = match field {
            Field::Phi => &mut self.phi,
            Field::Rhs => &mut self.rhs,
        };
        array
            .as_slice_memory_order_mut()
            .expect("field storage is always contiguous")
    }
}
