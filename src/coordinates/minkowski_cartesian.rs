//! Minkowski spacetime, Cartesian coordinates.
//!
//! Line element: `ds² = -dt² + dx² + dy² + dz²`. Space sections are flat,
//! so cell centers are face midpoints, interface areas and cell volumes are
//! plain products of face widths, and every curvature source term vanishes
//! identically.

use crate::coordinates::CoordinateSystem;
use crate::mesh::MeshBlock;
use crate::types::{Axis, Real};

/// Geometry provider for the flat Minkowski/Cartesian metric.
///
/// Constructing one derives the block's volume-center positions and
/// spacings in place, then keeps a shared reference to the block for the
/// lifetime of the queries. Two scratch buffers sized to one x1 row
/// (`extent(x1) + 2·ghost`) are allocated once and reused, so call sites
/// that hold no destination buffer of their own stay allocation-free in
/// the per-timestep path.
///
/// # Example
///
/// ```
/// use fvgeom_rs::coordinates::{CoordinateSystem, MinkowskiCartesian};
/// use fvgeom_rs::mesh::MeshBlock;
/// use fvgeom_rs::types::Axis;
///
/// let mut block = MeshBlock::builder()
///     .x1_faces(vec![0.0, 0.5, 1.0, 1.5])
///     .build()
///     .unwrap();
/// let coords = MinkowskiCartesian::new(&mut block);
///
/// assert_eq!(coords.block().centers(Axis::X1), &[0.25, 0.75, 1.25]);
/// assert_eq!(coords.block().center_spacings(Axis::X1), &[0.5, 0.5]);
/// ```
pub struct MinkowskiCartesian<'a> {
    /// The block this geometry was derived for; never outlived.
    block: &'a MeshBlock,
    /// Scratch row for face areas.
    face_area: Vec<Real>,
    /// Scratch row for cell volumes.
    cell_volume: Vec<Real>,
}

impl<'a> MinkowskiCartesian<'a> {
    /// Derive the block's volume-averaged positions and spacings, then
    /// wrap the block.
    ///
    /// Centers are the arithmetic mean of the bounding faces; spacings are
    /// differences of adjacent centers. A degenerate axis keeps the
    /// midpoint rule for its single center but takes its spacing directly
    /// from the face-to-face width, since no adjacent center exists to
    /// difference against.
    ///
    /// The block's face-position arrays must already be valid over the
    /// whole ghost-extended range; that is a precondition, not a checked
    /// error.
    pub fn new(block: &'a mut MeshBlock) -> Self {
        for axis in Axis::ALL {
            derive_axis_geometry(block, axis);
        }
        let n_row = block.n_cells(Axis::X1);

        // Downgrade to a shared borrow: the derived arrays are final now.
        let block: &'a MeshBlock = block;
        Self {
            block,
            face_area: vec![0.0; n_row],
            cell_volume: vec![0.0; n_row],
        }
    }

    /// [`CoordinateSystem::face_area_x1`] into the owned scratch row.
    ///
    /// Returns the whole row; entries outside `[il, iu]` are stale.
    pub fn face_area_x1_scratch(&mut self, k: usize, j: usize, il: usize, iu: usize) -> &[Real] {
        let mut row = std::mem::take(&mut self.face_area);
        self.face_area_x1(k, j, il, iu, &mut row);
        self.face_area = row;
        &self.face_area
    }

    /// [`CoordinateSystem::face_area_x2`] into the owned scratch row.
    pub fn face_area_x2_scratch(&mut self, k: usize, j: usize, il: usize, iu: usize) -> &[Real] {
        let mut row = std::mem::take(&mut self.face_area);
        self.face_area_x2(k, j, il, iu, &mut row);
        self.face_area = row;
        &self.face_area
    }

    /// [`CoordinateSystem::face_area_x3`] into the owned scratch row.
    pub fn face_area_x3_scratch(&mut self, k: usize, j: usize, il: usize, iu: usize) -> &[Real] {
        let mut row = std::mem::take(&mut self.face_area);
        self.face_area_x3(k, j, il, iu, &mut row);
        self.face_area = row;
        &self.face_area
    }

    /// [`CoordinateSystem::cell_volume`] into the owned scratch row.
    pub fn cell_volume_scratch(&mut self, k: usize, j: usize, il: usize, iu: usize) -> &[Real] {
        let mut row = std::mem::take(&mut self.cell_volume);
        self.cell_volume(k, j, il, iu, &mut row);
        self.cell_volume = row;
        &self.cell_volume
    }

    #[inline]
    fn debug_check_row(&self, k: usize, j: usize, il: usize, iu: usize, out_len: usize) {
        debug_assert!(il <= iu, "empty index range: il={il} > iu={iu}");
        debug_assert!(iu < self.block.n_cells(Axis::X1), "iu={iu} outside x1 range");
        debug_assert!(j < self.block.n_cells(Axis::X2), "j={j} outside x2 range");
        debug_assert!(k < self.block.n_cells(Axis::X3), "k={k} outside x3 range");
        debug_assert!(out_len > iu, "output buffer too short for iu={iu}");
    }
}

impl CoordinateSystem for MinkowskiCartesian<'_> {
    #[inline]
    fn block(&self) -> &MeshBlock {
        self.block
    }

    /// ΔA = Δy · Δz, constant across the row for this metric.
    fn face_area_x1(&self, k: usize, j: usize, il: usize, iu: usize, areas: &mut [Real]) {
        self.debug_check_row(k, j, il, iu, areas.len());
        let (ay, az) = Axis::X1.transverse();
        let delta_y = self.block.face_width(ay, j);
        let delta_z = self.block.face_width(az, k);
        for area in &mut areas[il..=iu] {
            *area = delta_y * delta_z;
        }
    }

    /// ΔA = Δx(i) · Δz.
    fn face_area_x2(&self, k: usize, j: usize, il: usize, iu: usize, areas: &mut [Real]) {
        self.debug_check_row(k, j, il, iu, areas.len());
        let delta_z = self.block.face_width(Axis::X3, k);
        for i in il..=iu {
            areas[i] = self.block.face_width(Axis::X1, i) * delta_z;
        }
    }

    /// ΔA = Δx(i) · Δy.
    fn face_area_x3(&self, k: usize, j: usize, il: usize, iu: usize, areas: &mut [Real]) {
        self.debug_check_row(k, j, il, iu, areas.len());
        let delta_y = self.block.face_width(Axis::X2, j);
        for i in il..=iu {
            areas[i] = self.block.face_width(Axis::X1, i) * delta_y;
        }
    }

    /// ΔV = Δx(i) · Δy · Δz.
    fn cell_volume(&self, k: usize, j: usize, il: usize, iu: usize, volumes: &mut [Real]) {
        self.debug_check_row(k, j, il, iu, volumes.len());
        let (ay, az) = Axis::X1.transverse();
        let delta_y = self.block.face_width(ay, j);
        let delta_z = self.block.face_width(az, k);
        for i in il..=iu {
            volumes[i] = self.block.face_width(Axis::X1, i) * delta_y * delta_z;
        }
    }

    /// All connection coefficients vanish: nothing is added to `sources`.
    fn coordinate_source_terms(&self, _k: usize, _j: usize, _prim: &[Real], _sources: &mut [Real]) {}
}

/// Fill one axis of the block's volume-center and spacing arrays.
fn derive_axis_geometry(block: &mut MeshBlock, axis: Axis) {
    let n = block.n_cells(axis);
    if n == 1 {
        // No extent: midpoint center, face-to-face spacing.
        let center = 0.5 * (block.face(axis, 0) + block.face(axis, 1));
        block.set_center(axis, 0, center);
        block.set_center_spacing(axis, 0, block.face_width(axis, 0));
        return;
    }
    for i in 0..n {
        let center = 0.5 * (block.face(axis, i) + block.face(axis, i + 1));
        block.set_center(axis, i, center);
    }
    for i in 0..n - 1 {
        let spacing = block.center(axis, i + 1) - block.center(axis, i);
        block.set_center_spacing(axis, i, spacing);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block_3d() -> MeshBlock {
        MeshBlock::builder()
            .ghost(1)
            .x1_faces(vec![0.0, 0.5, 1.5, 3.0])
            .x2(0.0, 4.0, 2)
            .x3(0.0, 3.0, 3)
            .build()
            .unwrap()
    }

    #[test]
    fn test_centers_are_face_midpoints() {
        let mut block = block_3d();
        let coords = MinkowskiCartesian::new(&mut block);
        let block = coords.block();
        for axis in Axis::ALL {
            for i in 0..block.n_cells(axis) {
                let mid = 0.5 * (block.face(axis, i) + block.face(axis, i + 1));
                assert_eq!(block.center(axis, i), mid);
            }
        }
    }

    #[test]
    fn test_spacings_are_center_differences() {
        let mut block = block_3d();
        let coords = MinkowskiCartesian::new(&mut block);
        let block = coords.block();
        for axis in Axis::ALL {
            for i in 0..block.n_cells(axis) - 1 {
                let diff = block.center(axis, i + 1) - block.center(axis, i);
                assert_eq!(block.center_spacing(axis, i), diff);
            }
        }
    }

    #[test]
    fn test_degenerate_axis_spacing_is_face_width() {
        let mut block = MeshBlock::builder()
            .x1_faces(vec![-1.0, 1.0])
            .build()
            .unwrap();
        let coords = MinkowskiCartesian::new(&mut block);
        let block = coords.block();
        assert_eq!(block.center(Axis::X1, 0), 0.0);
        assert_eq!(block.center_spacing(Axis::X1, 0), 2.0);
        // The default x2/x3 axes are degenerate too.
        assert_eq!(block.center_spacing(Axis::X2, 0), 1.0);
        assert_eq!(block.center_spacing(Axis::X3, 0), 1.0);
    }

    #[test]
    fn test_area_x1_is_constant_across_row() {
        let mut block = block_3d();
        let coords = MinkowskiCartesian::new(&mut block);
        let n = coords.block().n_cells(Axis::X1);
        let dy = coords.block().face_width(Axis::X2, 2);
        let dz = coords.block().face_width(Axis::X3, 1);
        let mut areas = vec![0.0; n];
        coords.face_area_x1(1, 2, 0, n - 1, &mut areas);
        for &a in &areas {
            assert_eq!(a, dy * dz);
        }
    }

    #[test]
    fn test_area_x2_x3_vary_with_cell_width() {
        let mut block = block_3d();
        let coords = MinkowskiCartesian::new(&mut block);
        let block_ref = coords.block();
        let n = block_ref.n_cells(Axis::X1);
        let dy = block_ref.face_width(Axis::X2, 1);
        let dz = block_ref.face_width(Axis::X3, 2);

        let mut areas = vec![0.0; n];
        coords.face_area_x2(2, 1, 0, n - 1, &mut areas);
        for i in 0..n {
            assert_eq!(areas[i], block_ref.face_width(Axis::X1, i) * dz);
        }

        coords.face_area_x3(2, 1, 0, n - 1, &mut areas);
        for i in 0..n {
            assert_eq!(areas[i], block_ref.face_width(Axis::X1, i) * dy);
        }
    }

    #[test]
    fn test_volume_is_product_of_widths() {
        let mut block = block_3d();
        let coords = MinkowskiCartesian::new(&mut block);
        let block_ref = coords.block();
        let n = block_ref.n_cells(Axis::X1);
        let mut volumes = vec![0.0; n];
        coords.cell_volume(0, 1, 0, n - 1, &mut volumes);
        for i in 0..n {
            let expected = block_ref.face_width(Axis::X1, i)
                * block_ref.face_width(Axis::X2, 1)
                * block_ref.face_width(Axis::X3, 0);
            assert_eq!(volumes[i], expected);
        }
    }

    #[test]
    fn test_partial_range_leaves_rest_untouched() {
        let mut block = block_3d();
        let coords = MinkowskiCartesian::new(&mut block);
        let n = coords.block().n_cells(Axis::X1);
        let mut volumes = vec![-1.0; n];
        coords.cell_volume(0, 0, 1, 2, &mut volumes);
        assert_eq!(volumes[0], -1.0);
        assert!(volumes[1] > 0.0 && volumes[2] > 0.0);
        for &v in &volumes[3..] {
            assert_eq!(v, -1.0);
        }
    }

    #[test]
    fn test_scratch_rows_match_caller_buffers() {
        let mut block = block_3d();
        let mut coords = MinkowskiCartesian::new(&mut block);
        let n = coords.block().n_cells(Axis::X1);

        let mut expected = vec![0.0; n];
        coords.face_area_x2(1, 1, 0, n - 1, &mut expected);
        assert_eq!(coords.face_area_x2_scratch(1, 1, 0, n - 1), &expected[..]);

        coords.cell_volume(1, 1, 0, n - 1, &mut expected);
        assert_eq!(coords.cell_volume_scratch(1, 1, 0, n - 1), &expected[..]);
    }

    #[test]
    fn test_source_terms_leave_output_untouched() {
        let mut block = block_3d();
        let coords = MinkowskiCartesian::new(&mut block);
        let n = coords.block().n_cells(Axis::X1);
        let prim: Vec<Real> = (0..5 * n).map(|i| i as Real).collect();
        let mut sources = vec![0.0; 5 * n];
        coords.coordinate_source_terms(1, 1, &prim, &mut sources);
        assert!(sources.iter().all(|&s| s == 0.0));
    }
}
