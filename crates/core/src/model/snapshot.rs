/// Normalized occupancy of one allocation unit, nominally in [0,1].
pub type AllocationSample = f64;

/// Linearized view of the allocation region at one instant.
///
/// Index order is significant: sample `i` is drawn at
/// [`GridPosition::of(i, columns)`](GridPosition::of). A snapshot is
/// immutable once decoded and is owned by a single render pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AllocationSnapshot {
    samples: Vec<AllocationSample>,
}

impl AllocationSnapshot {
    /// Wrap samples without range checks. Use
    /// [`decode_snapshot`](crate::parsers::decode_snapshot) for untrusted
    /// payloads.
    pub fn new(samples: Vec<AllocationSample>) -> Self {
        Self { samples }
    }

    pub fn samples(&self) -> &[AllocationSample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Number of grid rows needed at `columns` cells per row.
    pub fn rows(&self, columns: usize) -> usize {
        if columns == 0 {
            return 0;
        }
        self.samples.len().div_ceil(columns)
    }

    /// Samples paired with their grid position.
    pub fn cells(
        &self,
        columns: usize,
    ) -> impl Iterator<Item = (GridPosition, AllocationSample)> + '_ {
        self.samples
            .iter()
            .enumerate()
            .map(move |(i, &v)| (GridPosition::of(i, columns), v))
    }
}

/// Column/row of a cell in the wrapped grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridPosition {
    pub column: usize,
    pub row: usize,
}

impl GridPosition {
    /// Position of sample `index` when wrapping at `columns` per row.
    ///
    /// `columns` must be non-zero; the config validation guarantees it for
    /// every path through the renderer.
    pub fn of(index: usize, columns: usize) -> Self {
        Self {
            column: index % columns,
            row: index / columns,
        }
    }
}
