pub mod snapshot;

pub use snapshot::{AllocationSample, AllocationSnapshot, GridPosition};
