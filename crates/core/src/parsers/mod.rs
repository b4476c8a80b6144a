pub mod getalloc;

pub use getalloc::decode_snapshot;
