use std::future::Future;

use crate::error::Result;

/// Where a snapshot body comes from.
///
/// `fetch` is the only suspension point of a load. It resolves to the raw
/// response body; decoding happens afterwards in the renderer.
pub trait SnapshotSource {
    fn fetch(&self) -> impl Future<Output = Result<Vec<u8>>>;

    /// Where the body comes from, for log messages.
    fn describe(&self) -> String;
}

/// A body already held in memory.
#[derive(Debug, Clone)]
pub struct StaticSource {
    body: Vec<u8>,
}

impl StaticSource {
    pub fn new(body: impl Into<Vec<u8>>) -> Self {
        Self { body: body.into() }
    }
}

impl SnapshotSource for StaticSource {
    async fn fetch(&self) -> Result<Vec<u8>> {
        Ok(self.body.clone())
    }

    fn describe(&self) -> String {
        format!("{} in-memory bytes", self.body.len())
    }
}
