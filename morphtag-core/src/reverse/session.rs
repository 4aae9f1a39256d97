use crate::error::{EngineError, EngineResult};
use crate::types::{NativeTag, TargetMarker};

use super::ReverseEngine;

/// Scoped engine handle
///
/// The handle is destroyed when the session is dropped, whichever way the
/// enclosing scope is left.
pub struct EngineSession<'e, E: ReverseEngine> {
    engine: &'e E,
    handle: Option<E::Handle>,
    count: usize,
}

impl<'e, E: ReverseEngine> EngineSession<'e, E> {
    pub fn open(engine: &'e E) -> EngineResult<Self> {
        let handle = engine.create()?;
        Ok(Self {
            engine,
            handle: Some(handle),
            count: 0,
        })
    }

    /// Submit a marker list; returns the number of candidate tags
    pub fn submit(&mut self, markers: &[TargetMarker]) -> EngineResult<usize> {
        let markers: Vec<&str> = markers.iter().map(TargetMarker::as_str).collect();
        let handle = self
            .handle
            .as_mut()
            .ok_or_else(|| EngineError::Convert("session already closed".to_string()))?;

        self.count = 0;
        self.count = self.engine.convert(handle, &markers)?;
        Ok(self.count)
    }

    /// Number of candidates produced by the last submission
    pub fn count(&self) -> usize {
        self.count
    }

    /// Candidate `index` of the last submission
    pub fn variant(&self, index: usize) -> EngineResult<NativeTag> {
        if index >= self.count {
            return Err(EngineError::FetchOutOfRange {
                index,
                count: self.count,
            });
        }
        let handle = self
            .handle
            .as_ref()
            .ok_or_else(|| EngineError::Convert("session already closed".to_string()))?;

        self.engine.fetch(handle, index).map(NativeTag::new)
    }

    /// Every candidate of the last submission, in engine order
    pub fn variants(&self) -> EngineResult<Vec<NativeTag>> {
        (0..self.count).map(|index| self.variant(index)).collect()
    }
}

impl<E: ReverseEngine> Drop for EngineSession<'_, E> {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            self.engine.destroy(handle);
        }
    }
}
