//! Reverse conversion (target markers -> native tags)
//!
//! The reverse direction is computed by an external engine. This module only
//! defines the contract such an engine has to satisfy and a consumer that
//! drives it through a scoped session:
//!
//! - `create` hands out a handle, which must always be paired with `destroy`
//! - `convert` submits an ordered marker list and returns the number of
//!   candidate native tags (one marker set may map to several tags)
//! - `fetch` retrieves candidate `i` for `0 <= i < count`
//!
//! With the `native-engine` feature, [`NativeEngine`] binds the contract to
//! the C entry points of `libtagset-converter`.

mod session;

#[cfg(feature = "native-engine")]
mod native;

use crate::error::EngineResult;
use crate::types::{NativeTag, TargetMarker};

pub use session::EngineSession;

#[cfg(feature = "native-engine")]
pub use native::NativeEngine;

/// Consumer contract of an external reverse-conversion engine
pub trait ReverseEngine {
    /// Opaque per-session handle
    type Handle;

    /// Acquire a converter handle
    fn create(&self) -> EngineResult<Self::Handle>;

    /// Submit markers; returns the number of candidate native tags
    fn convert(&self, handle: &mut Self::Handle, markers: &[&str]) -> EngineResult<usize>;

    /// Candidate `index` of the last conversion on this handle
    fn fetch(&self, handle: &Self::Handle, index: usize) -> EngineResult<String>;

    /// Release everything the engine holds for this handle
    fn destroy(&self, handle: Self::Handle);
}

/// Reverse converter driving an engine one scoped session per call
#[derive(Debug)]
pub struct ReverseConverter<E: ReverseEngine> {
    engine: E,
}

impl<E: ReverseEngine> ReverseConverter<E> {
    pub fn new(engine: E) -> Self {
        Self { engine }
    }

    /// All native tags the engine proposes for a marker list
    pub fn convert(&self, markers: &[TargetMarker]) -> EngineResult<Vec<NativeTag>> {
        let mut session = EngineSession::open(&self.engine)?;
        let count = session.submit(markers)?;
        tracing::debug!(markers = markers.len(), variants = count, "reverse conversion");
        session.variants()
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }
}

#[cfg(test)]
pub(crate) mod mock {
    use super::*;
    use crate::error::EngineError;
    use std::cell::{Cell, RefCell};
    use std::collections::HashMap;

    /// In-memory engine with a fixed marker-list -> variants table
    #[derive(Default)]
    pub struct MockEngine {
        pub table: HashMap<Vec<String>, Vec<String>>,
        pub fail_convert: bool,
        pub created: Cell<usize>,
        pub destroyed: Cell<usize>,
        pub last_handle: RefCell<Option<u32>>,
    }

    pub struct MockHandle {
        pub id: u32,
        pub variants: Vec<String>,
    }

    impl MockEngine {
        pub fn with_entry(mut self, markers: &[&str], variants: &[&str]) -> Self {
            self.table.insert(
                markers.iter().map(|m| m.to_string()).collect(),
                variants.iter().map(|v| v.to_string()).collect(),
            );
            self
        }

        pub fn balanced(&self) -> bool {
            self.created.get() == self.destroyed.get()
        }
    }

    impl ReverseEngine for MockEngine {
        type Handle = MockHandle;

        fn create(&self) -> EngineResult<MockHandle> {
            let id = self.created.get() as u32;
            self.created.set(self.created.get() + 1);
            *self.last_handle.borrow_mut() = Some(id);
            Ok(MockHandle {
                id,
                variants: Vec::new(),
            })
        }

        fn convert(&self, handle: &mut MockHandle, markers: &[&str]) -> EngineResult<usize> {
            if self.fail_convert {
                return Err(EngineError::Convert("engine rejected markers".to_string()));
            }
            let key: Vec<String> = markers.iter().map(|m| m.to_string()).collect();
            handle.variants = self.table.get(&key).cloned().unwrap_or_default();
            Ok(handle.variants.len())
        }

        fn fetch(&self, handle: &MockHandle, index: usize) -> EngineResult<String> {
            handle
                .variants
                .get(index)
                .cloned()
                .ok_or(EngineError::FetchOutOfRange {
                    index,
                    count: handle.variants.len(),
                })
        }

        fn destroy(&self, handle: MockHandle) {
            assert_eq!(*self.last_handle.borrow(), Some(handle.id));
            self.destroyed.set(self.destroyed.get() + 1);
        }
    }
}
