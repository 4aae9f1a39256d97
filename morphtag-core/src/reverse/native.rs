//! Bindings to `libtagset-converter`
//!
//! The library keeps a single global converter, so sessions are serialised
//! through a process-wide lock held for the lifetime of each handle.
//!
//! # Safety
//!
//! All extern functions are unsafe. [`NativeEngine`] only calls them while
//! holding the session lock, between `createConverter` and `removeConverter`.

use std::sync::{Mutex, MutexGuard};

use super::ReverseEngine;
use crate::error::{EngineError, EngineResult};

#[cfg(windows)]
type WChar = u16;
#[cfg(not(windows))]
type WChar = i32;

#[link(name = "tagset-converter")]
extern "C" {
    fn createConverter();

    /// Returns the number of variants produced for `markers`
    fn convert(markers: *const *const WChar, count: usize) -> usize;

    /// Variant `index` of the last `convert`, valid until the next call
    fn requestConvertReturnValue(index: usize) -> *const WChar;

    fn removeConverter();
}

static SESSION_LOCK: Mutex<()> = Mutex::new(());

/// Reverse engine backed by the native converter library
#[derive(Debug, Default, Clone, Copy)]
pub struct NativeEngine;

/// Exclusive access to the global converter
pub struct NativeHandle {
    _guard: MutexGuard<'static, ()>,
}

impl NativeEngine {
    pub fn new() -> Self {
        Self
    }
}

impl ReverseEngine for NativeEngine {
    type Handle = NativeHandle;

    fn create(&self) -> EngineResult<NativeHandle> {
        // A poisoned lock only means another session panicked; its Drop still
        // removed the converter.
        let guard = SESSION_LOCK
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        // SAFETY: the session lock is held, no other converter is live
        unsafe { createConverter() };
        tracing::trace!("native converter created");

        Ok(NativeHandle { _guard: guard })
    }

    fn convert(&self, _handle: &mut NativeHandle, markers: &[&str]) -> EngineResult<usize> {
        let encoded = markers
            .iter()
            .map(|marker| encode(marker))
            .collect::<EngineResult<Vec<_>>>()?;
        let pointers: Vec<*const WChar> = encoded.iter().map(|m| m.as_ptr()).collect();

        // SAFETY: every pointer refers to a NUL-terminated buffer in `encoded`,
        // which outlives the call
        let count = unsafe { convert(pointers.as_ptr(), pointers.len()) };
        Ok(count)
    }

    fn fetch(&self, _handle: &NativeHandle, index: usize) -> EngineResult<String> {
        // SAFETY: the caller range-checks `index` against the last convert
        let ptr = unsafe { requestConvertReturnValue(index) };
        if ptr.is_null() {
            return Err(EngineError::Encoding(format!(
                "engine returned null for variant {index}"
            )));
        }

        // SAFETY: non-null return values are NUL-terminated and stay valid
        // until the next call into the library
        unsafe { decode(ptr) }
    }

    fn destroy(&self, handle: NativeHandle) {
        // SAFETY: the handle proves createConverter ran under the lock we hold
        unsafe { removeConverter() };
        tracing::trace!("native converter removed");
        drop(handle);
    }
}

fn encode(marker: &str) -> EngineResult<Vec<WChar>> {
    if marker.contains('\0') {
        return Err(EngineError::InvalidMarker(marker.to_string()));
    }

    #[cfg(windows)]
    let mut wide: Vec<WChar> = marker.encode_utf16().collect();
    #[cfg(not(windows))]
    let mut wide: Vec<WChar> = marker.chars().map(|c| c as u32 as WChar).collect();

    wide.push(0);
    Ok(wide)
}

/// # Safety
///
/// `ptr` must point to a NUL-terminated wide string
unsafe fn decode(ptr: *const WChar) -> EngineResult<String> {
    let mut len = 0;
    while *ptr.add(len) != 0 {
        len += 1;
    }
    let units = std::slice::from_raw_parts(ptr, len);

    #[cfg(windows)]
    {
        String::from_utf16(units).map_err(|e| EngineError::Encoding(e.to_string()))
    }
    #[cfg(not(windows))]
    {
        units
            .iter()
            .map(|&unit| {
                char::from_u32(unit as u32)
                    .ok_or_else(|| EngineError::Encoding(format!("invalid code point {unit:#x}")))
            })
            .collect()
    }
}
