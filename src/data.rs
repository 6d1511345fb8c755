/*!
Raw data views and the code point read primitive.
*/
use std::fmt;
use std::marker::PhantomData;
use std::mem;
use std::slice;
use crate::error::{AccessError, Result};
use crate::kind::{CodePoint, CodeUnit, StorageKind};

/**
A read-only view of a text buffer's code units, starting at the first unit.

This is the safe counterpart to the `void *` a host hands out for its storage.  It carries only bytes; it does *not* know which kind it holds.  The kind must be obtained separately and passed to `read`, just as with the raw pointer.
*/
#[derive(Copy, Clone)]
pub struct RawData<'a> {
    ptr: *const u8,
    bytes: usize,
    _marker: PhantomData<&'a [u8]>,
}

// `RawData` is a `&[u8]` in disguise.
unsafe impl<'a> Send for RawData<'a> {}
unsafe impl<'a> Sync for RawData<'a> {}

impl<'a> RawData<'a> {
    /**
    Creates a view over a slice of code units.
    */
    pub fn from_units<U>(units: &'a [U]) -> Self where U: CodeUnit {
        RawData {
            ptr: units.as_ptr() as *const u8,
            bytes: mem::size_of_val(units),
            _marker: PhantomData,
        }
    }

    /**
    Creates a view over a slice of bytes.
    */
    pub fn from_bytes(bytes: &'a [u8]) -> Self {
        RawData::from_units(bytes)
    }

    /**
    Creates a view from a raw pointer and a length in *bytes*.

    # Safety

    `ptr` must be non-null and valid for reads of `bytes` bytes for the whole of `'a`, and the memory must not be mutated during that time.  It need not be aligned.
    */
    pub unsafe fn from_raw_parts(ptr: *const u8, bytes: usize) -> Self {
        debug_assert!(!ptr.is_null());
        RawData {
            ptr: ptr,
            bytes: bytes,
            _marker: PhantomData,
        }
    }

    /// Pointer to the first code unit.
    #[inline]
    pub fn as_ptr(&self) -> *const u8 {
        self.ptr
    }

    /// The viewed memory as bytes, in native byte order.
    pub fn as_bytes(&self) -> &'a [u8] {
        unsafe { slice::from_raw_parts(self.ptr, self.bytes) }
    }

    /// Length of the view in bytes.
    #[inline]
    pub fn byte_len(&self) -> usize {
        self.bytes
    }

    /**
    Number of whole units of the given kind in this view.

    Trailing bytes that do not make up a complete unit are ignored.
    */
    #[inline]
    pub fn len_units(&self, kind: StorageKind) -> usize {
        self.bytes / kind.width()
    }
}

impl<'a> fmt::Debug for RawData<'a> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.debug_struct("RawData")
            .field("ptr", &self.ptr)
            .field("bytes", &self.bytes)
            .finish()
    }
}

/**
Reads the code point at `index`, treating `data` as an array of units of `kind`.

The unit at byte offset `index * kind.width()` is loaded in native byte order and zero-extended.  No validation of the value is done.

Returns `OutOfBounds` if the unit would extend past the end of `data`.
*/
pub fn read(kind: StorageKind, data: RawData, index: usize) -> Result<CodePoint> {
    let len = data.len_units(kind);
    if index >= len {
        return Err(AccessError::OutOfBounds { index: index, len: len });
    }

    let at = index * kind.width();
    let b = data.as_bytes();
    let cp = match kind {
        StorageKind::OneByte => b[at] as CodePoint,
        StorageKind::TwoByte => u16::from_ne_bytes([b[at], b[at + 1]]) as CodePoint,
        StorageKind::FourByte => u32::from_ne_bytes([b[at], b[at + 1], b[at + 2], b[at + 3]]),
    };
    Ok(cp)
}

/**
Reads the code point at `index` without any bounds check.

This is the hot path used once a caller has established `index < len` by other means.

# Safety

`ptr` must be valid for reads of `(index + 1) * kind.width()` bytes.
*/
#[inline]
pub unsafe fn read_unchecked(kind: StorageKind, ptr: *const u8, index: usize) -> CodePoint {
    let at = ptr.add(index * kind.width());
    match kind {
        StorageKind::OneByte => *at as CodePoint,
        StorageKind::TwoByte => (at as *const u16).read_unaligned() as CodePoint,
        StorageKind::FourByte => (at as *const u32).read_unaligned(),
    }
}
