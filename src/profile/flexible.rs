use std::fmt;
use crate::data::{self, RawData};
use crate::error::{AccessError, Result};
use crate::kind::{CodePoint, CodeUnit, StorageKind};
use super::Profile;

/**
Represents hosts where each buffer picks its own, narrowest possible, unit width.

A buffer must be ready before it can be read, and its kind must be fetched before each pass over it.
*/
pub enum FlexibleMultiwidth {}

impl Profile for FlexibleMultiwidth {
    type Handle<'a> = PackedText<'a>;

    fn debug_prefix() -> &'static str { "Flexible" }

    #[inline]
    fn is_ready(text: Self::Handle<'_>) -> bool {
        text.canonical.is_some()
    }

    fn kind(text: Self::Handle<'_>) -> Result<StorageKind> {
        text.canonical.map(|(kind, _)| kind).ok_or(AccessError::NotReady)
    }

    fn data<'a>(text: Self::Handle<'a>) -> Result<RawData<'a>> {
        text.canonical.map(|(_, data)| data).ok_or(AccessError::NotReady)
    }

    #[inline]
    fn read(kind: StorageKind, data: RawData, index: usize) -> Result<CodePoint> {
        data::read(kind, data, index)
    }
}

/**
Handle to a flexible host buffer.

A handle is either ready, in which case it refers to the canonical packed units along with their kind, or not ready, in which case there is nothing to read yet.  Materialising the canonical form is the host's job.
*/
#[derive(Copy, Clone)]
pub struct PackedText<'a> {
    canonical: Option<(StorageKind, RawData<'a>)>,
}

impl<'a> PackedText<'a> {
    /**
    Creates a ready handle over packed units.  The kind is that of `U`.
    */
    pub fn new<U>(units: &'a [U]) -> Self where U: CodeUnit {
        PackedText {
            canonical: Some((U::KIND, RawData::from_units(units))),
        }
    }

    /**
    Creates a ready handle over a view whose kind is supplied separately.

    The view's length need not be a multiple of the kind's width; trailing bytes are not part of the text.
    */
    pub fn from_raw(kind: StorageKind, data: RawData<'a>) -> Self {
        PackedText {
            canonical: Some((kind, data)),
        }
    }

    /**
    Creates a ready handle from a foreign pointer to `len` units of `kind`.

    If `ptr` is null, returns `None`.

    # Safety

    A non-null `ptr` must be valid for reads of `len * kind.width()` bytes for the whole of `'a`, and the memory must not be mutated during that time.
    */
    pub unsafe fn from_ptr(kind: StorageKind, ptr: *const u8, len: usize) -> Option<Self> {
        if ptr.is_null() {
            return None;
        }
        Some(PackedText::from_raw(kind, RawData::from_raw_parts(ptr, len * kind.width())))
    }

    /**
    Creates a handle whose canonical form does not exist yet.
    */
    pub fn not_ready() -> Self {
        PackedText {
            canonical: None,
        }
    }

    /**
    Returns the largest code point in the buffer, or `None` if it is empty.
    */
    pub fn max_code_point(&self) -> Result<Option<CodePoint>> {
        let (kind, data) = self.canonical.ok_or(AccessError::NotReady)?;
        let mut max = None;
        for i in 0..data.len_units(kind) {
            let cp = data::read(kind, data, i)?;
            max = Some(max.map_or(cp, |m: CodePoint| m.max(cp)));
        }
        Ok(max)
    }

    /**
    Checks whether the buffer uses the narrowest kind able to hold its contents.

    Flexible hosts are expected to always produce compact buffers.  An empty buffer is compact only if it uses one-byte units.
    */
    pub fn is_compact(&self) -> Result<bool> {
        let kind = FlexibleMultiwidth::kind(*self)?;
        let max = self.max_code_point()?.unwrap_or(0);
        Ok(StorageKind::narrowest_for(max) == kind)
    }
}

impl<'a> fmt::Debug for PackedText<'a> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match self.canonical {
            Some((kind, data)) => write!(fmt, "PackedText({}, {})", kind, data.len_units(kind)),
            None => write!(fmt, "PackedText(not ready)"),
        }
    }
}
