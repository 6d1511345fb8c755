use std::fmt;
use std::marker::PhantomData;
use std::slice;
use crate::data::{self, RawData};
use crate::error::Result;
use crate::ffi::{wchar_t, NativeUnit};
use crate::kind::{CodePoint, CodeUnit, StorageKind};
use super::Profile;

/**
A code unit type a legacy host might use for every buffer.

Only two- and four-byte units qualify.
*/
pub trait WideUnit: CodeUnit {}

impl WideUnit for u16 {}
impl WideUnit for u32 {}

/**
Represents hosts where every buffer is an array of fixed-width wide units.

There is no per-buffer kind and no readiness state: every handle is ready, and every handle reports the kind of `U`.  `U` defaults to the unit matching `wchar_t`, but a host that fixed a different width (say, two-byte units on a platform with a four-byte `wchar_t`) can name it explicitly.
*/
pub struct LegacyFixed<U = NativeUnit>(PhantomData<U>);

impl<U> Profile for LegacyFixed<U> where U: WideUnit {
    type Handle<'a> = WideText<'a, U>;

    fn debug_prefix() -> &'static str { "Legacy" }

    #[inline]
    fn is_ready(_text: Self::Handle<'_>) -> bool {
        true
    }

    #[inline]
    fn kind(_text: Self::Handle<'_>) -> Result<StorageKind> {
        Ok(U::KIND)
    }

    fn data<'a>(text: Self::Handle<'a>) -> Result<RawData<'a>> {
        Ok(RawData::from_units(text.units))
    }

    fn length(text: Self::Handle<'_>) -> Result<usize> {
        Ok(text.units.len())
    }

    /**
    The `kind` argument is ignored: the width is always that of `U`.
    */
    fn read(_kind: StorageKind, data: RawData, index: usize) -> Result<CodePoint> {
        data::read(U::KIND, data, index)
    }
}

/**
Handle to a legacy host buffer: a borrowed array of wide units.
*/
pub struct WideText<'a, U = NativeUnit> {
    units: &'a [U],
}

impl<'a, U> Clone for WideText<'a, U> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, U> Copy for WideText<'a, U> {}

impl<'a, U> WideText<'a, U> where U: WideUnit {
    pub fn new(units: &'a [U]) -> Self {
        WideText {
            units: units,
        }
    }

    /// The units this handle refers to.
    pub fn as_units(&self) -> &'a [U] {
        self.units
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

impl<'a> WideText<'a, NativeUnit> {
    /**
    Creates a handle from a slice of native wide characters.
    */
    pub fn from_wchars(wchars: &'a [wchar_t]) -> Self {
        // `NativeUnit` is the unsigned counterpart of `wchar_t`; see `ffi`.
        let units = unsafe { slice::from_raw_parts(wchars.as_ptr() as *const NativeUnit, wchars.len()) };
        WideText::new(units)
    }

    /**
    Creates a handle from a foreign pointer to `len` wide characters.

    If `ptr` is null, returns `None`.

    # Safety

    A non-null `ptr` must be aligned and valid for reads of `len` wide characters for the whole of `'a`, and the memory must not be mutated during that time.
    */
    pub unsafe fn from_ptr(ptr: *const wchar_t, len: usize) -> Option<Self> {
        if ptr.is_null() {
            return None;
        }
        Some(WideText::from_wchars(slice::from_raw_parts(ptr, len)))
    }
}

impl<'a, U> fmt::Debug for WideText<'a, U> where U: WideUnit {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "WideText({}, {})", U::KIND, self.units.len())
    }
}
