/*!
Storage kinds and code unit types.
*/
use std::fmt;
use crate::error::AccessError;
use crate::ffi::{NativeUnit, WCHAR_SIZE};

macro_rules! unit_impl {
    ($ty_name:ident, $kind:ident) => {
        impl sealed::Sealed for $ty_name {}

        impl CodeUnit for $ty_name {
            const KIND: StorageKind = StorageKind::$kind;

            #[inline]
            fn zero_extend(self) -> u32 {
                self as u32
            }
        }
    };
}

/**
A single code point, after zero-extension from whatever unit it was stored in.

This is deliberately *not* `char`: stored units are not checked, so lone surrogates and values above `0x10FFFF` pass through untouched.
*/
pub type CodePoint = u32;

/**
Raw tag for the legacy "wide character" kind.

Hosts that predate per-buffer kinds report this instead of a width.  It resolves to whatever `StorageKind::native_wide()` is on the current target.
*/
pub const WCHAR_KIND: u8 = 0;

/**
Identifies how many bytes each code unit in a buffer occupies.

The set of kinds is closed.  Every place that needs to know a width matches on this exhaustively, so adding a variant is a compile error until all of them are updated.
*/
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum StorageKind {
    /// One byte per unit; holds code points up to `U+00FF`.
    OneByte = 1,
    /// Two bytes per unit; holds code points up to `U+FFFF`.
    TwoByte = 2,
    /// Four bytes per unit; holds any code point.
    FourByte = 4,
}

impl StorageKind {
    /**
    Width of a single code unit of this kind, in bytes.
    */
    #[inline]
    pub const fn width(self) -> usize {
        match self {
            StorageKind::OneByte => 1,
            StorageKind::TwoByte => 2,
            StorageKind::FourByte => 4,
        }
    }

    /**
    The kind matching the native wide character (`wchar_t`).
    */
    #[inline]
    pub const fn native_wide() -> StorageKind {
        <NativeUnit as CodeUnit>::KIND
    }

    /**
    Looks up the kind with the given unit width in bytes.
    */
    pub fn from_width(width: usize) -> Option<StorageKind> {
        match width {
            1 => Some(StorageKind::OneByte),
            2 => Some(StorageKind::TwoByte),
            4 => Some(StorageKind::FourByte),
            _ => None,
        }
    }

    /**
    Converts a raw kind tag, as stored by a host, into a `StorageKind`.

    `WCHAR_KIND` resolves to the native wide kind.  Any other value must be a width of 1, 2, or 4.
    */
    pub fn from_tag(tag: u8) -> Result<StorageKind, AccessError> {
        if tag == WCHAR_KIND {
            return Ok(StorageKind::native_wide());
        }
        StorageKind::from_width(tag as usize).ok_or(AccessError::UnknownTag(tag))
    }

    /// The raw tag for this kind.  This is never `WCHAR_KIND`.
    #[inline]
    pub const fn tag(self) -> u8 {
        self as u8
    }

    /**
    The narrowest kind able to hold `max_code_point`.

    This is the rule flexible hosts use when packing a buffer: anything below `0x100` fits in one byte, anything below `0x10000` in two, and the rest needs four.
    */
    pub fn narrowest_for(max_code_point: CodePoint) -> StorageKind {
        match max_code_point {
            0 ..= 0xFF => StorageKind::OneByte,
            0x100 ..= 0xFFFF => StorageKind::TwoByte,
            _ => StorageKind::FourByte,
        }
    }

    /// Largest code point representable by a unit of this kind.
    pub const fn max_code_point(self) -> CodePoint {
        match self {
            StorageKind::OneByte => 0xFF,
            StorageKind::TwoByte => 0xFFFF,
            StorageKind::FourByte => u32::MAX,
        }
    }
}

impl fmt::Display for StorageKind {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            StorageKind::OneByte => write!(fmt, "1-byte"),
            StorageKind::TwoByte => write!(fmt, "2-byte"),
            StorageKind::FourByte => write!(fmt, "4-byte"),
        }
    }
}

/**
A primitive integer type that can serve as a code unit.

Ties a Rust type to the `StorageKind` with the same width.  Implemented for `u8`, `u16`, and `u32` only, and sealed: `RawData` reinterprets unit slices as bytes, which is only sound for padding-free integers.
*/
pub trait CodeUnit: sealed::Sealed + Copy + 'static {
    const KIND: StorageKind;

    fn zero_extend(self) -> CodePoint;
}

unit_impl! { u8, OneByte }
unit_impl! { u16, TwoByte }
unit_impl! { u32, FourByte }

mod sealed {
    pub trait Sealed {}
}

// Keep `native_wide` honest.
const _: () = assert!(StorageKind::native_wide().width() == WCHAR_SIZE);
