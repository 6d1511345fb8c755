use std::mem;

pub use libc::wchar_t;

/*
The unsigned integer type with the same width as `wchar_t`.

`wchar_t` is signed on some targets (*e.g.* `i32` on x86_64 Linux), which is of no use when zero-extending to a code point.  Windows is the only supported platform where it's 16 bits wide.
*/
#[cfg(windows)]
pub type NativeUnit = u16;

#[cfg(not(windows))]
pub type NativeUnit = u32;

/// Size of the native wide character, in bytes.
pub const WCHAR_SIZE: usize = mem::size_of::<wchar_t>();

// If this fails, the target needs its own `NativeUnit` definition above.
const _: () = assert!(mem::size_of::<NativeUnit>() == WCHAR_SIZE);
