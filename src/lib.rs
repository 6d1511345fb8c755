/*!
This crate lets code read individual code points out of a host's text buffers, without caring how wide the host's code units happen to be.

Different generations of a host store text differently.  Older ones use a single wide unit (the size of `wchar_t`) for every buffer.  Newer ones pack each buffer into the narrowest of one, two, or four bytes per unit.  This crate abstracts over both behind one call shape: get the kind and data for a buffer once, then read code points by index.

For more details, see the [additional documentation](doc/index.html).

# Quick Reference

| Host generation | Profile | Handle | Kind |
| ---: | --- | --- | --- |
| Fixed wide units | `LegacyFixed` | `WideText` | Always `StorageKind::native_wide()` |
| Per-buffer packed units | `FlexibleMultiwidth` | `PackedText` | Per buffer; fails with `NotReady` until the buffer is ready |
| No storage API | `UninitializedStub` | `StubText` | None; every query fails with `Unsupported` |

The profile matching the host this crate is built for is available as `active::Host`, selected with one of the `host-legacy` or `host-flexible` features.

# Example

```
use strkind::{Accessor, FlexibleMultiwidth, PackedText};

let units: &[u8] = b"ABC";
let text = PackedText::new(units);
let acc = Accessor::<FlexibleMultiwidth>::new(text).unwrap();
assert_eq!(acc.get(2), Ok(0x43));
assert_eq!(acc.iter().collect::<Vec<_>>(), vec![0x41, 0x42, 0x43]);
```
*/

#[cfg(not(any(feature="host-legacy", feature="host-flexible", feature="host-stub")))]
compile_error!("no host profile selected; enable exactly one of the `host-legacy` or `host-flexible` features");

#[cfg(any(
    all(feature="host-legacy", feature="host-flexible"),
    all(feature="host-legacy", feature="host-stub"),
    all(feature="host-flexible", feature="host-stub"),
))]
compile_error!("host profiles are mutually exclusive; enable exactly one `host-*` feature");

#[cfg(feature="host-stub")]
compile_error!("the `host-stub` profile has no storage API and cannot be built against");

#[doc(hidden)] pub mod doc;
pub mod active;
pub mod data;
pub mod error;
pub mod ffi;
pub mod kind;
pub mod profile;

pub use data::{read, RawData};
pub use error::{AccessError, Result};
pub use kind::{CodePoint, CodeUnit, StorageKind, WCHAR_KIND};
pub use profile::{Accessor, CodePoints, Profile};
pub use profile::{FlexibleMultiwidth, PackedText};
pub use profile::{LegacyFixed, WideText, WideUnit};
pub use profile::{StubText, UninitializedStub};
