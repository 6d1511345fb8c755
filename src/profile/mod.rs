/*!
Host profiles, and the accessor built on top of them.
*/
use std::fmt;
use std::iter::FusedIterator;
use std::marker::PhantomData;
use tracing::{debug, trace};
use crate::data::{self, RawData};
use crate::error::{AccessError, Result};
use crate::kind::{CodePoint, StorageKind};

pub use self::flexible::{FlexibleMultiwidth, PackedText};
pub use self::legacy::{LegacyFixed, WideText, WideUnit};
pub use self::stub::{StubText, UninitializedStub};

mod flexible;
mod legacy;
mod stub;

/**
Abstracts over the storage affordances of different host generations.

In practice, this will be implemented by a marker type (which is not intended to actually be instantiated anywhere), along with a borrowed handle type that represents one of the host's text buffers.

Profiles are selected statically.  Code generic over `P: Profile` is monomorphised per profile, so nothing ever checks *which* profile is in play at run time.
*/
pub trait Profile: Sized + 'static {
    /**
    The host's text handle.

    Handles are cheap, `Copy` borrows of caller-owned storage.  A profile never owns or mutates the text behind one.
    */
    type Handle<'a>: Copy;

    /**
    Returns a string which can be used to uniquely identify this profile in debug output and errors.
    */
    fn debug_prefix() -> &'static str;

    /**
    Reports whether the handle's canonical representation exists, *i.e.* whether random access is meaningful.

    A `true` result does not guarantee the other queries succeed; see `UninitializedStub`.
    */
    fn is_ready(text: Self::Handle<'_>) -> bool;

    /**
    Returns the storage kind of the handle's buffer.

    This is stable for the lifetime of the handle.
    */
    fn kind(text: Self::Handle<'_>) -> Result<StorageKind>;

    /**
    Returns a view of the handle's code units.
    */
    fn data<'a>(text: Self::Handle<'a>) -> Result<RawData<'a>>;

    /**
    Returns the number of code units in the handle's buffer.
    */
    fn length(text: Self::Handle<'_>) -> Result<usize> {
        let kind = Self::kind(text)?;
        Ok(Self::data(text)?.len_units(kind))
    }

    /**
    Reads the code point at `index` from a view previously obtained through `data`.

    `kind` should be the value `kind` returned for the same handle.  Profiles with a single fixed width may ignore it.
    */
    fn read(kind: StorageKind, data: RawData, index: usize) -> Result<CodePoint>;
}

/**
Reads code points out of a single text handle.

The kind and data view are queried once, when the accessor is created, and reused for every read after that.  This is the shape a search loop wants: one dispatch on the profile per buffer, then a tight loop over `[0, len)`.
*/
pub struct Accessor<'a, P> where P: Profile {
    kind: StorageKind,
    data: RawData<'a>,
    len: usize,
    _profile: PhantomData<fn() -> P>,
}

impl<'a, P> Clone for Accessor<'a, P> where P: Profile {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, P> Copy for Accessor<'a, P> where P: Profile {}

impl<'a, P> Accessor<'a, P> where P: Profile {
    /**
    Creates an accessor for `text`.

    Fails with `NotReady` if the handle is not ready, or with whatever error the profile reports for its kind or data.
    */
    pub fn new(text: P::Handle<'a>) -> Result<Self> {
        if !P::is_ready(text) {
            debug!(profile = P::debug_prefix(), "refusing to read from a handle that is not ready");
            return Err(AccessError::NotReady);
        }

        let (kind, data) = match P::kind(text).and_then(|kind| Ok((kind, P::data(text)?))) {
            Ok(v) => v,
            Err(err) => {
                debug!(profile = P::debug_prefix(), error = %err, "handle has no readable storage");
                return Err(err);
            }
        };

        // Derived rather than asked for: `iter` relies on `len` fitting inside `data`.
        let len = data.len_units(kind);

        trace!(profile = P::debug_prefix(), kind = %kind, len, "created accessor");

        Ok(Accessor {
            kind: kind,
            data: data,
            len: len,
            _profile: PhantomData,
        })
    }

    /// The storage kind of the underlying buffer.
    pub fn kind(&self) -> StorageKind {
        self.kind
    }

    /// The underlying data view.
    pub fn data(&self) -> RawData<'a> {
        self.data
    }

    /// Number of code units in the buffer.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /**
    Reads the code point at `index`.

    Returns `OutOfBounds` if `index >= self.len()`.
    */
    pub fn get(&self, index: usize) -> Result<CodePoint> {
        if index >= self.len {
            return Err(AccessError::OutOfBounds { index: index, len: self.len });
        }
        P::read(self.kind, self.data, index)
    }

    /**
    Returns an iterator over every code point in the buffer, in order.
    */
    pub fn iter(&self) -> CodePoints<'a> {
        CodePoints {
            kind: self.kind,
            ptr: self.data.as_ptr(),
            front: 0,
            back: self.len,
            _marker: PhantomData,
        }
    }
}

impl<'a, P> fmt::Debug for Accessor<'a, P> where P: Profile {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "{}Accessor({}, {})", P::debug_prefix(), self.kind, self.len)
    }
}

impl<'a, 'b, P> IntoIterator for &'b Accessor<'a, P> where P: Profile {
    type Item = CodePoint;
    type IntoIter = CodePoints<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/**
Iterator over the code points of a buffer.  Created by `Accessor::iter`.
*/
#[derive(Clone)]
pub struct CodePoints<'a> {
    kind: StorageKind,
    ptr: *const u8,
    front: usize,
    back: usize,
    _marker: PhantomData<&'a [u8]>,
}

unsafe impl<'a> Send for CodePoints<'a> {}
unsafe impl<'a> Sync for CodePoints<'a> {}

impl<'a> Iterator for CodePoints<'a> {
    type Item = CodePoint;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }

        // `back` never exceeds the accessor's `len`, which was derived from the data view.
        let cp = unsafe { data::read_unchecked(self.kind, self.ptr, self.front) };
        self.front += 1;
        Some(cp)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.back - self.front;
        (n, Some(n))
    }
}

impl<'a> DoubleEndedIterator for CodePoints<'a> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }

        self.back -= 1;
        Some(unsafe { data::read_unchecked(self.kind, self.ptr, self.back) })
    }
}

impl<'a> ExactSizeIterator for CodePoints<'a> {}

impl<'a> FusedIterator for CodePoints<'a> {}

impl<'a> fmt::Debug for CodePoints<'a> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.debug_struct("CodePoints")
            .field("kind", &self.kind)
            .field("remaining", &(self.back - self.front))
            .finish()
    }
}
