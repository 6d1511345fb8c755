use crate::data::RawData;
use crate::error::{AccessError, Result};
use crate::kind::{CodePoint, StorageKind};
use super::Profile;

/**
Represents a host generation whose storage API does not exist yet.

This is a placeholder, not a usable profile.  Every handle claims to be ready, but there is no kind, no data, and no length to be had: all of those queries fail with `Unsupported`.  Selecting this profile as the active host is a build error.
*/
pub enum UninitializedStub {}

impl UninitializedStub {
    fn unsupported() -> AccessError {
        AccessError::Unsupported { profile: UninitializedStub::debug_prefix() }
    }
}

impl Profile for UninitializedStub {
    type Handle<'a> = StubText;

    fn debug_prefix() -> &'static str { "Stub" }

    fn is_ready(_text: Self::Handle<'_>) -> bool {
        true
    }

    fn kind(_text: Self::Handle<'_>) -> Result<StorageKind> {
        Err(UninitializedStub::unsupported())
    }

    fn data<'a>(_text: Self::Handle<'a>) -> Result<RawData<'a>> {
        Err(UninitializedStub::unsupported())
    }

    fn length(_text: Self::Handle<'_>) -> Result<usize> {
        Err(UninitializedStub::unsupported())
    }

    fn read(_kind: StorageKind, _data: RawData, _index: usize) -> Result<CodePoint> {
        Err(UninitializedStub::unsupported())
    }
}

/**
Handle type for `UninitializedStub`.  Carries nothing.
*/
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct StubText;
