/*!
The host profile selected at build time.

Exactly one of the `host-*` cargo features picks which profile this module exposes.  Only that profile's handle type and queries are reachable from here; code written against `active` does not compile against another profile's handles by accident.
*/
use crate::data::RawData;
use crate::error::Result;
use crate::kind::{CodePoint, StorageKind};
use crate::profile::{Accessor, Profile};

#[cfg(feature="host-legacy")]
mod selected {
    use crate::profile::{LegacyFixed, WideText};

    pub type Host = LegacyFixed;
    pub type Text<'a> = WideText<'a>;
}

#[cfg(feature="host-flexible")]
mod selected {
    use crate::profile::{FlexibleMultiwidth, PackedText};

    pub type Host = FlexibleMultiwidth;
    pub type Text<'a> = PackedText<'a>;
}

pub use self::selected::{Host, Text};

/// Accessor for the active profile.
pub type HostAccessor<'a> = Accessor<'a, Host>;

/// Short name of the active profile.
pub fn name() -> &'static str {
    <Host as Profile>::debug_prefix()
}

pub fn is_ready(text: Text) -> bool {
    <Host as Profile>::is_ready(text)
}

pub fn kind(text: Text) -> Result<StorageKind> {
    <Host as Profile>::kind(text)
}

pub fn data(text: Text) -> Result<RawData> {
    <Host as Profile>::data(text)
}

pub fn length(text: Text) -> Result<usize> {
    <Host as Profile>::length(text)
}

pub fn read(kind: StorageKind, data: RawData, index: usize) -> Result<CodePoint> {
    <Host as Profile>::read(kind, data, index)
}

/**
Creates an accessor for `text` under the active profile.
*/
pub fn accessor(text: Text) -> Result<HostAccessor> {
    Accessor::new(text)
}
