extern crate strkind;

macro_rules! here { () => { &format!(concat!(file!(), ":{:?}"), line!()) } }

use std::any::TypeId;
use strkind::active;
use strkind::StorageKind;

#[cfg(feature="host-flexible")]
#[test]
fn test_flexible_selected() {
    use strkind::{FlexibleMultiwidth, PackedText};

    assert_eq!(TypeId::of::<active::Host>(), TypeId::of::<FlexibleMultiwidth>());
    assert_eq!(active::name(), "Flexible");

    const ABC: &'static [u8] = b"ABC";
    let text: active::Text = PackedText::new(ABC);
    assert!(active::is_ready(text));

    let kind = active::kind(text).expect(here!());
    let data = active::data(text).expect(here!());
    assert_eq!(kind, StorageKind::OneByte);
    assert_eq!(active::length(text), Ok(3));
    assert_eq!(active::read(kind, data, 0), Ok(0x41));
    assert_eq!(active::read(kind, data, 2), Ok(0x43));

    assert!(!active::is_ready(PackedText::not_ready()));

    let acc = active::accessor(text).expect(here!());
    assert_eq!(acc.iter().collect::<Vec<_>>(), vec![0x41, 0x42, 0x43]);
}

#[cfg(feature="host-legacy")]
#[test]
fn test_legacy_selected() {
    use strkind::{LegacyFixed, WideText};
    use strkind::ffi::wchar_t;

    assert_eq!(TypeId::of::<active::Host>(), TypeId::of::<LegacyFixed>());
    assert_eq!(active::name(), "Legacy");

    let wide: Vec<wchar_t> = vec![0x0041, 0x00E9];
    let text: active::Text = WideText::from_wchars(&wide);
    assert!(active::is_ready(text));

    let kind = active::kind(text).expect(here!());
    let data = active::data(text).expect(here!());
    assert_eq!(kind, StorageKind::native_wide());
    assert_eq!(active::read(StorageKind::OneByte, data, 1), Ok(0x00E9));

    let acc = active::accessor(text).expect(here!());
    assert_eq!(acc.iter().collect::<Vec<_>>(), vec![0x41, 0xE9]);
}
