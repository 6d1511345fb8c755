extern crate strkind;

macro_rules! here { () => { &format!(concat!(file!(), ":{:?}"), line!()) } }

use strkind::{AccessError, Accessor, FlexibleMultiwidth, PackedText, Profile, RawData, StorageKind};

type Flex = FlexibleMultiwidth;

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test]
fn test_one_byte_abc() {
    const ABC: &'static [u8] = b"ABC";

    let text = PackedText::new(ABC);
    assert!(Flex::is_ready(text));

    let kind = Flex::kind(text).expect(here!());
    assert_eq!(kind, StorageKind::OneByte);

    let data = Flex::data(text).expect(here!());
    assert_eq!(Flex::length(text), Ok(3));
    assert_eq!(Flex::read(kind, data, 0), Ok(0x41));
    assert_eq!(Flex::read(kind, data, 2), Ok(0x43));
    assert_eq!(Flex::read(kind, data, 3), Err(AccessError::OutOfBounds { index: 3, len: 3 }));
}

#[test]
fn test_four_byte_emoji() {
    const GRIN: &'static [u32] = &[0x1F600];

    let text = PackedText::new(GRIN);
    let kind = Flex::kind(text).expect(here!());
    assert_eq!(kind, StorageKind::FourByte);

    let data = Flex::data(text).expect(here!());
    assert_eq!(Flex::read(kind, data, 0), Ok(0x1F600));
    assert!(Flex::read(kind, data, 1).is_err());
}

#[test]
fn test_two_byte_boundaries() {
    const UNITS: &'static [u16] = &[0x00E9, 0x4E2D, 0xFFFF, 0xD800];

    let text = PackedText::new(UNITS);
    let kind = Flex::kind(text).expect(here!());
    let data = Flex::data(text).expect(here!());
    let len = Flex::length(text).expect(here!());

    assert_eq!(kind, StorageKind::TwoByte);
    assert_eq!(data.byte_len(), 8);
    assert_eq!(data.as_ptr(), UNITS.as_ptr() as *const u8);
    assert_eq!(Flex::read(kind, data, 0), Ok(0x00E9));
    // Lone surrogates are passed through as-is.
    assert_eq!(Flex::read(kind, data, len - 1), Ok(0xD800));
}

#[test]
fn test_kind_is_stable() {
    const UNITS: &'static [u16] = &[0x0100, 0x0041];

    let text = PackedText::new(UNITS);
    let first = Flex::kind(text).expect(here!());
    for _ in 0..4 {
        assert_eq!(Flex::kind(text), Ok(first));
    }
}

#[test]
fn test_not_ready() {
    init_logging();

    let text = PackedText::not_ready();
    assert!(!Flex::is_ready(text));
    assert_eq!(Flex::kind(text), Err(AccessError::NotReady));
    assert_eq!(Flex::length(text), Err(AccessError::NotReady));
    assert!(Flex::data(text).is_err());
    assert_eq!(Accessor::<Flex>::new(text).err(), Some(AccessError::NotReady));
    assert_eq!(format!("{:?}", text), "PackedText(not ready)");
}

#[test]
fn test_accessor() {
    init_logging();

    let units: Vec<u16> = "Grüße, 世界".chars().map(|c| c as u16).collect();
    let text = PackedText::new(&units[..]);
    let acc = Accessor::<Flex>::new(text).expect(here!());

    assert_eq!(acc.kind(), StorageKind::TwoByte);
    assert_eq!(acc.len(), units.len());
    assert!(!acc.is_empty());
    assert_eq!(acc.get(2), Ok('ü' as u32));
    assert_eq!(acc.get(acc.len()), Err(AccessError::OutOfBounds { index: acc.len(), len: acc.len() }));

    let forward: Vec<u32> = acc.iter().collect();
    let expected: Vec<u32> = units.iter().map(|&u| u as u32).collect();
    assert_eq!(forward, expected);

    let mut backward: Vec<u32> = acc.iter().rev().collect();
    backward.reverse();
    assert_eq!(backward, expected);

    let mut it = acc.iter();
    assert_eq!(it.len(), units.len());
    it.next();
    it.next_back();
    assert_eq!(it.len(), units.len() - 2);

    assert_eq!(format!("{:?}", acc), format!("FlexibleAccessor(2-byte, {})", units.len()));
}

#[test]
fn test_empty() {
    let text = PackedText::new::<u8>(&[]);
    let acc = Accessor::<Flex>::new(text).expect(here!());
    assert!(acc.is_empty());
    assert_eq!(acc.iter().next(), None);
    assert_eq!(acc.get(0), Err(AccessError::OutOfBounds { index: 0, len: 0 }));
    assert_eq!(text.is_compact(), Ok(true));
    assert_eq!(text.max_code_point(), Ok(None));
}

#[test]
fn test_from_ptr() {
    const UNITS: &'static [u32] = &[0x61, 0x10FFFF];

    let text = unsafe { PackedText::from_ptr(StorageKind::FourByte, UNITS.as_ptr() as *const u8, UNITS.len()) }
        .expect(here!());
    let acc = Accessor::<Flex>::new(text).expect(here!());
    assert_eq!(acc.iter().collect::<Vec<_>>(), vec![0x61, 0x10FFFF]);

    let null = unsafe { PackedText::from_ptr(StorageKind::OneByte, ::std::ptr::null(), 4) };
    assert!(null.is_none());
}

#[test]
fn test_trailing_bytes_ignored() {
    let bytes = [0x41, 0x00, 0x42, 0x00, 0x43];
    let text = PackedText::from_raw(StorageKind::TwoByte, RawData::from_bytes(&bytes));
    assert_eq!(Flex::length(text), Ok(2));

    let acc = Accessor::<Flex>::new(text).expect(here!());
    assert_eq!(acc.len(), 2);
    assert_eq!(acc.get(1), Ok(u16::from_ne_bytes([0x42, 0x00]) as u32));
}

#[test]
fn test_compactness() {
    assert_eq!(PackedText::new(b"plain").is_compact(), Ok(true));
    assert_eq!(PackedText::new::<u16>(&[0x41, 0x42]).is_compact(), Ok(false));
    assert_eq!(PackedText::new::<u16>(&[0x41, 0x3042]).is_compact(), Ok(true));
    assert_eq!(PackedText::new::<u32>(&[0x41, 0x3042]).is_compact(), Ok(false));
    assert_eq!(PackedText::new::<u32>(&[0x1F600]).is_compact(), Ok(true));
    assert_eq!(PackedText::new::<u16>(&[0x10, 0xFFEE, 0x20]).max_code_point(), Ok(Some(0xFFEE)));
    assert_eq!(PackedText::not_ready().is_compact(), Err(AccessError::NotReady));
}
