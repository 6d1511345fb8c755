/*!
Additional documentation.

# Components

These tables summarise the provided components.  Prefixes are used in debug output and in `AccessError::Unsupported`.

## Profiles

See the `profile` module.

| Prefix     | Name                 | Behaviour |
| ---------- | -------------------- | --------- |
| `Legacy`   | `LegacyFixed`        | Every buffer is an array of one fixed wide unit type, by default the one matching `wchar_t`.  Always ready.  `read` ignores the kind it is given. |
| `Flexible` | `FlexibleMultiwidth` | Every buffer has its own kind: one, two, or four bytes per unit.  Must be ready before anything but `is_ready` succeeds. |
| `Stub`     | `UninitializedStub`  | Placeholder for a host without a storage API.  Claims to be ready; every other query fails. |

## Storage kinds

See the `kind` module.

| Tag | Name       | Unit  | Holds |
| --- | ---------- | ----- | ----- |
| `0` | (wide)     | `wchar_t` | Legacy sentinel.  Resolves to `TwoByte` on Windows and `FourByte` elsewhere. |
| `1` | `OneByte`  | `u8`  | `U+0000` to `U+00FF`. |
| `2` | `TwoByte`  | `u16` | `U+0000` to `U+FFFF`. |
| `4` | `FourByte` | `u32` | Anything. |

## Build features

| Feature         | Effect |
| --------------- | ------ |
| `host-legacy`   | `active::Host` is `LegacyFixed`. |
| `host-flexible` | `active::Host` is `FlexibleMultiwidth`.  This is the default. |
| `host-stub`     | Fails the build.  There is nothing to access. |

Enabling more than one `host-*` feature, or none at all, also fails the build.

# Caller Obligations

* *"A ready handle can always be read."*  Not under `UninitializedStub`.  Use `Accessor::new`, which checks everything up front.

* *"The kind of a buffer can be cached across buffers."*  Under `FlexibleMultiwidth`, every buffer picks its own.  Ask each one.

* *"`read` validates what it reads."*  It zero-extends the stored unit and nothing more.  Lone surrogates come out as lone surrogates.

* *"`data` hands out a null pointer for empty or missing text."*  It never does.  Empty text is an empty view; missing text is an error.

* *"`read_unchecked` is a faster `read`."*  It is, by skipping the bounds check.  Reading past the end with it is undefined behaviour.
*/
