#![cfg_attr(not(feature = "std"), no_std)]

//! The Keccak sponge family: SHA3-224/256/384/512 and SHAKE128/256 from
//! [FIPS 202](https://doi.org/10.6028/NIST.FIPS.202), plus TurboSHAKE128/256
//! from [RFC 9861](https://www.rfc-editor.org/rfc/rfc9861).
//!
//! ```
//! let digest = sha3_sponge::sha3_256(b"");
//! assert_eq!(digest[.. 4], [0xa7, 0xff, 0xc6, 0xf8]);
//!
//! let mut out = [0; 16];
//! sha3_sponge::shake128(b"", &mut out);
//! assert_eq!(out[.. 4], [0x7f, 0x9c, 0x2b, 0xa4]);
//! ```
//!
//! Every call works on its own 200-byte state; nothing is shared between
//! calls except the constant tables of the permutation.

// to prevent broken links when building documentation in #![no_std] mode
#[cfg(all(not(feature = "std"), doc))]
extern crate std;

pub mod keccak;
pub mod params;
pub mod sponge;

#[cfg(feature = "ffi")]
pub mod ffi;

mod error;
mod hash;

pub use error::{Error, Result};

#[doc(inline)]
pub use params::{Algorithm, DomainSuffix, OutputMode, ParameterSet};

#[doc(inline)]
pub use sponge::{Sponge, SpongeReader};

pub use hash::{
	sha3_224,
	sha3_256,
	sha3_384,
	sha3_512,
	shake128,
	shake256,
	turboshake128,
	turboshake256,
	Sha3_224,
	Sha3_256,
	Sha3_384,
	Sha3_512,
	Shake128,
	Shake256,
	TurboShake128,
	TurboShake256,
};
