//! SHA3, SHAKE and TurboSHAKE on top of [`Sponge`].

use crate::error::{Error, Result};
use crate::params::{Algorithm, ParameterSet};
use crate::sponge::{Sponge, SpongeReader};

fn hash_into(params: ParameterSet, msg: &[u8], out: &mut [u8]) {
	let mut sponge = Sponge::new(params);
	sponge.absorb(msg);
	sponge.finalize().squeeze(out);
}

/// Returns the SHA3-224 digest of the byte slice passed to it.
pub fn sha3_224(msg: &[u8]) -> [u8; 28] {
	let mut out = [0; 28];
	hash_into(ParameterSet::SHA3_224, msg, &mut out);
	out
}

/// Returns the SHA3-256 digest of the byte slice passed to it.
pub fn sha3_256(msg: &[u8]) -> [u8; 32] {
	let mut out = [0; 32];
	hash_into(ParameterSet::SHA3_256, msg, &mut out);
	out
}

/// Returns the SHA3-384 digest of the byte slice passed to it.
pub fn sha3_384(msg: &[u8]) -> [u8; 48] {
	let mut out = [0; 48];
	hash_into(ParameterSet::SHA3_384, msg, &mut out);
	out
}

/// Returns the SHA3-512 digest of the byte slice passed to it.
pub fn sha3_512(msg: &[u8]) -> [u8; 64] {
	let mut out = [0; 64];
	hash_into(ParameterSet::SHA3_512, msg, &mut out);
	out
}

/// Fills `out` with SHAKE128 output for `msg`.
pub fn shake128(msg: &[u8], out: &mut [u8]) {
	hash_into(ParameterSet::SHAKE128, msg, out);
}

/// Fills `out` with SHAKE256 output for `msg`.
pub fn shake256(msg: &[u8], out: &mut [u8]) {
	hash_into(ParameterSet::SHAKE256, msg, out);
}

/// Fills `out` with TurboSHAKE128 output for `msg` under domain byte `domain`
/// (`0x1f` unless a protocol says otherwise).
pub fn turboshake128(msg: &[u8], domain: u8, out: &mut [u8]) -> Result<()> {
	hash_into(ParameterSet::TURBOSHAKE128.with_domain(domain)?, msg, out);
	Ok(())
}

/// Fills `out` with TurboSHAKE256 output for `msg` under domain byte `domain`.
pub fn turboshake256(msg: &[u8], domain: u8, out: &mut [u8]) -> Result<()> {
	hash_into(ParameterSet::TURBOSHAKE256.with_domain(domain)?, msg, out);
	Ok(())
}

impl Algorithm {
	/// Hashes `msg` into `out`.
	///
	/// Fixed-output algorithms need `out` to be exactly their digest length;
	/// XOFs fill whatever length `out` has. TurboSHAKE uses domain byte `0x1f`.
	pub fn digest_into(self, msg: &[u8], out: &mut [u8]) -> Result<()> {
		let params = self.params();

		tracing::trace!(algorithm = params.name(), msg_len = msg.len(), out_len = out.len(), "digest");

		if let Some(expected) = params.digest_len() {
			if out.len() != expected {
				tracing::debug!(algorithm = params.name(), expected, actual = out.len(), "wrong digest buffer length");

				return Err(Error::OutputLength {
					algorithm: params.name(),
					expected,
					actual: out.len(),
				});
			}
		}

		hash_into(*params, msg, out);

		Ok(())
	}

	/// Allocating form of [`digest_into`](Self::digest_into).
	#[cfg(feature = "std")]
	pub fn digest(self, msg: &[u8], len: usize) -> Result<Vec<u8>> {
		let mut out = vec![0; len];
		self.digest_into(msg, &mut out)?;
		Ok(out)
	}
}

macro_rules! fixed_hasher {
	($(#[$attr:meta])* $name:ident, $params:expr, $len:literal) => {
		$(#[$attr])*
		#[derive(Clone, Debug)]
		pub struct $name {
			sponge: Sponge,
		}

		impl $name {
			pub const DIGEST_LEN: usize = $len;

			pub fn new() -> Self {
				Self {sponge: Sponge::new($params)}
			}

			pub fn update(&mut self, bytes: &[u8]) {
				self.sponge.absorb(bytes);
			}

			pub fn finalize(self) -> [u8; $len] {
				let mut out = [0; $len];
				self.sponge.finalize().squeeze(&mut out);
				out
			}
		}

		impl Default for $name {
			fn default() -> Self {
				Self::new()
			}
		}
	};
}

fixed_hasher!(
	/// Incremental SHA3-224.
	Sha3_224, ParameterSet::SHA3_224, 28
);

fixed_hasher!(
	/// Incremental SHA3-256.
	Sha3_256, ParameterSet::SHA3_256, 32
);

fixed_hasher!(
	/// Incremental SHA3-384.
	Sha3_384, ParameterSet::SHA3_384, 48
);

fixed_hasher!(
	/// Incremental SHA3-512.
	Sha3_512, ParameterSet::SHA3_512, 64
);

macro_rules! xof_hasher {
	($(#[$attr:meta])* $name:ident, $params:expr) => {
		$(#[$attr])*
		#[derive(Clone, Debug)]
		pub struct $name {
			sponge: Sponge,
		}

		impl $name {
			pub fn new() -> Self {
				Self {sponge: Sponge::new($params)}
			}

			pub fn update(&mut self, bytes: &[u8]) {
				self.sponge.absorb(bytes);
			}

			pub fn finalize_xof(self) -> SpongeReader {
				self.sponge.finalize()
			}
		}

		impl Default for $name {
			fn default() -> Self {
				Self::new()
			}
		}
	};
}

xof_hasher!(
	/// Incremental SHAKE128.
	Shake128, ParameterSet::SHAKE128
);

xof_hasher!(
	/// Incremental SHAKE256.
	Shake256, ParameterSet::SHAKE256
);

/// Incremental TurboSHAKE128.
#[derive(Clone, Debug)]
pub struct TurboShake128 {
	sponge: Sponge,
}

impl TurboShake128 {
	/// Fails unless `domain` is in `0x01 ..= 0x7f`.
	pub fn new(domain: u8) -> Result<Self> {
		Ok(Self {sponge: Sponge::new(ParameterSet::TURBOSHAKE128.with_domain(domain)?)})
	}

	pub fn update(&mut self, bytes: &[u8]) {
		self.sponge.absorb(bytes);
	}

	pub fn finalize_xof(self) -> SpongeReader {
		self.sponge.finalize()
	}
}

/// Incremental TurboSHAKE256.
#[derive(Clone, Debug)]
pub struct TurboShake256 {
	sponge: Sponge,
}

impl TurboShake256 {
	/// Fails unless `domain` is in `0x01 ..= 0x7f`.
	pub fn new(domain: u8) -> Result<Self> {
		Ok(Self {sponge: Sponge::new(ParameterSet::TURBOSHAKE256.with_domain(domain)?)})
	}

	pub fn update(&mut self, bytes: &[u8]) {
		self.sponge.absorb(bytes);
	}

	pub fn finalize_xof(self) -> SpongeReader {
		self.sponge.finalize()
	}
}
