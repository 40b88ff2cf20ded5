//! Sponge configurations for the FIPS 202 and RFC 9861 functions.

use core::fmt;
use core::str::FromStr;

use crate::error::{Error, Result};
use crate::keccak::{MAX_ROUNDS, STATE_BYTES};

/// Domain separation suffix with the leading `1` of `pad10*1` appended,
/// packed least significant bit first.
///
/// This is the first byte XORed in when the sponge is padded: `0x06` for
/// SHA3, `0x1f` for SHAKE.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DomainSuffix(u8);

impl DomainSuffix {
	/// Suffix bits `01`.
	pub const SHA3: Self = Self::from_bits(0b10, 2);

	/// Suffix bits `1111`.
	pub const SHAKE: Self = Self::from_bits(0b1111, 4);

	/// `bits` holds `len` suffix bits, the first one in bit 0.
	pub const fn from_bits(bits: u8, len: u32) -> Self {
		assert!(len < 8);

		Self((bits & ((1 << len) - 1)) | (1 << len))
	}

	/// A TurboSHAKE style domain byte, which already carries the padding bit.
	pub const fn from_byte(byte: u8) -> Result<Self> {
		if byte == 0 || byte > 0x7f {
			return Err(Error::InvalidDomainSeparator(byte));
		}

		Ok(Self(byte))
	}

	pub const fn pad_byte(self) -> u8 {
		self.0
	}
}

/// How many bytes an algorithm squeezes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OutputMode {
	Fixed(usize),
	Variable,
}

/// Constants selecting one member of the Keccak sponge family.
///
/// Only the built-in sets exist, so rate plus capacity is always the full
/// state and the rate is a non-zero multiple of the lane size:
///
/// ```compile_fail
/// use sha3_sponge::ParameterSet;
///
/// let params = ParameterSet {rate_bytes: 208, ..ParameterSet::SHAKE128};
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ParameterSet {
	name: &'static str,
	rate_bytes: usize,
	capacity_bytes: usize,
	suffix: DomainSuffix,
	output: OutputMode,
	rounds: usize,
	// FIPS 202 pins the suffix; TurboSHAKE takes one from the caller
	domain_fixed: bool,
}

impl ParameterSet {
	pub const SHA3_224: Self = Self::sha3("SHA3-224", 28);
	pub const SHA3_256: Self = Self::sha3("SHA3-256", 32);
	pub const SHA3_384: Self = Self::sha3("SHA3-384", 48);
	pub const SHA3_512: Self = Self::sha3("SHA3-512", 64);

	pub const SHAKE128: Self = Self::xof("SHAKE128", 128, MAX_ROUNDS, true);
	pub const SHAKE256: Self = Self::xof("SHAKE256", 256, MAX_ROUNDS, true);

	pub const TURBOSHAKE128: Self = Self::xof("TurboSHAKE128", 128, 12, false);
	pub const TURBOSHAKE256: Self = Self::xof("TurboSHAKE256", 256, 12, false);

	// capacity is twice the digest size
	const fn sha3(name: &'static str, digest_len: usize) -> Self {
		let capacity_bytes = 2 * digest_len;

		Self {
			name,
			rate_bytes: STATE_BYTES - capacity_bytes,
			capacity_bytes,
			suffix: DomainSuffix::SHA3,
			output: OutputMode::Fixed(digest_len),
			rounds: MAX_ROUNDS,
			domain_fixed: true,
		}
	}

	// capacity is twice the security level
	const fn xof(name: &'static str, security_bits: usize, rounds: usize, domain_fixed: bool) -> Self {
		let capacity_bytes = 2 * security_bits / 8;

		Self {
			name,
			rate_bytes: STATE_BYTES - capacity_bytes,
			capacity_bytes,
			suffix: DomainSuffix::SHAKE,
			output: OutputMode::Variable,
			rounds,
			domain_fixed,
		}
	}

	pub const fn name(&self) -> &'static str {
		self.name
	}

	/// Bytes absorbed or squeezed per permutation call.
	pub const fn rate_bytes(&self) -> usize {
		self.rate_bytes
	}

	pub const fn capacity_bytes(&self) -> usize {
		self.capacity_bytes
	}

	pub const fn suffix(&self) -> DomainSuffix {
		self.suffix
	}

	pub const fn output(&self) -> OutputMode {
		self.output
	}

	/// Rounds of Keccak-p per permutation call.
	pub const fn rounds(&self) -> usize {
		self.rounds
	}

	/// Whether [`with_domain`](Self::with_domain) accepts a domain byte.
	pub const fn accepts_domain(&self) -> bool {
		!self.domain_fixed
	}

	/// Digest length of a fixed-output algorithm, `None` for XOFs.
	pub const fn digest_len(&self) -> Option<usize> {
		match self.output {
			OutputMode::Fixed(len) => Some(len),
			OutputMode::Variable => None,
		}
	}

	/// Re-targets a TurboSHAKE parameter set to domain byte `byte`.
	///
	/// SHA3 and SHAKE have their suffixes fixed by FIPS 202 and are rejected.
	pub fn with_domain(self, byte: u8) -> Result<Self> {
		if self.domain_fixed {
			return Err(Error::FixedDomain(self.name));
		}

		Ok(Self {suffix: DomainSuffix::from_byte(byte)?, ..self})
	}
}

/// The algorithms this crate implements, selectable by name at run time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
	Sha3_224,
	Sha3_256,
	Sha3_384,
	Sha3_512,
	Shake128,
	Shake256,
	TurboShake128,
	TurboShake256,
}

impl Algorithm {
	pub const ALL: [Self; 8] = [
		Self::Sha3_224,
		Self::Sha3_256,
		Self::Sha3_384,
		Self::Sha3_512,
		Self::Shake128,
		Self::Shake256,
		Self::TurboShake128,
		Self::TurboShake256,
	];

	pub const fn params(self) -> &'static ParameterSet {
		match self {
			Self::Sha3_224 => &ParameterSet::SHA3_224,
			Self::Sha3_256 => &ParameterSet::SHA3_256,
			Self::Sha3_384 => &ParameterSet::SHA3_384,
			Self::Sha3_512 => &ParameterSet::SHA3_512,
			Self::Shake128 => &ParameterSet::SHAKE128,
			Self::Shake256 => &ParameterSet::SHAKE256,
			Self::TurboShake128 => &ParameterSet::TURBOSHAKE128,
			Self::TurboShake256 => &ParameterSet::TURBOSHAKE256,
		}
	}

	pub const fn name(self) -> &'static str {
		self.params().name()
	}

	pub const fn is_xof(self) -> bool {
		matches!(self.params().output(), OutputMode::Variable)
	}
}

impl fmt::Display for Algorithm {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

impl FromStr for Algorithm {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self> {
		Self::ALL
			.into_iter()
			.find(|algorithm| algorithm.name().eq_ignore_ascii_case(s))
			.ok_or(Error::UnknownAlgorithm)
	}
}

#[test]
fn rate_and_capacity_fill_the_state() {
	let expected = [
		(144, 56),
		(136, 64),
		(104, 96),
		(72, 128),
		(168, 32),
		(136, 64),
		(168, 32),
		(136, 64),
	];

	for (algorithm, (rate, capacity)) in Algorithm::ALL.into_iter().zip(expected) {
		let params = algorithm.params();

		assert_eq!(params.rate_bytes(), rate, "{}", algorithm);
		assert_eq!(params.capacity_bytes(), capacity, "{}", algorithm);
		assert_eq!(params.rate_bytes() + params.capacity_bytes(), STATE_BYTES);
		assert_eq!(params.rate_bytes() % 8, 0);
	}
}

#[test]
fn pad_bytes() {
	assert_eq!(DomainSuffix::SHA3.pad_byte(), 0x06);
	assert_eq!(DomainSuffix::SHAKE.pad_byte(), 0x1f);
	assert_eq!(ParameterSet::TURBOSHAKE128.suffix().pad_byte(), 0x1f);
}

#[test]
fn domain_bytes_are_validated() {
	assert_eq!(DomainSuffix::from_byte(0x00), Err(Error::InvalidDomainSeparator(0x00)));
	assert_eq!(DomainSuffix::from_byte(0x80), Err(Error::InvalidDomainSeparator(0x80)));
	assert_eq!(DomainSuffix::from_byte(0x01).map(DomainSuffix::pad_byte), Ok(0x01));
	assert_eq!(DomainSuffix::from_byte(0x7f).map(DomainSuffix::pad_byte), Ok(0x7f));

	let retargeted = ParameterSet::TURBOSHAKE256.with_domain(0x0b).unwrap();
	assert_eq!(retargeted.suffix().pad_byte(), 0x0b);
	assert_eq!(retargeted.rate_bytes(), 136);
	assert_eq!(retargeted.rounds(), 12);
	assert_eq!(retargeted.with_domain(0x1f), Ok(ParameterSet::TURBOSHAKE256));

	assert_eq!(ParameterSet::SHAKE128.with_domain(0x1f), Err(Error::FixedDomain("SHAKE128")));
	assert_eq!(ParameterSet::SHA3_256.with_domain(0x06), Err(Error::FixedDomain("SHA3-256")));
}

#[test]
fn only_turboshake_accepts_a_domain_byte() {
	for algorithm in Algorithm::ALL {
		let params = algorithm.params();
		let turbo = matches!(algorithm, Algorithm::TurboShake128 | Algorithm::TurboShake256);

		assert_eq!(params.accepts_domain(), turbo, "{}", algorithm);
		assert_eq!(params.with_domain(0x1f).is_ok(), turbo, "{}", algorithm);
	}
}

#[test]
fn names_round_trip() {
	for algorithm in Algorithm::ALL {
		let name = algorithm.name();

		assert_eq!(name.parse::<Algorithm>(), Ok(algorithm));
		#[cfg(feature = "std")]
		assert_eq!(name.to_ascii_lowercase().parse::<Algorithm>(), Ok(algorithm));
	}

	assert_eq!("sha3-1024".parse::<Algorithm>(), Err(Error::UnknownAlgorithm));
	assert_eq!("".parse::<Algorithm>(), Err(Error::UnknownAlgorithm));
}
