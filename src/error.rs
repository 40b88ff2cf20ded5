use thiserror::Error;

/// Errors raised at the edges of the crate.
///
/// The permutation and sponge themselves cannot fail; these variants only
/// describe malformed requests.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum Error {
	#[error("{algorithm} produces {expected} bytes but the output buffer holds {actual}")]
	OutputLength {
		algorithm: &'static str,
		expected: usize,
		actual: usize,
	},

	#[error("domain separation byte {0:#04x} is outside 0x01..=0x7f")]
	InvalidDomainSeparator(u8),

	#[error("{0} has a fixed domain separation suffix")]
	FixedDomain(&'static str),

	#[error("unknown algorithm name")]
	UnknownAlgorithm,

	#[error("null pointer passed for the {0} buffer")]
	NullPointer(&'static str),
}

pub type Result<T> = core::result::Result<T, Error>;
