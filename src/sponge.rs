//! The sponge construction over Keccak-p[1600, nr].
//!
//! A [`Sponge`] absorbs input; [`Sponge::finalize`] pads it and hands back a
//! [`SpongeReader`] that squeezes output. Absorbing after finalization is not
//! expressible.

use crate::keccak::State;
use crate::params::{DomainSuffix, ParameterSet};

/// A sponge in its absorbing phase.
#[derive(Clone, Debug)]
pub struct Sponge {
	state: State,
	params: ParameterSet,
	// bytes of the current block already XORed into the state
	offset: usize,
}

impl Sponge {
	pub fn new(params: ParameterSet) -> Self {
		Self {
			state: State::new(),
			params,
			offset: 0,
		}
	}

	pub fn params(&self) -> &ParameterSet {
		&self.params
	}

	/// Absorbs `input`. May be called any number of times; the result only
	/// depends on the concatenation of all inputs.
	pub fn absorb(&mut self, mut input: &[u8]) {
		let rate = self.params.rate_bytes();

		while !input.is_empty() {
			let take = (rate - self.offset).min(input.len());

			self.state.xor_bytes(self.offset, &input[.. take]);
			self.offset += take;
			input = &input[take ..];

			if self.offset == rate {
				self.state.permute(self.params.rounds());
				self.offset = 0;
			}
		}
	}

	/// Applies `pad10*1` with the domain suffix and switches to squeezing.
	pub fn finalize(mut self) -> SpongeReader {
		let rate = self.params.rate_bytes();

		pad(&mut self.state, self.offset, rate, self.params.suffix());
		self.state.permute(self.params.rounds());

		SpongeReader {
			state: self.state,
			rate_bytes: rate,
			rounds: self.params.rounds(),
			squeezable: rate,
		}
	}
}

// offset < rate, so the last block always has room for the suffix byte
fn pad(state: &mut State, offset: usize, rate: usize, suffix: DomainSuffix) {
	debug_assert!(offset < rate);

	state.xor_bytes(offset, &[suffix.pad_byte()]);
	state.xor_bytes(rate - 1, &[0x80]);
}

/// A finalized sponge producing output.
#[derive(Clone, Debug)]
pub struct SpongeReader {
	state: State,
	rate_bytes: usize,
	rounds: usize,
	// unread bytes left in the rate portion
	squeezable: usize,
}

impl SpongeReader {
	/// Fills `out` with the next `out.len()` output bytes.
	///
	/// Consecutive calls continue the same output stream, so splitting a
	/// request across calls does not change the bytes produced.
	pub fn squeeze(&mut self, out: &mut [u8]) {
		let mut written = 0;

		while written < out.len() {
			if self.squeezable == 0 {
				self.state.permute(self.rounds);
				self.squeezable = self.rate_bytes;
			}

			let offset = self.rate_bytes - self.squeezable;
			let n = self.squeezable.min(out.len() - written);

			self.state.read_bytes(offset, &mut out[written .. written + n]);

			self.squeezable -= n;
			written += n;
		}
	}

	/// Zeroes the first `min(len, 200)` bytes of the state and permutes once,
	/// so earlier states cannot be recovered from later ones. Output resumes
	/// at the start of the new rate block.
	pub fn ratchet(&mut self, len: usize) {
		self.state.clear_prefix(len);
		self.state.permute(self.rounds);
		self.squeezable = self.rate_bytes;
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn state_byte(state: &State, pos: usize) -> u8 {
		let mut out = [0];
		state.read_bytes(pos, &mut out);
		out[0]
	}

	#[test]
	fn padding_bytes_coincide_in_last_byte() {
		let mut state = State::new();
		pad(&mut state, 135, 136, DomainSuffix::SHA3);

		assert_eq!(state_byte(&state, 135), 0x86);

		let mut state = State::new();
		pad(&mut state, 167, 168, DomainSuffix::SHAKE);

		assert_eq!(state_byte(&state, 167), 0x9f);
	}

	#[test]
	fn padding_of_empty_block() {
		let mut state = State::new();
		pad(&mut state, 0, 72, DomainSuffix::SHA3);

		assert_eq!(state_byte(&state, 0), 0x06);
		assert_eq!(state_byte(&state, 71), 0x80);

		for pos in 1 .. 71 {
			assert_eq!(state_byte(&state, pos), 0);
		}

		// capacity untouched
		for pos in 72 .. 200 {
			assert_eq!(state_byte(&state, pos), 0);
		}
	}

	#[test]
	fn full_block_is_permuted_immediately() {
		let params = ParameterSet::SHA3_512;
		let mut sponge = Sponge::new(params);

		sponge.absorb(&[0xab; 72]);
		assert_eq!(sponge.offset, 0);

		sponge.absorb(&[0xab; 5]);
		assert_eq!(sponge.offset, 5);
	}

	#[test]
	fn empty_squeeze_does_not_permute() {
		let mut reader = Sponge::new(ParameterSet::SHAKE128).finalize();
		let before = reader.state.clone();

		reader.squeeze(&mut []);

		assert_eq!(reader.state, before);
		assert_eq!(reader.squeezable, 168);
	}

	#[test]
	fn split_squeezes_match_single_squeeze() {
		let mut sponge = Sponge::new(ParameterSet::SHAKE256);
		sponge.absorb(b"split squeezes");

		let mut whole_reader = sponge.clone().finalize();
		let mut whole = [0; 500];
		whole_reader.squeeze(&mut whole);

		let mut parts_reader = sponge.finalize();
		let mut parts = [0; 500];

		for range in [0 .. 1, 1 .. 136, 136 .. 137, 137 .. 300, 300 .. 500] {
			parts_reader.squeeze(&mut parts[range]);
		}

		assert_eq!(whole, parts);
	}

	#[test]
	fn ratchet_of_nothing_is_one_permutation() {
		let mut reader = Sponge::new(ParameterSet::TURBOSHAKE128).finalize();
		let mut expected = reader.state.clone();
		expected.permute(12);

		reader.squeeze(&mut [0; 10]);
		reader.ratchet(0);

		assert_eq!(reader.state, expected);
		assert_eq!(reader.squeezable, 168);
	}

	#[test]
	fn ratchet_changes_the_output_stream() {
		let mut sponge = Sponge::new(ParameterSet::SHAKE256);
		sponge.absorb(b"ratchet");

		let mut plain = sponge.clone().finalize();
		let mut ratcheted = sponge.finalize();

		let mut first = [0; 32];
		let mut second = [0; 32];
		plain.squeeze(&mut first);
		ratcheted.squeeze(&mut second);
		assert_eq!(first, second);

		ratcheted.ratchet(32);

		plain.squeeze(&mut first);
		ratcheted.squeeze(&mut second);
		assert_ne!(first, second);
	}

	#[test]
	fn ratchet_clears_at_most_the_whole_state() {
		let mut state = State::new();
		state.xor_bytes(0, &[0x5a; 200]);
		let mut reader = SpongeReader {state, rate_bytes: 136, rounds: 24, squeezable: 0};
		reader.ratchet(1000);

		state = State::new();
		state.permute(24);
		assert_eq!(reader.state, state);
	}
}
