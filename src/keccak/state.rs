use super::{keccak_p, Lanes, LANES, STATE_BYTES};

/// The 1600-bit permutation state, addressed either as lanes or as the
/// little-endian byte string FIPS 202 defines over them.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct State {
	lanes: Lanes,
}

impl State {
	/// Zeroed state.
	pub const fn new() -> Self {
		Self {lanes: [0; LANES]}
	}

	/// Lane (x, y), both in `0 .. 5`.
	pub fn lane(&self, x: usize, y: usize) -> u64 {
		self.lanes[super::index(x, y)]
	}

	pub fn lanes(&self) -> &Lanes {
		&self.lanes
	}

	pub fn lanes_mut(&mut self) -> &mut Lanes {
		&mut self.lanes
	}

	/// Applies Keccak-p[1600, `num_rounds`] in place.
	pub fn permute(&mut self, num_rounds: usize) {
		keccak_p(&mut self.lanes, num_rounds);
	}

	/// XORs `bytes` into the state starting at byte `offset`.
	pub fn xor_bytes(&mut self, offset: usize, bytes: &[u8]) {
		debug_assert!(offset + bytes.len() <= STATE_BYTES);

		let mut pos = offset;
		let mut rest = bytes;

		// leading bytes up to the next lane boundary
		while pos % 8 != 0 && !rest.is_empty() {
			self.lanes[pos / 8] ^= u64::from(rest[0]) << (8 * (pos % 8));
			pos += 1;
			rest = &rest[1 ..];
		}

		let mut chunks = rest.chunks_exact(8);

		for chunk in &mut chunks {
			self.lanes[pos / 8] ^= u64::from_le_bytes(chunk.try_into().unwrap());
			pos += 8;
		}

		for &byte in chunks.remainder() {
			self.lanes[pos / 8] ^= u64::from(byte) << (8 * (pos % 8));
			pos += 1;
		}
	}

	/// Zeroes the first `min(len, 200)` state bytes.
	pub fn clear_prefix(&mut self, len: usize) {
		let len = len.min(STATE_BYTES);

		for lane in &mut self.lanes[.. len / 8] {
			*lane = 0;
		}

		if len % 8 != 0 {
			self.lanes[len / 8] &= u64::MAX << (8 * (len % 8));
		}
	}

	/// Copies state bytes `offset .. offset + out.len()` into `out`.
	pub fn read_bytes(&self, offset: usize, out: &mut [u8]) {
		debug_assert!(offset + out.len() <= STATE_BYTES);

		for (i, byte) in out.iter_mut().enumerate() {
			let pos = offset + i;
			*byte = (self.lanes[pos / 8] >> (8 * (pos % 8))) as u8;
		}
	}
}

impl core::fmt::Debug for State {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.debug_struct("State").finish_non_exhaustive()
	}
}

#[test]
fn bytes_map_onto_lanes_little_endian() {
	let mut state = State::new();
	state.xor_bytes(0, &[0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0xff]);

	assert_eq!(state.lane(0, 0), 0x0807_0605_0403_0201);
	assert_eq!(state.lane(1, 0), 0xff);

	// byte 40 is the first byte of lane (0, 1)
	state.xor_bytes(40, &[0xaa]);
	assert_eq!(state.lane(0, 1), 0xaa);
}

#[test]
fn unaligned_xor_matches_bytewise_xor() {
	let input: [u8; 37] = core::array::from_fn(|i| (i as u8).wrapping_mul(31).wrapping_add(7));

	let mut unaligned = State::new();
	unaligned.xor_bytes(3, &input);

	let mut bytewise = State::new();
	for (i, &byte) in input.iter().enumerate() {
		bytewise.xor_bytes(3 + i, &[byte]);
	}

	assert_eq!(unaligned, bytewise);

	let mut out = [0; 37];
	unaligned.read_bytes(3, &mut out);
	assert_eq!(out, input);
}

#[test]
fn xor_twice_cancels() {
	let mut state = State::new();
	state.xor_bytes(5, b"sponge");
	state.xor_bytes(5, b"sponge");

	assert_eq!(state, State::new());
}

#[test]
fn clear_prefix_stops_mid_lane() {
	let mut state = State::new();
	state.xor_bytes(0, &[0xff; STATE_BYTES]);
	state.clear_prefix(11);

	let mut out = [0; 16];
	state.read_bytes(0, &mut out);

	assert_eq!(out[.. 11], [0; 11]);
	assert_eq!(out[11 ..], [0xff; 5]);

	state.clear_prefix(usize::MAX);
	assert_eq!(state, State::new());
}
