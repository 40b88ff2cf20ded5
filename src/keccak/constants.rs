use super::{index, LANES, MAX_ROUNDS};

const fn step_lfsr(state: u8) -> (u8, bool) {
	let new_bit = ((state & 0x8e).count_ones() & 1) as u8;
	let lfsr_output = state & 0x80 != 0;
	let new_state = (state << 1) | new_bit;

	(new_state, lfsr_output)
}

const fn compute_round_constants() -> [u64; MAX_ROUNDS] {
	let mut lfsr = 0x80;
	let mut out = [0; MAX_ROUNDS];

	let mut i = 0;

	while i < MAX_ROUNDS {
		let mut j = 0;

		// bit positions 2 ** j - 1 for j in 0 ..= log2(64)
		while j < 7 {
			let place = (1 << j) - 1;

			let (new_lfsr, lfsr_out) = step_lfsr(lfsr);
			lfsr = new_lfsr;

			if lfsr_out {
				out[i] |= 1 << place;
			}

			j += 1;
		}

		i += 1;
	}

	out
}

const fn compute_rho_offsets() -> [u32; LANES] {
	let mut out = [0; LANES];
	let mut rotation_amount = 0;

	let mut x = 1;
	let mut y = 0;
	let mut t = 0;

	// walks every lane except (0, 0), which keeps offset 0
	while t < 24 {
		rotation_amount += t + 1;
		out[index(x, y)] = (rotation_amount % 64) as u32;

		let new_x = y;
		let new_y = (2 * x + 3 * y) % 5;

		x = new_x;
		y = new_y;
		t += 1;
	}

	out
}

/// Iota constants, one per round of Keccak-f[1600].
pub const ROUND_CONSTANTS: [u64; MAX_ROUNDS] = compute_round_constants();

/// Rho rotation offsets, indexed like the lanes of [`State`](super::State).
pub const RHO_OFFSETS: [u32; LANES] = compute_rho_offsets();

#[test]
fn round_constants_match_fips202() {
	assert_eq!(ROUND_CONSTANTS[0], 0x0000_0000_0000_0001);
	assert_eq!(ROUND_CONSTANTS[1], 0x0000_0000_0000_8082);
	assert_eq!(ROUND_CONSTANTS[2], 0x8000_0000_0000_808a);
	assert_eq!(ROUND_CONSTANTS[11], 0x0000_0000_8000_000a);
	assert_eq!(ROUND_CONSTANTS[23], 0x8000_0000_8000_8008);
}

#[test]
fn rho_offsets_match_fips202() {
	assert_eq!(RHO_OFFSETS, [
		0, 1, 62, 28, 27,
		36, 44, 6, 55, 20,
		3, 10, 43, 25, 39,
		41, 45, 15, 21, 8,
		18, 2, 61, 56, 14,
	]);
}
