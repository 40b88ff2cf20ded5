//! The Keccak-p[1600, nr] permutation.
//!
//! Lanes are stored flat, lane (x, y) at index `x + 5 * y`, which is also the
//! order in which FIPS 202 maps state bytes onto lanes.

mod constants;
mod state;

pub use constants::{RHO_OFFSETS, ROUND_CONSTANTS};
pub use state::State;

mod components {
	pub mod chi;
	pub mod iota;
	pub mod pi;
	pub mod rho;
	pub mod theta;
}

use components::chi::chi;
use components::iota::iota;
use components::pi::pi;
use components::rho::rho;
use components::theta::theta;

/// Number of 64-bit lanes in the state.
pub const LANES: usize = 25;

/// Size of the state in bytes.
pub const STATE_BYTES: usize = LANES * 8;

/// Rounds of Keccak-f[1600], i.e. `12 + 2 * log2(64)`.
pub const MAX_ROUNDS: usize = 24;

/// Raw lane array the step mappings operate on.
pub type Lanes = [u64; LANES];

/// Flat index of lane (x, y).
#[inline(always)]
pub const fn index(x: usize, y: usize) -> usize {
	x + 5 * y
}

/// Keccak-f[1600], i.e. Keccak-p[1600, 24].
pub fn keccak_f(lanes: &mut Lanes) {
	keccak_p(lanes, MAX_ROUNDS);
}

/// Keccak-p[1600, `num_rounds`]: the last `num_rounds` rounds of Keccak-f[1600].
///
/// # Panics
///
/// If `num_rounds` is not in `1 ..= 24`.
pub fn keccak_p(lanes: &mut Lanes, num_rounds: usize) {
	assert!(
		(1 ..= MAX_ROUNDS).contains(&num_rounds),
		"Keccak-p[1600] takes 1 to {} rounds, got {}", MAX_ROUNDS, num_rounds,
	);

	for round in MAX_ROUNDS - num_rounds .. MAX_ROUNDS {
		theta(lanes);
		rho(lanes);
		pi(lanes);
		chi(lanes);
		iota(lanes, round);
	}
}

#[test]
fn keccak_f_of_zero_state() {
	let mut lanes = [0; LANES];
	keccak_f(&mut lanes);

	assert_eq!(lanes[0], 0xf125_8f79_40e1_dde7);
	assert_eq!(lanes[1], 0x84d5_ccf9_33c0_478a);
	assert_eq!(lanes[2], 0xd598_261e_a65a_a9ee);
	assert_eq!(lanes[24], 0xeaf1_ff7b_5cec_a249);

	keccak_f(&mut lanes);

	assert_eq!(lanes[0], 0x2d5c_954d_f96e_cb3c);
}

#[test]
fn twelve_rounds_use_the_last_round_constants() {
	let mut lanes = [0; LANES];
	keccak_p(&mut lanes, 12);

	assert_eq!(lanes[0], 0x8e5e_5438_b9a7_8617);
	assert_eq!(lanes[24], 0xcffd_0d76_222c_a01c);
}

#[test]
fn single_round_permutes() {
	let mut lanes = [0; LANES];
	keccak_p(&mut lanes, 1);

	// theta, rho, pi and chi fix the zero state, so only iota's last constant remains
	assert_eq!(lanes[0], ROUND_CONSTANTS[23]);
	assert!(lanes[1 ..].iter().all(|&lane| lane == 0));
}

#[test]
#[should_panic(expected = "got 25")]
fn more_rounds_than_keccak_f_are_rejected() {
	keccak_p(&mut [0; LANES], 25);
}

#[test]
#[should_panic(expected = "got 0")]
fn zero_rounds_are_rejected() {
	keccak_p(&mut [0; LANES], 0);
}
