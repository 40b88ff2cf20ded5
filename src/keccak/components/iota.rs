use super::super::{Lanes, ROUND_CONSTANTS};

pub fn iota(lanes: &mut Lanes, round_number: usize) {
	lanes[0] ^= ROUND_CONSTANTS[round_number];
}
