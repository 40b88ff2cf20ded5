use super::super::{index, Lanes};

pub fn theta(lanes: &mut Lanes) {
	let mut parities = [0u64; 5];

	for x in 0 .. 5 {
		for y in 0 .. 5 {
			parities[x] ^= lanes[index(x, y)];
		}
	}

	for x in 0 .. 5 {
		let xm1 = (x + 4) % 5;
		let xp1 = (x + 1) % 5;

		let crossed_parities = parities[xm1] ^ parities[xp1].rotate_left(1);

		for y in 0 .. 5 {
			lanes[index(x, y)] ^= crossed_parities;
		}
	}
}

#[test]
fn single_bit_spreads_to_neighbouring_columns() {
	let mut lanes = [0; 25];
	lanes[index(2, 3)] = 1;

	theta(&mut lanes);

	for y in 0 .. 5 {
		// column 3 sees column 2 as its left neighbour
		assert_eq!(lanes[index(3, y)], 1);
		// column 1 sees column 2 as its right neighbour, rotated by one
		assert_eq!(lanes[index(1, y)], 2);
		assert_eq!(lanes[index(0, y)], 0);
		assert_eq!(lanes[index(4, y)], 0);
	}

	// the source lane also receives nothing from its own column
	assert_eq!(lanes[index(2, 3)], 1);
}
