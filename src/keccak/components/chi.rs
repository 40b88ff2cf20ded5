use super::super::{index, Lanes};

pub fn chi(lanes: &mut Lanes) {
	for y in 0 .. 5 {
		let mut row = [0u64; 5];

		for x in 0 .. 5 {
			row[x] = lanes[index(x, y)];
		}

		for x in 0 .. 5 {
			let xp1 = (x + 1) % 5;
			let xp2 = (x + 2) % 5;

			lanes[index(x, y)] = row[x] ^ (!row[xp1] & row[xp2]);
		}
	}
}

#[test]
fn chi_is_a_no_op_on_uniform_rows() {
	// !a & a == 0, so rows of identical lanes are fixed points
	let mut lanes = [0xdead_beef_0123_4567; 25];
	let before = lanes;

	chi(&mut lanes);

	assert_eq!(lanes, before);
}
