use super::super::{index, Lanes};

pub fn pi(lanes: &mut Lanes) {
	let mut new_lanes = [0; 25];

	for x in 0 .. 5 {
		for y in 0 .. 5 {
			let new_x = y;
			let new_y = (2 * x + 3 * y) % 5;

			new_lanes[index(new_x, new_y)] = lanes[index(x, y)];
		}
	}

	*lanes = new_lanes;
}

#[test]
fn lane_positions_follow_the_affine_map() {
	let mut lanes = [0; 25];

	for (i, lane) in lanes.iter_mut().enumerate() {
		*lane = i as u64;
	}

	pi(&mut lanes);

	assert_eq!(lanes[index(0, 0)], index(0, 0) as u64);
	// (1, 0) -> (0, 2)
	assert_eq!(lanes[index(0, 2)], index(1, 0) as u64);
	// (0, 1) -> (1, 3)
	assert_eq!(lanes[index(1, 3)], index(0, 1) as u64);
	// (3, 4) -> (4, 3)
	assert_eq!(lanes[index(4, 3)], index(3, 4) as u64);
}
