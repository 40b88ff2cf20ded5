use super::super::{Lanes, RHO_OFFSETS};

pub fn rho(lanes: &mut Lanes) {
	for (lane, &offset) in lanes.iter_mut().zip(RHO_OFFSETS.iter()) {
		*lane = lane.rotate_left(offset);
	}
}
