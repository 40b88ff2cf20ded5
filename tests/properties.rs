use proptest::collection::vec;
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sha3_sponge::{sha3_256, Algorithm, Sponge, TurboShake256};

fn hamming_distance(a: &[u8], b: &[u8]) -> u32 {
	a.iter().zip(b).map(|(x, y)| (x ^ y).count_ones()).sum()
}

proptest! {
	#[test]
	fn hashing_is_deterministic(msg in vec(any::<u8>(), 0 .. 600)) {
		for algorithm in Algorithm::ALL {
			let len = algorithm.params().digest_len().unwrap_or(64);

			prop_assert_eq!(algorithm.digest(&msg, len).unwrap(), algorithm.digest(&msg, len).unwrap());
		}
	}

	#[test]
	fn fixed_output_lengths(msg in vec(any::<u8>(), 0 .. 600)) {
		let expected = [
			(Algorithm::Sha3_224, 28),
			(Algorithm::Sha3_256, 32),
			(Algorithm::Sha3_384, 48),
			(Algorithm::Sha3_512, 64),
		];

		for (algorithm, len) in expected {
			prop_assert_eq!(algorithm.params().digest_len(), Some(len));
			prop_assert_eq!(algorithm.digest(&msg, len).unwrap().len(), len);
			prop_assert!(algorithm.digest(&msg, len + 1).is_err());
		}
	}

	#[test]
	fn xof_output_is_prefix_extensible(
		msg in vec(any::<u8>(), 0 .. 400),
		n in 0usize .. 400,
		k in 1usize .. 400,
	) {
		for algorithm in [Algorithm::Shake128, Algorithm::Shake256, Algorithm::TurboShake128, Algorithm::TurboShake256] {
			let short = algorithm.digest(&msg, n).unwrap();
			let long = algorithm.digest(&msg, n + k).unwrap();

			prop_assert_eq!(&long[.. n], &short[..]);
		}
	}

	#[test]
	fn split_absorb_and_squeeze_match_one_shot(
		msg in vec(any::<u8>(), 0 .. 700),
		absorb_split in any::<prop::sample::Index>(),
		squeeze_split in any::<prop::sample::Index>(),
	) {
		let out_len = 450;

		for algorithm in Algorithm::ALL {
			let params = *algorithm.params();
			let out_len = params.digest_len().unwrap_or(out_len);
			let one_shot = algorithm.digest(&msg, out_len).unwrap();

			let cut = absorb_split.index(msg.len() + 1);
			let mut sponge = Sponge::new(params);
			sponge.absorb(&msg[.. cut]);
			sponge.absorb(&msg[cut ..]);

			let mut reader = sponge.finalize();
			let mut split = vec![0; out_len];
			let at = squeeze_split.index(out_len + 1);
			reader.squeeze(&mut split[.. at]);
			reader.squeeze(&mut split[at ..]);

			prop_assert_eq!(split, one_shot);
		}
	}

	#[test]
	fn domain_separation_changes_output(msg in vec(any::<u8>(), 0 .. 300), domain in 0x01u8 ..= 0x7e) {
		let mut a = [0; 32];
		let mut b = [0; 32];

		let mut hasher = TurboShake256::new(domain).unwrap();
		hasher.update(&msg);
		hasher.finalize_xof().squeeze(&mut a);

		let mut hasher = TurboShake256::new(domain + 1).unwrap();
		hasher.update(&msg);
		hasher.finalize_xof().squeeze(&mut b);

		prop_assert_ne!(a, b);
	}
}

#[test]
fn single_bit_flips_avalanche() {
	let mut rng = StdRng::seed_from_u64(0x5ea3_0001);
	let samples: u32 = 256;
	let mut total = 0;

	for _ in 0 .. samples {
		let len = rng.random_range(1 .. 300);
		let mut msg = vec![0u8; len];
		rng.fill(&mut msg[..]);

		let bit = rng.random_range(0 .. len * 8);
		let before = sha3_256(&msg);
		msg[bit / 8] ^= 1 << (bit % 8);
		let after = sha3_256(&msg);

		let distance = hamming_distance(&before, &after);

		// binomial(256, 1/2) is never this far from 128 in practice
		assert!((64 ..= 192).contains(&distance), "distance {distance} for bit {bit} of {len} bytes");
		total += distance;
	}

	let mean = f64::from(total) / f64::from(samples);
	assert!((124.0 .. 132.0).contains(&mean), "mean distance {mean}");
}
