//! Byte-for-byte comparison against the RustCrypto `sha3` crate for every
//! message length up to 1024 bytes.

use sha3::digest::ExtendableOutput;
use sha3::{Digest, Sha3_224, Sha3_256, Sha3_384, Sha3_512, Shake128, Shake256};

const MAX_MSG_LEN: usize = 1024;

fn message(len: usize) -> Vec<u8> {
	(0 .. len).map(|i| (i.wrapping_mul(131) ^ len) as u8).collect()
}

macro_rules! compare_fixed {
	($test:ident, $ours:path, $theirs:ty) => {
		#[test]
		fn $test() {
			for len in 0 ..= MAX_MSG_LEN {
				let msg = message(len);

				let ours = $ours(&msg);
				let theirs = <$theirs as Digest>::digest(&msg);

				assert_eq!(ours.as_slice(), theirs.as_slice(), "digest mismatch (len={len})");
			}
		}
	};
}

compare_fixed!(sha3_224_matches_reference, sha3_sponge::sha3_224, Sha3_224);
compare_fixed!(sha3_256_matches_reference, sha3_sponge::sha3_256, Sha3_256);
compare_fixed!(sha3_384_matches_reference, sha3_sponge::sha3_384, Sha3_384);
compare_fixed!(sha3_512_matches_reference, sha3_sponge::sha3_512, Sha3_512);

macro_rules! compare_xof {
	($test:ident, $ours:path, $theirs:ty) => {
		#[test]
		fn $test() {
			for len in 0 ..= MAX_MSG_LEN {
				let msg = message(len);
				// vary the output length across rate boundaries too
				let out_len = (len * 7) % 600;

				let mut ours = vec![0; out_len];
				$ours(&msg, &mut ours);

				let mut theirs = vec![0; out_len];
				<$theirs as ExtendableOutput>::digest_xof(&msg, &mut theirs);

				assert_eq!(ours, theirs, "output mismatch (len={len}, out_len={out_len})");
			}
		}
	};
}

compare_xof!(shake128_matches_reference, sha3_sponge::shake128, Shake128);
compare_xof!(shake256_matches_reference, sha3_sponge::shake256, Shake256);

#[test]
fn algorithm_dispatch_matches_reference() {
	let msg = message(333);

	for algorithm in sha3_sponge::Algorithm::ALL {
		let len = algorithm.params().digest_len().unwrap_or(100);
		let ours = algorithm.digest(&msg, len).unwrap();

		let theirs = match algorithm {
			sha3_sponge::Algorithm::Sha3_224 => Sha3_224::digest(&msg).to_vec(),
			sha3_sponge::Algorithm::Sha3_256 => Sha3_256::digest(&msg).to_vec(),
			sha3_sponge::Algorithm::Sha3_384 => Sha3_384::digest(&msg).to_vec(),
			sha3_sponge::Algorithm::Sha3_512 => Sha3_512::digest(&msg).to_vec(),
			sha3_sponge::Algorithm::Shake128 => {
				let mut out = vec![0; len];
				Shake128::digest_xof(&msg, &mut out);
				out
			},
			sha3_sponge::Algorithm::Shake256 => {
				let mut out = vec![0; len];
				Shake256::digest_xof(&msg, &mut out);
				out
			},
			// no reference implementation to compare with
			sha3_sponge::Algorithm::TurboShake128 | sha3_sponge::Algorithm::TurboShake256 => continue,
		};

		assert_eq!(ours, theirs, "{algorithm}");
	}
}
