//! C ABI entry points.
//!
//! Every function returns `0` on success and `-1` if a pointer that must
//! address a non-empty buffer is null. Null is accepted for empty buffers.
//! Nothing is written unless the call succeeds, and no pointer is retained
//! past the call.

use core::ffi::c_int;
use core::slice;

use crate::error::{Error, Result};
use crate::hash::{sha3_224, sha3_256, sha3_384, sha3_512, shake128, shake256};

const SUCCESS: c_int = 0;
const NULL_POINTER: c_int = -1;

/// # Safety
///
/// `ptr` must be valid for `len` reads unless `len` is zero.
unsafe fn input<'a>(ptr: *const u8, len: usize) -> Result<&'a [u8]> {
	if len == 0 {
		return Ok(&[]);
	}

	if ptr.is_null() {
		return Err(Error::NullPointer("message"));
	}

	// SAFETY: non-null, and the caller vouches for `len` readable bytes
	Ok(unsafe {slice::from_raw_parts(ptr, len)})
}

/// # Safety
///
/// `ptr` must be valid for `len` writes unless `len` is zero, and must not
/// overlap the message.
unsafe fn output<'a>(ptr: *mut u8, len: usize) -> Result<&'a mut [u8]> {
	if len == 0 {
		return Ok(&mut []);
	}

	if ptr.is_null() {
		return Err(Error::NullPointer("output"));
	}

	// SAFETY: non-null, and the caller vouches for `len` writable bytes
	Ok(unsafe {slice::from_raw_parts_mut(ptr, len)})
}

fn status(entry_point: &'static str, result: Result<()>) -> c_int {
	match result {
		Ok(()) => SUCCESS,
		Err(err) => {
			tracing::warn!(entry_point, %err, "rejected foreign call");
			NULL_POINTER
		},
	}
}

unsafe fn fixed<const N: usize>(
	hash: fn(&[u8]) -> [u8; N],
	msg: *const u8,
	msg_len: usize,
	digest: *mut u8,
) -> Result<()> {
	let msg = unsafe {input(msg, msg_len)?};
	let digest = unsafe {output(digest, N)?};

	digest.copy_from_slice(&hash(msg));

	Ok(())
}

unsafe fn xof(
	function: fn(&[u8], &mut [u8]),
	msg: *const u8,
	msg_len: usize,
	out: *mut u8,
	out_len: usize,
) -> Result<()> {
	let msg = unsafe {input(msg, msg_len)?};
	let out = unsafe {output(out, out_len)?};

	function(msg, out);

	Ok(())
}

/// Writes the 28-byte SHA3-224 digest of `msg[.. msg_len]` to `digest`.
///
/// # Safety
///
/// `msg` must be readable for `msg_len` bytes and `digest` writable for 28
/// bytes; the two must not overlap.
#[no_mangle]
pub unsafe extern "C" fn sha3_224_hash(msg: *const u8, msg_len: usize, digest: *mut u8) -> c_int {
	tracing::trace!(msg_len, "sha3_224_hash");
	status("sha3_224_hash", unsafe {fixed::<28>(sha3_224, msg, msg_len, digest)})
}

/// Writes the 32-byte SHA3-256 digest of `msg[.. msg_len]` to `digest`.
///
/// # Safety
///
/// `msg` must be readable for `msg_len` bytes and `digest` writable for 32
/// bytes; the two must not overlap.
#[no_mangle]
pub unsafe extern "C" fn sha3_256_hash(msg: *const u8, msg_len: usize, digest: *mut u8) -> c_int {
	tracing::trace!(msg_len, "sha3_256_hash");
	status("sha3_256_hash", unsafe {fixed::<32>(sha3_256, msg, msg_len, digest)})
}

/// Writes the 48-byte SHA3-384 digest of `msg[.. msg_len]` to `digest`.
///
/// # Safety
///
/// `msg` must be readable for `msg_len` bytes and `digest` writable for 48
/// bytes; the two must not overlap.
#[no_mangle]
pub unsafe extern "C" fn sha3_384_hash(msg: *const u8, msg_len: usize, digest: *mut u8) -> c_int {
	tracing::trace!(msg_len, "sha3_384_hash");
	status("sha3_384_hash", unsafe {fixed::<48>(sha3_384, msg, msg_len, digest)})
}

/// Writes the 64-byte SHA3-512 digest of `msg[.. msg_len]` to `digest`.
///
/// # Safety
///
/// `msg` must be readable for `msg_len` bytes and `digest` writable for 64
/// bytes; the two must not overlap.
#[no_mangle]
pub unsafe extern "C" fn sha3_512_hash(msg: *const u8, msg_len: usize, digest: *mut u8) -> c_int {
	tracing::trace!(msg_len, "sha3_512_hash");
	status("sha3_512_hash", unsafe {fixed::<64>(sha3_512, msg, msg_len, digest)})
}

/// Writes `out_len` bytes of SHAKE128 output for `msg[.. msg_len]` to `out`.
///
/// # Safety
///
/// `msg` must be readable for `msg_len` bytes and `out` writable for
/// `out_len` bytes; the two must not overlap.
#[no_mangle]
pub unsafe extern "C" fn shake128_xof(msg: *const u8, msg_len: usize, out: *mut u8, out_len: usize) -> c_int {
	tracing::trace!(msg_len, out_len, "shake128_xof");
	status("shake128_xof", unsafe {xof(shake128, msg, msg_len, out, out_len)})
}

/// Writes `out_len` bytes of SHAKE256 output for `msg[.. msg_len]` to `out`.
///
/// # Safety
///
/// `msg` must be readable for `msg_len` bytes and `out` writable for
/// `out_len` bytes; the two must not overlap.
#[no_mangle]
pub unsafe extern "C" fn shake256_xof(msg: *const u8, msg_len: usize, out: *mut u8, out_len: usize) -> c_int {
	tracing::trace!(msg_len, out_len, "shake256_xof");
	status("shake256_xof", unsafe {xof(shake256, msg, msg_len, out, out_len)})
}
