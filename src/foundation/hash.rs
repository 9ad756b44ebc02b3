//! Deterministic hashing and categorical selection.
//!
//! Every "random" choice in the crate goes through [`hash_salted`]. The hash is CRC32 (IEEE,
//! reflected, the same checksum zlib and PNG use), so picks are reproducible across processes,
//! platforms, and re-implementations.

use crate::foundation::error::{AvatarError, AvatarResult};

const CRC32_POLY: u32 = 0xEDB8_8320;

static CRC32_TABLE: [u32; 256] = build_table();

const fn build_table() -> [u32; 256] {
    let mut table = [0u32; 256];
    let mut i = 0;
    while i < 256 {
        let mut c = i as u32;
        let mut k = 0;
        while k < 8 {
            c = if c & 1 != 0 {
                CRC32_POLY ^ (c >> 1)
            } else {
                c >> 1
            };
            k += 1;
        }
        table[i] = c;
        i += 1;
    }
    table
}

/// Streaming CRC32 state.
#[derive(Clone, Copy)]
pub(crate) struct Crc32(u32);

impl Crc32 {
    pub(crate) fn new() -> Self {
        Self(0xFFFF_FFFF)
    }

    pub(crate) fn write_bytes(&mut self, bytes: &[u8]) {
        let mut c = self.0;
        for &b in bytes {
            c = CRC32_TABLE[((c ^ u32::from(b)) & 0xFF) as usize] ^ (c >> 8);
        }
        self.0 = c;
    }

    pub(crate) fn finish(self) -> u32 {
        self.0 ^ 0xFFFF_FFFF
    }
}

pub fn crc32(bytes: &[u8]) -> u32 {
    let mut h = Crc32::new();
    h.write_bytes(bytes);
    h.finish()
}

/// Hash of `key ++ salt` without allocating the concatenation.
pub fn hash_salted(key: &str, salt: &str) -> u32 {
    let mut h = Crc32::new();
    h.write_bytes(key.as_bytes());
    h.write_bytes(salt.as_bytes());
    h.finish()
}

/// Index selected by `hash(key ++ salt) % len`.
pub fn pick_index(key: &str, salt: &str, len: usize) -> AvatarResult<usize> {
    if len == 0 {
        return Err(AvatarError::empty_domain(format!(
            "cannot pick '{salt}' from an empty option list"
        )));
    }
    Ok(hash_salted(key, salt) as usize % len)
}

/// Pick one element of `options` by salted hash.
pub fn pick<'a, T>(key: &str, salt: &str, options: &'a [T]) -> AvatarResult<&'a T> {
    let idx = pick_index(key, salt, options.len())?;
    Ok(&options[idx])
}

/// Deterministic coin flip: `true` with probability ~`p` over the key space.
///
/// Mirrors a percent roll: the hash is reduced to `0..=100` and compared against `p`.
pub fn chance(key: &str, salt: &str, p: f64) -> bool {
    let roll = f64::from(hash_salted(key, salt) % 101) / 100.0;
    roll < p
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/hash.rs"]
mod tests;
