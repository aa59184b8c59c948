//! Ciphertext-keyed autokey stripping for numeric symbol streams.

use crate::error::{IsomorphError, Result};

/// Subtracts the ciphertext from itself at a lag of `key_len`:
/// `out[i] = (msg[i + key_len] - msg[i]) mod modulus`.
///
/// Under a ciphertext-keyed autokey cipher this cancels the running key and
/// leaves plaintext differences, at the cost of the first `key_len`
/// symbols. Messages no longer than `key_len` strip to nothing.
pub fn strip_autokey(msg: &[u32], key_len: usize, modulus: u32) -> Result<Vec<u32>> {
    if key_len == 0 || modulus == 0 {
        return Err(IsomorphError::InvalidAutokey { key_len, modulus });
    }

    Ok(msg
        .iter()
        .skip(key_len)
        .zip(msg)
        .map(|(&c, &k)| (c % modulus + modulus - k % modulus) % modulus)
        .collect())
}
