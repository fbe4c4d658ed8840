//! Secret encoding and encryption.
//!
//! Two independent transforms keep API keys out of plaintext in the
//! profile file:
//!
//! - **Obfuscation** (`encode`/`decode`): unkeyed Base-122. Hides a key from
//!   casual inspection and makes no confidentiality claim.
//! - **Encryption** (`encrypt`/`decrypt`): AES-256-GCM keyed by a user
//!   passkey. Deterministic on purpose, so the same key and passkey always
//!   produce the same stored value; do not reuse this as a general cipher.
//!
//! ## Adding a New Cipher
//!
//! 1. Implement the `Cipher` trait
//! 2. Add the implementation in a new file
//! 3. Re-export from this module

use crate::error::Result;

mod aes;
mod base122;

pub use aes::Aes256;
pub use base122::{decode, encode};

/// Passkey-based symmetric cipher.
pub trait Cipher {
    /// Encrypt `plaintext` under `passkey`, returning lowercase hex.
    ///
    /// # Errors
    ///
    /// Returns `CodecError::EncryptionFailed` if the cipher rejects the input.
    fn encrypt(&self, plaintext: &str, passkey: &str) -> Result<String>;

    /// Decrypt hex produced by [`Cipher::encrypt`].
    ///
    /// # Errors
    ///
    /// Returns `CodecError::InvalidCiphertext` for malformed input and
    /// `CodecError::DecryptionFailed` for a wrong passkey or tampered data.
    fn decrypt(&self, ciphertext: &str, passkey: &str) -> Result<String>;
}

/// Encrypt with the default cipher.
///
/// This is a convenience wrapper around `Aes256::encrypt`.
pub fn encrypt(plaintext: &str, passkey: &str) -> Result<String> {
    Aes256.encrypt(plaintext, passkey)
}

/// Decrypt with the default cipher.
///
/// This is a convenience wrapper around `Aes256::decrypt`.
pub fn decrypt(ciphertext: &str, passkey: &str) -> Result<String> {
    Aes256.decrypt(ciphertext, passkey)
}
