//! AES-256-GCM passkey cipher.
//!
//! Key: SHA-256 of the passkey. Nonce: first 12 bytes of
//! SHA-256(tag || key || plaintext), so encryption is deterministic and a
//! nonce is only ever reused for the identical message. Output is
//! `hex(nonce || ciphertext || tag)`; the GCM tag rejects a wrong passkey.

use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::{Aes256Gcm, Nonce};
use sha2::{Digest, Sha256};
use tracing::trace;
use zeroize::Zeroizing;

use super::Cipher;
use crate::error::{CodecError, Result};

const NONCE_SIZE: usize = 12;
const TAG_SIZE: usize = 16;
const NONCE_DOMAIN: &[u8] = b"courier/siv/v1";

/// Deterministic AES-256-GCM keyed by a passkey.
pub struct Aes256;

impl Aes256 {
    fn derive_key(passkey: &str) -> Zeroizing<[u8; 32]> {
        let mut key = Zeroizing::new([0u8; 32]);
        key.copy_from_slice(&Sha256::digest(passkey.as_bytes()));
        key
    }

    fn synthetic_nonce(key: &[u8], plaintext: &[u8]) -> [u8; NONCE_SIZE] {
        let mut hasher = Sha256::new();
        hasher.update(NONCE_DOMAIN);
        hasher.update(key);
        hasher.update(plaintext);
        let digest = hasher.finalize();

        let mut nonce = [0u8; NONCE_SIZE];
        nonce.copy_from_slice(&digest[..NONCE_SIZE]);
        nonce
    }

    fn cipher(key: &[u8]) -> Result<Aes256Gcm> {
        Aes256Gcm::new_from_slice(key)
            .map_err(|e| CodecError::EncryptionFailed(format!("{}", e)).into())
    }
}

impl Cipher for Aes256 {
    fn encrypt(&self, plaintext: &str, passkey: &str) -> Result<String> {
        trace!(plaintext_len = plaintext.len(), "encrypting");

        let key = Self::derive_key(passkey);
        let nonce = Self::synthetic_nonce(key.as_slice(), plaintext.as_bytes());
        let sealed = Self::cipher(key.as_slice())?
            .encrypt(Nonce::from_slice(&nonce), plaintext.as_bytes())
            .map_err(|e| CodecError::EncryptionFailed(format!("{}", e)))?;

        let mut output = Vec::with_capacity(NONCE_SIZE + sealed.len());
        output.extend_from_slice(&nonce);
        output.extend_from_slice(&sealed);

        trace!(ciphertext_len = output.len(), "encrypted");
        Ok(hex::encode(output))
    }

    fn decrypt(&self, ciphertext: &str, passkey: &str) -> Result<String> {
        trace!(ciphertext_len = ciphertext.len(), "decrypting");

        let raw = hex::decode(ciphertext.trim())
            .map_err(|e| CodecError::InvalidCiphertext(format!("{}", e)))?;
        if raw.len() < NONCE_SIZE + TAG_SIZE {
            return Err(CodecError::InvalidCiphertext("too short".to_string()).into());
        }

        let (nonce, sealed) = raw.split_at(NONCE_SIZE);
        let key = Self::derive_key(passkey);
        let plaintext = Zeroizing::new(
            Self::cipher(key.as_slice())?
                .decrypt(Nonce::from_slice(nonce), sealed)
                .map_err(|_| CodecError::DecryptionFailed)?,
        );

        String::from_utf8(plaintext.to_vec()).map_err(|_| CodecError::DecryptionFailed.into())
    }
}
