//! The keyed-collection vault.
//!
//! One file per collection under a single root directory, mirroring the
//! original browser-storage layout of one entry per fixed key. Values are
//! JSON, sealed with ChaCha20-Poly1305; the key is generated once per data
//! directory and stored beside the data.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use chacha20poly1305::aead::Aead;
use chacha20poly1305::{ChaCha20Poly1305, Key, KeyInit, Nonce};
use log::{debug, warn};
use rand::RngCore;
use serde::de::DeserializeOwned;
use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::errors::StorageError;

const KEY_FILE: &str = "vault.key";
const NONCE_LEN: usize = 12;

/// An obfuscated key/value store over a data directory.
pub struct LocalVault {
    root: PathBuf,
    cipher: ChaCha20Poly1305,
}

impl LocalVault {
    /// Opens (creating if necessary) the vault at `root`, generating the
    /// obfuscation key on first use.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        let key = load_or_create_key(&root)?;
        Ok(LocalVault {
            cipher: ChaCha20Poly1305::new(Key::from_slice(&key)),
            root,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn sealed_path(&self, collection: &str) -> PathBuf {
        self.root.join(format!("{collection}.vault"))
    }

    fn legacy_path(&self, collection: &str) -> PathBuf {
        self.root.join(format!("{collection}.json"))
    }

    /// Reads a collection, or `None` when it has never been written.
    ///
    /// Plain-JSON files from before the obfuscation layer are still accepted
    /// and get sealed on the next write.
    pub fn read<T: DeserializeOwned>(&self, collection: &str) -> Result<Option<T>, StorageError> {
        let sealed = self.sealed_path(collection);
        if sealed.exists() {
            let bytes = fs::read(&sealed)?;
            if bytes.len() <= NONCE_LEN {
                return Err(StorageError::Truncated);
            }
            let (nonce, ciphertext) = bytes.split_at(NONCE_LEN);
            let plain = self
                .cipher
                .decrypt(Nonce::from_slice(nonce), ciphertext)
                .map_err(|_| StorageError::Cipher)?;
            return Ok(Some(serde_json::from_slice(&plain)?));
        }

        let legacy = self.legacy_path(collection);
        if legacy.exists() {
            warn!("Collection '{collection}' found as plain JSON; it will be sealed on next write");
            let bytes = fs::read(&legacy)?;
            return Ok(Some(serde_json::from_slice(&bytes)?));
        }

        Ok(None)
    }

    /// Seals and writes a collection, replacing any previous version
    /// (including a legacy plain-JSON one).
    pub fn write<T: Serialize>(&self, collection: &str, value: &T) -> Result<(), StorageError> {
        let plain = serde_json::to_vec(value)?;

        let mut nonce = [0u8; NONCE_LEN];
        rand::thread_rng().fill_bytes(&mut nonce);
        let ciphertext = self
            .cipher
            .encrypt(Nonce::from_slice(&nonce), plain.as_slice())
            .map_err(|_| StorageError::Cipher)?;

        let mut bytes = Vec::with_capacity(NONCE_LEN + ciphertext.len());
        bytes.extend_from_slice(&nonce);
        bytes.extend_from_slice(&ciphertext);

        // Write-then-rename keeps a crash from leaving a half-written file.
        let path = self.sealed_path(collection);
        let tmp = self.root.join(format!("{collection}.vault.tmp"));
        fs::write(&tmp, &bytes)?;
        fs::rename(&tmp, &path)?;
        debug!("Sealed collection '{collection}' ({} bytes)", bytes.len());

        let legacy = self.legacy_path(collection);
        if legacy.exists() {
            let _ = fs::remove_file(legacy);
        }
        Ok(())
    }
}

/// Loads the vault key, generating and persisting one on first use. The key
/// is derived by hashing fresh entropy with the clock, matching the
/// original's generated-then-stored device key.
fn load_or_create_key(root: &Path) -> Result<[u8; 32], StorageError> {
    let path = root.join(KEY_FILE);
    if path.exists() {
        let encoded = fs::read_to_string(&path)?;
        let bytes = hex::decode(encoded.trim()).map_err(|_| StorageError::BadKey)?;
        return bytes.try_into().map_err(|_| StorageError::BadKey);
    }

    let mut seed = [0u8; 32];
    rand::thread_rng().fill_bytes(&mut seed);
    let mut hasher = Sha256::new();
    hasher.update(seed);
    hasher.update(
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis()
            .to_le_bytes(),
    );
    let key: [u8; 32] = hasher.finalize().into();
    fs::write(&path, hex::encode(key))?;
    Ok(key)
}
