//! `lopdf`-backed document engine.
//!
//! Protected outputs use the AES-256 standard security handler (revision 6)
//! with a freshly generated file encryption key per document.
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use lopdf::encryption::crypt_filters::{Aes256CryptFilter, CryptFilter};
use lopdf::{Document, EncryptionState, EncryptionVersion, Object, Permissions};
use rand::Rng;
use tracing::debug;

use super::engine::{DocumentEngine, EngineError};
use crate::types::{AccessPermissions, KEY_LENGTH_BITS, ProtectionPolicy};

const CRYPT_FILTER_NAME: &[u8] = b"StdCF";

#[derive(Debug, Clone, Copy, Default)]
pub struct PdfEngine;

impl PdfEngine {
    pub fn new() -> Self {
        Self
    }
}

fn map_load_error(err: lopdf::Error) -> EngineError {
    match err {
        lopdf::Error::IO(e) => EngineError::Io(e),
        lopdf::Error::Decryption(e) => EngineError::InvalidPassword(e.to_string()),
        other => EngineError::Malformed(other.to_string()),
    }
}

fn strip_encryption_dictionary(doc: &mut Document) {
    if let Ok(id) = doc.trailer.get(b"Encrypt").and_then(Object::as_reference) {
        doc.objects.remove(&id);
    }
    doc.trailer.remove(b"Encrypt");
}

fn to_lopdf_permissions(permissions: &AccessPermissions) -> Permissions {
    if permissions.is_unrestricted() {
        Permissions::all()
    } else {
        Permissions::from_bits_truncate(permissions.bits().into())
    }
}

impl DocumentEngine for PdfEngine {
    type Document = Document;

    fn open(&self, path: &Path, password: &str) -> Result<Document, EngineError> {
        let mut doc = Document::load(path).map_err(map_load_error)?;

        if doc.encryption_state.is_some() {
            // Already unlocked by `load` with the empty user password; only the
            // stale `/Encrypt` entry is left behind.
            debug!("{:?} opened without a password", path);
            strip_encryption_dictionary(&mut doc);
        } else if doc.is_encrypted() {
            debug!("Decrypting {:?}", path);
            doc.decrypt(password).map_err(|e| match e {
                lopdf::Error::Decryption(_) => EngineError::InvalidPassword(format!(
                    "The supplied password does not open this document ({e})"
                )),
                other => map_load_error(other),
            })?;
        }

        Ok(doc)
    }

    fn protect(&self, doc: &mut Document, policy: &ProtectionPolicy) -> Result<(), EngineError> {
        if policy.key_length != KEY_LENGTH_BITS || !policy.prefer_aes {
            return Err(EngineError::Unsupported(format!(
                "{}-bit key (prefer AES: {})",
                policy.key_length, policy.prefer_aes
            )));
        }

        // An empty owner password falls back to the user password.
        let owner_password = if policy.owner_password.is_empty() {
            &policy.user_password
        } else {
            &policy.owner_password
        };

        let mut file_encryption_key = [0u8; 32];
        rand::rng().fill(&mut file_encryption_key);

        let crypt_filter: Arc<dyn CryptFilter> = Arc::new(Aes256CryptFilter);
        let version = EncryptionVersion::V5 {
            encrypt_metadata: true,
            crypt_filters: BTreeMap::from([(CRYPT_FILTER_NAME.to_vec(), crypt_filter)]),
            file_encryption_key: &file_encryption_key,
            stream_filter: CRYPT_FILTER_NAME.to_vec(),
            string_filter: CRYPT_FILTER_NAME.to_vec(),
            owner_password,
            user_password: &policy.user_password,
            permissions: to_lopdf_permissions(&policy.permissions),
        };

        let state =
            EncryptionState::try_from(version).map_err(|e| EngineError::Malformed(e.to_string()))?;
        doc.encrypt(&state)
            .map_err(|e| EngineError::Malformed(e.to_string()))
    }

    fn save(&self, doc: &mut Document, path: &Path) -> Result<(), EngineError> {
        doc.save(path)?;
        Ok(())
    }
}
