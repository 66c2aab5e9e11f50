use launchlens_core::Launch;

use crate::StorageError;

pub fn encode_favorites(favorites: &[Launch]) -> Result<Vec<u8>, StorageError> {
    Ok(serde_json::to_vec(favorites)?)
}

pub fn decode_favorites(bytes: &[u8]) -> Result<Vec<Launch>, StorageError> {
    Ok(serde_json::from_slice(bytes)?)
}
