// Copyright (c) 2022 MASSA LABS <info@massa.net>

use krypto_models::KryptoError;

fn split_record(record: &[u8], salt_size: usize) -> Result<(&[u8], &[u8]), KryptoError> {
    let data_len = record
        .len()
        .checked_sub(salt_size)
        .ok_or(KryptoError::RecordTooShort {
            actual: record.len(),
            salt_size,
        })?;
    Ok(record.split_at(data_len))
}

/// Derived key part of a decoded record: everything but the last
/// `salt_size` bytes.
pub fn extract_data(record: &[u8], salt_size: usize) -> Result<&[u8], KryptoError> {
    Ok(split_record(record, salt_size)?.0)
}

/// Salt part of a decoded record: its last `salt_size` bytes.
pub fn extract_salt(record: &[u8], salt_size: usize) -> Result<&[u8], KryptoError> {
    Ok(split_record(record, salt_size)?.1)
}
