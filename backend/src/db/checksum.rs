//! Checksum calculation for dataset fingerprints.

use sha2::{Digest, Sha256};

/// Calculate the SHA-256 checksum of one or more raw source documents.
///
/// Parts are hashed in order with a length prefix, so `["ab", "c"]` and
/// `["a", "bc"]` produce different checksums.
///
/// # Returns
/// Hexadecimal string representation of the SHA-256 hash.
pub fn calculate_checksum<I, B>(parts: I) -> String
where
    I: IntoIterator<Item = B>,
    B: AsRef<[u8]>,
{
    let mut hasher = Sha256::new();
    for part in parts {
        let bytes = part.as_ref();
        hasher.update((bytes.len() as u64).to_le_bytes());
        hasher.update(bytes);
    }
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checksum_consistency() {
        let content = r#"[{"id": 1}]"#;
        assert_eq!(calculate_checksum([content]), calculate_checksum([content]));
        assert_eq!(calculate_checksum([content]).len(), 64);
    }

    #[test]
    fn test_different_content_different_checksum() {
        let checksum1 = calculate_checksum([r#"{"test": "data1"}"#]);
        let checksum2 = calculate_checksum([r#"{"test": "data2"}"#]);
        assert_ne!(checksum1, checksum2);
    }

    #[test]
    fn test_part_boundaries_matter() {
        assert_ne!(calculate_checksum(["ab", "c"]), calculate_checksum(["a", "bc"]));
    }
}
