//! Short-code generation
//!
//! Codes are 8 characters drawn uniformly from `[0-9a-z]`. The generator
//! performs no uniqueness check; collisions are caught by the primary-key
//! constraint on `url_mappings` at insert time.

use rand::RngExt;

const ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

pub const CODE_LENGTH: usize = 8;

/// Generate a fresh short code. ThreadRng is a CSPRNG, so codes are
/// uniform over the 36^8 space.
pub fn generate_short_code() -> String {
    let mut rng = rand::rng();
    (0..CODE_LENGTH)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect()
}

/// Codes outside this shape can never have been issued by the generator,
/// so redirect lookups reject them before touching the database.
pub fn is_valid_short_code(code: &str) -> bool {
    code.len() == CODE_LENGTH
        && code
            .bytes()
            .all(|b| b.is_ascii_digit() || b.is_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn generated_code_has_expected_shape() {
        let code = generate_short_code();
        assert_eq!(code.len(), CODE_LENGTH);
        assert!(code.bytes().all(|b| ALPHABET.contains(&b)));
    }

    #[test]
    fn generated_codes_are_distinct_in_practice() {
        let codes: HashSet<String> = (0..1000).map(|_| generate_short_code()).collect();
        assert_eq!(codes.len(), 1000);
    }

    #[test]
    fn validator_accepts_generated_codes() {
        for _ in 0..100 {
            assert!(is_valid_short_code(&generate_short_code()));
        }
    }

    #[test]
    fn validator_rejects_bad_shapes() {
        assert!(!is_valid_short_code(""));
        assert!(!is_valid_short_code("abc123"));
        assert!(!is_valid_short_code("abc12345x"));
        assert!(!is_valid_short_code("ABCD1234"));
        assert!(!is_valid_short_code("abcd-123"));
        assert!(!is_valid_short_code("abcd&123"));
    }
}
