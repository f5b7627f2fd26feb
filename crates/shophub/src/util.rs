use rand::Rng;
use regex::Regex;

use crate::{Error, Result, Success};

lazy_static! {
    static ref ARGON_CONFIG: argon2::Config<'static> = argon2::Config::default();
}

/// Lowercase an email so lookups are case-insensitive
pub fn normalise_email(original: String) -> String {
    original.trim().to_lowercase()
}

/// Check that an email is shaped like an email
pub fn validate_email(email: &str) -> Success {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new("^[^@\\s]+@[^@\\s]+\\.[^@\\s]+$").unwrap();
    }

    if EMAIL_RE.is_match(email) {
        Ok(())
    } else {
        Err(Error::IncorrectData { with: "email" })
    }
}

/// Draw a 6-digit one-time code, uniform over [100000, 999999]
pub fn generate_verification_code() -> String {
    rand::thread_rng().gen_range(100_000..1_000_000).to_string()
}

/// Generate a 256-bit hex token for the URL-based reset path
pub fn generate_reset_token() -> String {
    let mut bytes = [0u8; 32];
    rand::thread_rng().fill(&mut bytes[..]);
    hex::encode(bytes)
}

/// Hash a password using argon2
pub fn hash_password(plaintext_password: String) -> Result<String> {
    argon2::hash_encoded(
        plaintext_password.as_bytes(),
        nanoid::nanoid!(24).as_bytes(),
        &ARGON_CONFIG,
    )
    .map_err(|_| Error::InternalError)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verification_codes_are_six_digits() {
        let re = Regex::new("^[0-9]{6}$").unwrap();

        for _ in 0..1000 {
            let code = generate_verification_code();
            assert!(re.is_match(&code));

            let value: u32 = code.parse().unwrap();
            assert!((100_000..=999_999).contains(&value));
        }
    }

    #[test]
    fn reset_tokens_are_256_bit_hex() {
        let token = generate_reset_token();
        assert_eq!(token.len(), 64);
        assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn email_normalisation_lowercases() {
        assert_eq!(
            normalise_email("  A@X.Com ".to_string()),
            "a@x.com".to_string()
        );
    }

    #[test]
    fn email_validation() {
        assert!(validate_email("a@x.com").is_ok());
        assert!(validate_email("invalid").is_err());
        assert!(validate_email("a b@x.com").is_err());
    }

    #[test]
    fn password_hash_round_trip() {
        let hash = hash_password("example password".to_string()).unwrap();
        assert!(argon2::verify_encoded(&hash, b"example password").unwrap());
        assert!(!argon2::verify_encoded(&hash, b"other password").unwrap());
    }
}
