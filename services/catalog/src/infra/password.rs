use pbkdf2::pbkdf2_hmac;
use sha2::Sha256;

use crate::domain::repository::PasswordHasher;

/// PBKDF2-HMAC-SHA256 with a service-wide secret salt, hex encoded.
#[derive(Clone)]
pub struct Pbkdf2Hasher {
    salt: String,
    iterations: u32,
}

impl Pbkdf2Hasher {
    pub fn new(salt: impl Into<String>, iterations: u32) -> Self {
        Self {
            salt: salt.into(),
            iterations: iterations.max(1),
        }
    }
}

impl PasswordHasher for Pbkdf2Hasher {
    fn hash(&self, password: &str) -> String {
        let mut key = [0u8; 32];
        pbkdf2_hmac::<Sha256>(
            password.as_bytes(),
            self.salt.as_bytes(),
            self.iterations,
            &mut key,
        );
        hex::encode(key)
    }
}
