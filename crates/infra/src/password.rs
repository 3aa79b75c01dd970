//! Password hashing and generation.

use rand::Rng;
use rand::distr::Alphanumeric;

/// Password error.
#[derive(Debug, thiserror::Error)]
pub enum PasswordError {
    #[error("hashing failed: {0}")]
    Hash(#[from] bcrypt::BcryptError),
    #[error("password generation failed: {0}")]
    Generate(String),
}

/// One-way password encryption.
pub trait PasswordHasher: Send + Sync {
    fn hash(&self, plaintext: &str) -> Result<String, PasswordError>;

    fn verify(&self, plaintext: &str, hash: &str) -> Result<bool, PasswordError>;
}

/// Source of new random passwords.
pub trait PasswordGenerator: Send + Sync {
    fn generate(&self) -> Result<String, PasswordError>;
}

#[derive(Debug, Clone, Copy)]
pub struct BcryptPasswordHasher {
    cost: u32,
}

impl BcryptPasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }
}

impl Default for BcryptPasswordHasher {
    fn default() -> Self {
        Self::new(bcrypt::DEFAULT_COST)
    }
}

impl PasswordHasher for BcryptPasswordHasher {
    fn hash(&self, plaintext: &str) -> Result<String, PasswordError> {
        Ok(bcrypt::hash(plaintext, self.cost)?)
    }

    fn verify(&self, plaintext: &str, hash: &str) -> Result<bool, PasswordError> {
        Ok(bcrypt::verify(plaintext, hash)?)
    }
}

/// Alphanumeric passwords of a fixed length, drawn from the thread RNG.
#[derive(Debug, Clone, Copy)]
pub struct RandomPasswordGenerator {
    length: usize,
}

impl RandomPasswordGenerator {
    pub const MIN_LENGTH: usize = 8;

    pub fn new(length: usize) -> Result<Self, PasswordError> {
        if length < Self::MIN_LENGTH {
            return Err(PasswordError::Generate(format!(
                "password length must be at least {}, got {length}",
                Self::MIN_LENGTH
            )));
        }
        Ok(Self { length })
    }
}

impl Default for RandomPasswordGenerator {
    fn default() -> Self {
        Self { length: 12 }
    }
}

impl PasswordGenerator for RandomPasswordGenerator {
    fn generate(&self) -> Result<String, PasswordError> {
        Ok(rand::rng()
            .sample_iter(&Alphanumeric)
            .take(self.length)
            .map(char::from)
            .collect())
    }
}
