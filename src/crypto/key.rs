use rand::RngCore;

const GENERATED_KEY_LENGTH: usize = 64;

/// The secret used to sign cookie values.
///
/// Any byte string is accepted. For security, it _should_ be long and
/// cryptographically random: use [`SigningKey::generate()`] or load one from a
/// secret management service.
///
/// ```rust
/// use cookie_scope::SigningKey;
///
/// let key = SigningKey::from("a secret loaded from somewhere");
/// assert_eq!(key.sign("value"), key.sign("value"));
/// assert!(key.verify("value", &key.sign("value")));
/// ```
#[allow(clippy::derived_hash_with_manual_eq)]
#[derive(Clone, Eq, Hash)]
pub struct SigningKey(Vec<u8>);

#[cfg(feature = "serde")]
mod deser {
    use crate::SigningKey;
    use serde::Deserializer;

    impl<'de> serde::Deserialize<'de> for SigningKey {
        fn deserialize<D>(deserializer: D) -> Result<SigningKey, D::Error>
        where
            D: Deserializer<'de>,
        {
            let secret = String::deserialize(deserializer)?;
            Ok(SigningKey::from(secret))
        }
    }
}

impl PartialEq for SigningKey {
    fn eq(&self, other: &Self) -> bool {
        use subtle::ConstantTimeEq;

        self.0.ct_eq(&other.0).into()
    }
}

impl std::fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("SigningKey").field(&"***").finish()
    }
}

impl SigningKey {
    /// Generates a signing key from a secure, random source.
    ///
    /// # Panics
    ///
    /// Panics if randomness cannot be retrieved from the operating system. See
    /// [`SigningKey::try_generate()`] for a non-panicking version.
    pub fn generate() -> SigningKey {
        Self::try_generate().expect("failed to generate `SigningKey` from randomness")
    }

    /// Attempts to generate a signing key from a secure, random source.
    /// Returns `None` if randomness cannot be retrieved from the operating system.
    pub fn try_generate() -> Option<SigningKey> {
        let mut rng = rand::thread_rng();
        let mut key: Vec<u8> = vec![0; GENERATED_KEY_LENGTH];
        rng.try_fill_bytes(&mut key).ok()?;
        Some(SigningKey(key))
    }

    /// The keyed hash of `message`: HMAC-SHA256, hex-encoded.
    pub fn sign(&self, message: &str) -> String {
        super::signing::keyed_hash(&self.0, message)
    }

    /// Returns `true` if `signature` is exactly [`SigningKey::sign()`] of `message`.
    pub fn verify(&self, message: &str, signature: &str) -> bool {
        super::signing::verify(&self.0, message, signature)
    }
}

impl From<Vec<u8>> for SigningKey {
    fn from(value: Vec<u8>) -> Self {
        SigningKey(value)
    }
}

impl From<&[u8]> for SigningKey {
    fn from(value: &[u8]) -> Self {
        SigningKey(value.to_vec())
    }
}

impl From<String> for SigningKey {
    fn from(value: String) -> Self {
        SigningKey(value.into_bytes())
    }
}

impl From<&str> for SigningKey {
    fn from(value: &str) -> Self {
        SigningKey(value.as_bytes().to_vec())
    }
}
