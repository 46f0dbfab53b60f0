use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

/// Compute HMAC-SHA256 of `message` under `key`, hex-encoded (lower case).
pub(crate) fn keyed_hash(key: &[u8], message: &str) -> String {
    let mut mac = Hmac::<Sha256>::new_from_slice(key).expect("HMAC accepts any key size");
    mac.update(message.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

/// Recompute the keyed hash of `message` and compare it with `signature`.
///
/// The comparison is exact string equality, performed in constant time.
pub(crate) fn verify(key: &[u8], message: &str, signature: &str) -> bool {
    let expected = keyed_hash(key, message);
    expected.as_bytes().ct_eq(signature.as_bytes()).into()
}
