mod key;
pub(crate) mod signing;

pub use key::SigningKey;
