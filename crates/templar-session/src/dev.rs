//! Local credential minting for development.

use rand::Rng;

use crate::{Credential, SessionError, SessionProvider};

/// A [`SessionProvider`] that mints random local tokens.
///
/// No network, no authority, no validation — every call succeeds with a
/// fresh 32-character hex token (128 bits of randomness). This exists so
/// demos and local hacking don't need a running intermediary.
///
/// Never use this in production: the tokens it produces authorize nothing,
/// and a real vendor widget will reject them.
#[derive(Debug, Clone, Copy, Default)]
pub struct DevProvider;

impl SessionProvider for DevProvider {
    async fn acquire(
        &self,
        user_id: &str,
    ) -> Result<Credential, SessionError> {
        tracing::warn!(user_id, "DevProvider minting local credential — development only");
        Ok(Credential::new(random_token()))
    }
}

/// Generates a random 32-character hex string (128 bits of entropy).
fn random_token() -> String {
    let mut rng = rand::rng();
    let bytes: [u8; 16] = rng.random();
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}
