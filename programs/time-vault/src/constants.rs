use crate::state::ClosePolicy;

pub const STATE_SEED: &[u8] = b"state";
pub const VAULT_SEED: &[u8] = b"vault";

/// Seconds a deposit stays locked: 2 days.
pub const LOCK_DURATION: i64 = 2 * 24 * 60 * 60;

#[cfg(not(feature = "locked-close"))]
pub const CLOSE_POLICY: ClosePolicy = ClosePolicy::Unrestricted;

#[cfg(feature = "locked-close")]
pub const CLOSE_POLICY: ClosePolicy = ClosePolicy::RespectTimelock;
