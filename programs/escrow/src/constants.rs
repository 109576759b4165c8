/// Prefix of the escrow PDA: `["escrow", maker, seed.to_le_bytes()]`
pub const ESCROW_SEED: &[u8] = b"escrow";
