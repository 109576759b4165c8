use anchor_lang::prelude::*;

#[event]
pub struct EscrowMade {
    pub escrow: Pubkey,
    pub maker: Pubkey,
    pub seed: u64,
    pub mint_a: Pubkey,
    pub mint_b: Pubkey,
    pub deposit: u64,
    pub receive: u64,
}

#[event]
pub struct EscrowTaken {
    pub escrow: Pubkey,
    pub maker: Pubkey,
    pub taker: Pubkey,
    pub seed: u64,
    /// Token B paid by the taker to the maker
    pub paid: u64,
    /// Token A released from the vault to the taker
    pub received: u64,
    /// Lamports returned to the maker by closing the escrow and vault
    pub rent: u64,
}

#[event]
pub struct EscrowRefunded {
    pub escrow: Pubkey,
    pub maker: Pubkey,
    pub seed: u64,
    pub refunded: u64,
    pub rent: u64,
}
