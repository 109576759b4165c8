use anchor_lang::prelude::*;

#[error_code]
pub enum EscrowError {
    #[msg("Duplicate escrow: an escrow already exists for this maker and seed")]
    DuplicateEscrow,
    #[msg("Insufficient funds: source token account cannot cover the transfer")]
    InsufficientFunds,
    #[msg("Escrow not found: already settled, refunded or never created")]
    EscrowNotFound,
    #[msg("Unauthorized caller: only the escrow maker can refund")]
    UnauthorizedCaller,
    #[msg("Invalid amount: amount must be greater than zero")]
    InvalidAmount,
    #[msg("Identical mints: mint_a and mint_b must differ")]
    IdenticalMints,
    #[msg("Invalid maker: maker does not match escrow maker")]
    InvalidMaker,
    #[msg("Invalid mint A: mint_a does not match escrow mint_a")]
    InvalidMintA,
    #[msg("Invalid mint B: mint_b does not match escrow mint_b")]
    InvalidMintB,
    #[msg("Invalid vault: not the escrow's token account for mint_a")]
    InvalidVault,
    #[msg("Math overflow")]
    MathOverflow,
}
