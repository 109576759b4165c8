//! Checks and amounts for each instruction, computed before any CPI runs.
//!
//! Every function here is pure: it sees balances and recorded terms as plain
//! values and either rejects the instruction or returns what must move. The
//! instruction handlers only execute transfers once these have passed.

use anchor_lang::prelude::*;

use crate::{errors::EscrowError, state::EscrowState};

/// Terms submitted with `make`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Offer {
    pub seed: u64,
    pub receive_amount: u64,
    pub deposit_amount: u64,
}

/// Token movements of a successful `take`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Settlement {
    /// Token B, taker to maker
    pub to_maker: u64,
    /// Token A, vault to taker
    pub to_taker: u64,
}

pub fn check_make(
    offer: &Offer,
    mint_a: &Pubkey,
    mint_b: &Pubkey,
    maker_balance_a: u64,
) -> Result<()> {
    require_gt!(offer.receive_amount, 0, EscrowError::InvalidAmount);
    require_gt!(offer.deposit_amount, 0, EscrowError::InvalidAmount);
    require_keys_neq!(*mint_a, *mint_b, EscrowError::IdenticalMints);
    require_gte!(
        maker_balance_a,
        offer.deposit_amount,
        EscrowError::InsufficientFunds
    );
    Ok(())
}

/// The taker pays the recorded price and always receives the whole vault.
pub fn settle_take(
    escrow: &EscrowState,
    vault_amount: u64,
    taker_balance_b: u64,
) -> Result<Settlement> {
    require_gte!(
        taker_balance_b,
        escrow.receive_amount,
        EscrowError::InsufficientFunds
    );
    Ok(Settlement {
        to_maker: escrow.receive_amount,
        to_taker: vault_amount,
    })
}

/// The passed maker and mints must be the ones the escrow recorded.
pub fn check_take_accounts(
    escrow: &EscrowState,
    maker: &Pubkey,
    mint_a: &Pubkey,
    mint_b: &Pubkey,
) -> Result<()> {
    require_keys_eq!(*maker, escrow.maker, EscrowError::InvalidMaker);
    require_keys_eq!(*mint_a, escrow.mint_a, EscrowError::InvalidMintA);
    require_keys_eq!(*mint_b, escrow.mint_b, EscrowError::InvalidMintB);
    Ok(())
}

/// Only the recorded maker may cancel.
pub fn check_refund(escrow: &EscrowState, caller: &Pubkey, mint_a: &Pubkey) -> Result<()> {
    require_keys_eq!(*caller, escrow.maker, EscrowError::UnauthorizedCaller);
    require_keys_eq!(*mint_a, escrow.mint_a, EscrowError::InvalidMintA);
    Ok(())
}

/// Lamports credited to the maker when the vault and escrow close
pub fn reclaimed_rent(escrow_lamports: u64, vault_lamports: u64) -> Result<u64> {
    escrow_lamports
        .checked_add(vault_lamports)
        .ok_or_else(|| error!(EscrowError::MathOverflow))
}
