use anchor_lang::{prelude::*, system_program};
use anchor_spl::associated_token::get_associated_token_address_with_program_id;

use crate::{constants::ESCROW_SEED, errors::EscrowError};

/// Escrow account that stores all the exchange terms
#[account]
#[derive(InitSpace, Debug)]
pub struct EscrowState {
    /// Client-chosen value, lets one maker run several escrows at once
    pub seed: u64,
    /// The maker's wallet address (creator of the escrow)
    pub maker: Pubkey,
    /// Token A mint address (the token maker deposits)
    pub mint_a: Pubkey,
    /// Token B mint address (the token maker wants to receive)
    pub mint_b: Pubkey,
    /// Amount of Token B the maker wants to receive
    pub receive_amount: u64,
    /// Bump seed for PDA derivation
    pub bump: u8,
}

impl EscrowState {
    /// Discriminator plus payload
    pub const SPACE: usize = 8 + Self::INIT_SPACE;

    /// PDA rebuilt from the recorded maker, seed and bump
    pub fn address(&self) -> Result<Pubkey> {
        Pubkey::create_program_address(
            &[
                ESCROW_SEED,
                self.maker.as_ref(),
                self.seed.to_le_bytes().as_ref(),
                &[self.bump],
            ],
            &crate::ID,
        )
        .map_err(|_| error!(EscrowError::EscrowNotFound))
    }

    /// The vault is the escrow's associated token account for `mint_a`
    pub fn vault_address(escrow: &Pubkey, mint_a: &Pubkey, token_program: &Pubkey) -> Pubkey {
        get_associated_token_address_with_program_id(escrow, mint_a, token_program)
    }

    /// Nothing may live at the escrow address before `make`
    pub fn ensure_vacant(info: &AccountInfo) -> Result<()> {
        require!(
            info.owner == &system_program::ID && info.data_is_empty(),
            EscrowError::DuplicateEscrow
        );
        Ok(())
    }

    /// Read a live escrow. Closed or never created addresses are `EscrowNotFound`.
    pub fn load(info: &AccountInfo) -> Result<Self> {
        require!(
            info.owner == &crate::ID && !info.data_is_empty(),
            EscrowError::EscrowNotFound
        );
        let mut data: &[u8] = &info.try_borrow_data()?;
        let escrow = Self::try_deserialize(&mut data)?;
        require_keys_eq!(escrow.address()?, *info.key, EscrowError::EscrowNotFound);
        Ok(escrow)
    }
}
