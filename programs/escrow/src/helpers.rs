use anchor_lang::{
    prelude::*,
    system_program::{self, allocate, assign, create_account, transfer, Allocate, Assign, CreateAccount, Transfer},
};
use anchor_spl::token_interface::TokenAccount;

use crate::{errors::EscrowError, state::EscrowState};

/// Program account helper for the escrow PDA
pub struct ProgramAccount;

impl ProgramAccount {
    /// Create a rent-exempt PDA owned by this program. An address that already
    /// holds lamports is topped up, allocated and assigned instead.
    pub fn init<'info>(
        payer: &AccountInfo<'info>,
        account: &AccountInfo<'info>,
        system_program: &AccountInfo<'info>,
        space: usize,
        signer_seeds: &[&[&[u8]]],
    ) -> Result<()> {
        let required = Rent::get()?.minimum_balance(space);
        let current = account.lamports();

        if current == 0 {
            let cpi_accounts = CreateAccount {
                from: payer.clone(),
                to: account.clone(),
            };
            let cpi_ctx =
                CpiContext::new_with_signer(system_program.clone(), cpi_accounts, signer_seeds);
            return create_account(cpi_ctx, required, space as u64, &crate::ID);
        }

        let top_up = required.saturating_sub(current);
        if top_up > 0 {
            let cpi_accounts = Transfer {
                from: payer.clone(),
                to: account.clone(),
            };
            transfer(CpiContext::new(system_program.clone(), cpi_accounts), top_up)?;
        }

        let cpi_accounts = Allocate {
            account_to_allocate: account.clone(),
        };
        let cpi_ctx = CpiContext::new_with_signer(system_program.clone(), cpi_accounts, signer_seeds);
        allocate(cpi_ctx, space as u64)?;

        let cpi_accounts = Assign {
            account_to_assign: account.clone(),
        };
        let cpi_ctx = CpiContext::new_with_signer(system_program.clone(), cpi_accounts, signer_seeds);
        assign(cpi_ctx, &crate::ID)
    }

    /// Close a PDA account and transfer its lamports to destination.
    /// Returns the lamports moved.
    pub fn close<'info>(account: &AccountInfo<'info>, destination: &AccountInfo<'info>) -> Result<u64> {
        let lamports = account.lamports();
        let credited = destination
            .lamports()
            .checked_add(lamports)
            .ok_or_else(|| error!(EscrowError::MathOverflow))?;

        **destination.try_borrow_mut_lamports()? = credited;
        **account.try_borrow_mut_lamports()? = 0;

        // Hand the address back to the system program with no data
        account.assign(&system_program::ID);
        account.resize(0)?;

        Ok(lamports)
    }
}

/// Escrow vault helper
pub struct Vault;

impl Vault {
    /// Check the vault is the escrow's ATA for `mint_a` and read it
    pub fn load(
        info: &AccountInfo,
        escrow: &Pubkey,
        mint_a: &Pubkey,
        token_program: &Pubkey,
    ) -> Result<TokenAccount> {
        require_keys_eq!(
            *info.key,
            EscrowState::vault_address(escrow, mint_a, token_program),
            EscrowError::InvalidVault
        );
        require_keys_eq!(*info.owner, *token_program, EscrowError::InvalidVault);

        let mut data: &[u8] = &info.try_borrow_data()?;
        let vault = TokenAccount::try_deserialize(&mut data)?;
        require_keys_eq!(vault.mint, *mint_a, EscrowError::InvalidVault);
        require_keys_eq!(vault.owner, *escrow, EscrowError::InvalidVault);

        Ok(vault)
    }
}
