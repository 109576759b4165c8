use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token_interface::{
        close_account, transfer_checked, CloseAccount, Mint, TokenAccount, TokenInterface,
        TransferChecked,
    },
};

use crate::{
    constants::ESCROW_SEED,
    events::EscrowRefunded,
    helpers::{ProgramAccount, Vault},
    settlement,
    state::EscrowState,
};

#[derive(Accounts)]
pub struct Refund<'info> {
    /// The maker who originally created the escrow (only one allowed to refund)
    #[account(mut)]
    pub maker: Signer<'info>,

    /// Token A mint
    #[account(mint::token_program = token_program)]
    pub mint_a: InterfaceAccount<'info, Mint>,

    /// Maker's associated token account for Token A (receives refund)
    #[account(
        init_if_needed,
        payer = maker,
        associated_token::mint = mint_a,
        associated_token::authority = maker,
        associated_token::token_program = token_program,
    )]
    pub maker_mint_a_ata: InterfaceAccount<'info, TokenAccount>,

    /// CHECK: escrow PDA, read and closed to the maker by the handler
    #[account(mut)]
    pub escrow: UncheckedAccount<'info>,

    /// CHECK: escrow's Token A ATA, read and closed to the maker by the handler
    #[account(mut)]
    pub vault: UncheckedAccount<'info>,

    pub associated_token_program: Program<'info, AssociatedToken>,
    pub token_program: Interface<'info, TokenInterface>,
    pub system_program: Program<'info, System>,
}

impl<'info> Refund<'info> {
    /// Withdraw all Token A from vault back to maker and close the vault
    pub fn refund_and_close_vault(&mut self, escrow: &EscrowState, amount: u64) -> Result<()> {
        let signer_seeds: &[&[&[u8]]] = &[&[
            ESCROW_SEED,
            escrow.maker.as_ref(),
            &escrow.seed.to_le_bytes(),
            &[escrow.bump],
        ]];

        let cpi_accounts = TransferChecked {
            from: self.vault.to_account_info(),
            mint: self.mint_a.to_account_info(),
            to: self.maker_mint_a_ata.to_account_info(),
            authority: self.escrow.to_account_info(),
        };
        let cpi_program = self.token_program.to_account_info();
        let cpi_ctx = CpiContext::new_with_signer(cpi_program, cpi_accounts, signer_seeds);

        transfer_checked(cpi_ctx, amount, self.mint_a.decimals)?;

        let cpi_accounts = CloseAccount {
            account: self.vault.to_account_info(),
            destination: self.maker.to_account_info(),
            authority: self.escrow.to_account_info(),
        };
        let cpi_program = self.token_program.to_account_info();
        let cpi_ctx = CpiContext::new_with_signer(cpi_program, cpi_accounts, signer_seeds);

        close_account(cpi_ctx)
    }
}

/// Handler for the refund instruction
pub fn handler(ctx: Context<Refund>) -> Result<()> {
    let escrow = EscrowState::load(&ctx.accounts.escrow)?;
    settlement::check_refund(&escrow, ctx.accounts.maker.key, &ctx.accounts.mint_a.key())?;
    let vault = Vault::load(
        &ctx.accounts.vault,
        &ctx.accounts.escrow.key(),
        &escrow.mint_a,
        &ctx.accounts.token_program.key(),
    )?;

    let rent = settlement::reclaimed_rent(
        ctx.accounts.escrow.lamports(),
        ctx.accounts.vault.lamports(),
    )?;

    ctx.accounts.refund_and_close_vault(&escrow, vault.amount)?;
    ProgramAccount::close(
        &ctx.accounts.escrow.to_account_info(),
        &ctx.accounts.maker.to_account_info(),
    )?;

    msg!(
        "Escrow {} refunded: {} of mint A and {} lamports rent back to {}",
        ctx.accounts.escrow.key(),
        vault.amount,
        rent,
        ctx.accounts.maker.key()
    );
    emit!(EscrowRefunded {
        escrow: ctx.accounts.escrow.key(),
        maker: ctx.accounts.maker.key(),
        seed: escrow.seed,
        refunded: vault.amount,
        rent,
    });

    Ok(())
}
