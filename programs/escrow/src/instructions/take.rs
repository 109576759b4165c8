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
    events::EscrowTaken,
    helpers::{ProgramAccount, Vault},
    settlement::{self, Settlement},
    state::EscrowState,
};

#[derive(Accounts)]
pub struct Take<'info> {
    /// The taker who accepts the exchange terms
    #[account(mut)]
    pub taker: Signer<'info>,

    /// The original maker, receives Token B and all reclaimed rent
    #[account(mut)]
    pub maker: SystemAccount<'info>,

    /// Token A mint
    #[account(mint::token_program = token_program)]
    pub mint_a: Box<InterfaceAccount<'info, Mint>>,

    /// Token B mint
    #[account(mint::token_program = token_program)]
    pub mint_b: Box<InterfaceAccount<'info, Mint>>,

    /// Taker's associated token account for Token A (receives the vault)
    #[account(
        init_if_needed,
        payer = taker,
        associated_token::mint = mint_a,
        associated_token::authority = taker,
        associated_token::token_program = token_program,
    )]
    pub taker_mint_a_ata: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Taker's associated token account for Token B (source of payment)
    #[account(
        mut,
        associated_token::mint = mint_b,
        associated_token::authority = taker,
        associated_token::token_program = token_program,
    )]
    pub taker_mint_b_ata: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Maker's associated token account for Token B (receives payment)
    #[account(
        init_if_needed,
        payer = taker,
        associated_token::mint = mint_b,
        associated_token::authority = maker,
        associated_token::token_program = token_program,
    )]
    pub maker_mint_b_ata: Box<InterfaceAccount<'info, TokenAccount>>,

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

impl<'info> Take<'info> {
    /// Transfer Token B from taker to maker
    pub fn transfer_to_maker(&mut self, amount: u64) -> Result<()> {
        let cpi_accounts = TransferChecked {
            from: self.taker_mint_b_ata.to_account_info(),
            mint: self.mint_b.to_account_info(),
            to: self.maker_mint_b_ata.to_account_info(),
            authority: self.taker.to_account_info(),
        };
        let cpi_program = self.token_program.to_account_info();
        let cpi_ctx = CpiContext::new(cpi_program, cpi_accounts);

        transfer_checked(cpi_ctx, amount, self.mint_b.decimals)
    }

    /// Release Token A from vault to taker, then close the vault
    pub fn withdraw_and_close_vault(&mut self, escrow: &EscrowState, amount: u64) -> Result<()> {
        let signer_seeds: &[&[&[u8]]] = &[&[
            ESCROW_SEED,
            escrow.maker.as_ref(),
            &escrow.seed.to_le_bytes(),
            &[escrow.bump],
        ]];

        let cpi_accounts = TransferChecked {
            from: self.vault.to_account_info(),
            mint: self.mint_a.to_account_info(),
            to: self.taker_mint_a_ata.to_account_info(),
            authority: self.escrow.to_account_info(),
        };
        let cpi_program = self.token_program.to_account_info();
        let cpi_ctx = CpiContext::new_with_signer(cpi_program, cpi_accounts, signer_seeds);

        transfer_checked(cpi_ctx, amount, self.mint_a.decimals)?;

        // Vault rent goes back to the maker, who funded it
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

/// Handler for the take instruction
pub fn handler(ctx: Context<Take>) -> Result<()> {
    let escrow = EscrowState::load(&ctx.accounts.escrow)?;
    settlement::check_take_accounts(
        &escrow,
        ctx.accounts.maker.key,
        &ctx.accounts.mint_a.key(),
        &ctx.accounts.mint_b.key(),
    )?;
    let vault = Vault::load(
        &ctx.accounts.vault,
        &ctx.accounts.escrow.key(),
        &escrow.mint_a,
        &ctx.accounts.token_program.key(),
    )?;

    let Settlement { to_maker, to_taker } =
        settlement::settle_take(&escrow, vault.amount, ctx.accounts.taker_mint_b_ata.amount)?;
    let rent = settlement::reclaimed_rent(
        ctx.accounts.escrow.lamports(),
        ctx.accounts.vault.lamports(),
    )?;

    ctx.accounts.transfer_to_maker(to_maker)?;
    ctx.accounts.withdraw_and_close_vault(&escrow, to_taker)?;
    ProgramAccount::close(
        &ctx.accounts.escrow.to_account_info(),
        &ctx.accounts.maker.to_account_info(),
    )?;

    msg!(
        "Escrow {} taken by {}: paid {}, received {}, {} lamports rent to maker",
        ctx.accounts.escrow.key(),
        ctx.accounts.taker.key(),
        to_maker,
        to_taker,
        rent
    );
    emit!(EscrowTaken {
        escrow: ctx.accounts.escrow.key(),
        maker: ctx.accounts.maker.key(),
        taker: ctx.accounts.taker.key(),
        seed: escrow.seed,
        paid: to_maker,
        received: to_taker,
        rent,
    });

    Ok(())
}
