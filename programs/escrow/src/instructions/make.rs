use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token_interface::{transfer_checked, Mint, TokenAccount, TokenInterface, TransferChecked},
};

use crate::{
    constants::ESCROW_SEED,
    events::EscrowMade,
    helpers::ProgramAccount,
    settlement::{self, Offer},
    state::EscrowState,
};

#[derive(Accounts)]
#[instruction(seed: u64)]
pub struct Make<'info> {
    /// The maker who sets exchange terms and deposits Token A
    #[account(mut)]
    pub maker: Signer<'info>,

    /// Token A mint (the token the maker will deposit)
    #[account(mint::token_program = token_program)]
    pub mint_a: InterfaceAccount<'info, Mint>,

    /// Token B mint (the token the maker wants to receive)
    #[account(mint::token_program = token_program)]
    pub mint_b: InterfaceAccount<'info, Mint>,

    /// Maker's associated token account for Token A (source of deposit)
    #[account(
        mut,
        associated_token::mint = mint_a,
        associated_token::authority = maker,
        associated_token::token_program = token_program,
    )]
    pub maker_mint_a_ata: InterfaceAccount<'info, TokenAccount>,

    /// CHECK: escrow PDA, must be vacant. Created and written by the handler.
    #[account(
        mut,
        seeds = [ESCROW_SEED, maker.key().as_ref(), seed.to_le_bytes().as_ref()],
        bump,
    )]
    pub escrow: UncheckedAccount<'info>,

    /// Vault account owned by escrow to hold Token A
    #[account(
        init_if_needed,
        payer = maker,
        associated_token::mint = mint_a,
        associated_token::authority = escrow,
        associated_token::token_program = token_program,
    )]
    pub vault: InterfaceAccount<'info, TokenAccount>,

    pub associated_token_program: Program<'info, AssociatedToken>,
    pub token_program: Interface<'info, TokenInterface>,
    pub system_program: Program<'info, System>,
}

impl<'info> Make<'info> {
    /// Record the exchange terms in the escrow account
    pub fn init_escrow(&mut self, offer: &Offer, bumps: &MakeBumps) -> Result<()> {
        let maker = self.maker.key();
        let seed = offer.seed.to_le_bytes();
        let signer_seeds: &[&[&[u8]]] = &[&[ESCROW_SEED, maker.as_ref(), &seed, &[bumps.escrow]]];

        ProgramAccount::init(
            &self.maker.to_account_info(),
            &self.escrow.to_account_info(),
            &self.system_program.to_account_info(),
            EscrowState::SPACE,
            signer_seeds,
        )?;

        let escrow = EscrowState {
            seed: offer.seed,
            maker,
            mint_a: self.mint_a.key(),
            mint_b: self.mint_b.key(),
            receive_amount: offer.receive_amount,
            bump: bumps.escrow,
        };
        let mut data = self.escrow.try_borrow_mut_data()?;
        let mut writer: &mut [u8] = &mut data;
        escrow.try_serialize(&mut writer)?;
        Ok(())
    }

    /// Transfer Token A from maker to vault
    pub fn deposit(&mut self, amount: u64) -> Result<()> {
        let cpi_accounts = TransferChecked {
            from: self.maker_mint_a_ata.to_account_info(),
            mint: self.mint_a.to_account_info(),
            to: self.vault.to_account_info(),
            authority: self.maker.to_account_info(),
        };
        let cpi_program = self.token_program.to_account_info();
        let cpi_ctx = CpiContext::new(cpi_program, cpi_accounts);

        transfer_checked(cpi_ctx, amount, self.mint_a.decimals)
    }
}

/// Handler for the make instruction
pub fn handler(ctx: Context<Make>, seed: u64, receive_amount: u64, deposit_amount: u64) -> Result<()> {
    EscrowState::ensure_vacant(&ctx.accounts.escrow)?;

    let offer = Offer {
        seed,
        receive_amount,
        deposit_amount,
    };
    settlement::check_make(
        &offer,
        &ctx.accounts.mint_a.key(),
        &ctx.accounts.mint_b.key(),
        ctx.accounts.maker_mint_a_ata.amount,
    )?;

    ctx.accounts.init_escrow(&offer, &ctx.bumps)?;
    ctx.accounts.deposit(deposit_amount)?;

    msg!(
        "Escrow {} opened: {} of mint A for {} of mint B",
        ctx.accounts.escrow.key(),
        deposit_amount,
        receive_amount
    );
    emit!(EscrowMade {
        escrow: ctx.accounts.escrow.key(),
        maker: ctx.accounts.maker.key(),
        seed,
        mint_a: ctx.accounts.mint_a.key(),
        mint_b: ctx.accounts.mint_b.key(),
        deposit: deposit_amount,
        receive: receive_amount,
    });

    Ok(())
}
