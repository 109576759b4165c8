use anchor_lang::prelude::*;

mod constants;
pub mod errors;
pub mod events;
mod helpers;
mod instructions;
mod settlement;
pub mod state;


use instructions::*;

declare_id!("HUk6tTBZdeCVprusZhfzrUEVXo5nzGxVA22y5uVG2tJb");

#[program]
pub mod escrow {
    use super::*;

    /// Open an escrow: maker locks Token A in a vault and sets the Token B price
    pub fn make(ctx: Context<Make>, seed: u64, receive_amount: u64, deposit_amount: u64) -> Result<()> {
        instructions::make::handler(ctx, seed, receive_amount, deposit_amount)
    }

    /// Settle the escrow: taker pays Token B, receives the whole vault
    pub fn take(ctx: Context<Take>) -> Result<()> {
        instructions::take::handler(ctx)
    }

    /// Cancel the escrow: maker reclaims the vault
    pub fn refund(ctx: Context<Refund>) -> Result<()> {
        instructions::refund::handler(ctx)
    }
}
