// Vote App Program
//
// Stake-weighted governance on top of a fixed-rate token economy.
//
// Instructions:
// - initialize_treasury: set the SOL price and tokens per purchase, create the X mint
// - buy_tokens: pay SOL into the vault, receive X tokens
// - register_voter: create the caller's voter record
// - register_proposal: stake X tokens and open a proposal until a deadline
// - cast_vote: stake X tokens and add one vote to a proposal
// - pick_winner: record a closed proposal's final count as the winner

use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod helpers;
pub mod instructions;
pub mod state;

pub use instructions::*;

declare_id!("5fA22cm9bqhmkovaGjD8sG4otoJ6sPhW4JLdjrJLhy41");

#[program]
pub mod vote_app {
    use super::*;

    // Can only succeed once; the signer becomes the treasury authority
    pub fn initialize_treasury(
        ctx: Context<InitializeTreasury>,
        sol_price: u64,
        tokens_per_purchase: u64,
    ) -> Result<()> {
        ctx.accounts
            .initialize_treasury(sol_price, tokens_per_purchase, &ctx.bumps)
    }

    pub fn buy_tokens(ctx: Context<BuyTokens>) -> Result<()> {
        ctx.accounts.buy_tokens()
    }

    pub fn register_voter(ctx: Context<RegisterVoter>) -> Result<()> {
        ctx.accounts.register_voter(&ctx.bumps)
    }

    pub fn register_proposal(
        ctx: Context<RegisterProposal>,
        proposal_info: String,
        deadline: i64,
        token_amount: u64,
    ) -> Result<()> {
        ctx.accounts
            .register_proposal(proposal_info, deadline, token_amount, &ctx.bumps)
    }

    // One vote per registered voter, strictly before the proposal deadline
    pub fn cast_vote(ctx: Context<CastVote>, proposal_id: u64, token_amount: u64) -> Result<()> {
        ctx.accounts.cast_vote(proposal_id, token_amount)
    }

    // Treasury authority only, strictly after the proposal deadline
    pub fn pick_winner(ctx: Context<PickWinner>, proposal_id: u64) -> Result<()> {
        ctx.accounts.pick_winner(proposal_id, &ctx.bumps)
    }
}
