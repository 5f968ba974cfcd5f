use anchor_lang::prelude::*;
use anchor_spl::token::Token;

use crate::{constants::*, errors::*, helpers::*, state::*};

// Cast Vote Instruction
//
// Each accepted vote locks the voter's stake in the treasury and adds exactly
// one to the proposal's count, whatever the stake size. The voter record keeps
// the proposal it voted for, which blocks any second vote.
//
// Voter and proposal are taken unchecked at their derived addresses and loaded
// in the handler, after the treasury config, so that a missing record fails
// with NotFound.

#[derive(Accounts)]
#[instruction(proposal_id: u64)]
pub struct CastVote<'info> {
    #[account(mut)]
    pub voter: Signer<'info>,

    /// CHECK: TreasuryConfig at ["treasury_config"], loaded in the handler
    #[account(
        seeds = [TREASURY_CONFIG],
        bump,
    )]
    pub treasury_config_account: UncheckedAccount<'info>,

    /// CHECK: Voter record at ["voter", voter], loaded in the handler
    #[account(
        mut,
        seeds = [VOTER, voter.key().as_ref()],
        bump,
    )]
    pub voter_account: UncheckedAccount<'info>,

    /// CHECK: Proposal record at ["proposal", proposal_id], loaded in the handler
    #[account(
        mut,
        seeds = [PROPOSAL, &proposal_id.to_le_bytes()],
        bump,
    )]
    pub proposal: UncheckedAccount<'info>,

    /// CHECK: compared against the config's mint in the handler
    pub x_mint: UncheckedAccount<'info>,

    /// CHECK: voter's X token account, loaded in the handler
    #[account(mut)]
    pub voter_token_account: UncheckedAccount<'info>,

    /// CHECK: compared against the config's treasury account in the handler
    #[account(mut)]
    pub treasury_token_account: UncheckedAccount<'info>,

    pub token_program: Program<'info, Token>,
}

impl<'info> CastVote<'info> {
    pub fn cast_vote(&mut self, proposal_id: u64, token_amount: u64) -> Result<()> {
        let config: TreasuryConfig = load_record(&self.treasury_config_account)?;
        require_keys_eq!(self.x_mint.key(), config.x_mint, VoteError::InvalidMint);
        require_keys_eq!(
            self.treasury_token_account.key(),
            config.treasury_token_account,
            VoteError::InvalidTreasuryAccount
        );

        let mut voter_record: Voter = load_record(&self.voter_account)?;
        let mut proposal: Proposal = load_record(&self.proposal)?;

        require_keys_eq!(
            voter_record.voter_id,
            self.voter.key(),
            VoteError::Unauthorized
        );
        require!(!voter_record.has_voted(), VoteError::AlreadyVoted);

        let now = Clock::get()?.unix_timestamp;
        require!(proposal.is_voting_open(now), VoteError::DeadlinePassed);

        require!(token_amount > 0, VoteError::InvalidAmount);
        let voter_tokens =
            load_token_account(&self.voter_token_account, &config.x_mint, &self.voter.key())?;
        require!(
            voter_tokens.amount >= token_amount,
            VoteError::InsufficientStake
        );

        proposal.number_of_votes = proposal
            .number_of_votes
            .checked_add(1)
            .ok_or(VoteError::ProposalVotesOverflow)?;
        voter_record.proposal_voted = Some(proposal_id);

        lock_stake(
            token_amount,
            &self.token_program.to_account_info(),
            &self.voter_token_account.to_account_info(),
            &self.treasury_token_account.to_account_info(),
            &self.voter.to_account_info(),
        )?;

        store_record(&self.proposal, &proposal)?;
        store_record(&self.voter_account, &voter_record)?;

        msg!(
            "{} voted for proposal {} ({} votes), stake {}",
            self.voter.key(),
            proposal_id,
            proposal.number_of_votes,
            token_amount
        );

        Ok(())
    }
}
