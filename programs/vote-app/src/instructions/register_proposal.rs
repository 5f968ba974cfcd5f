use anchor_lang::prelude::*;
use anchor_spl::token::Token;

use crate::{constants::*, errors::*, helpers::*, state::*};

// Register Proposal Instruction
//
// Locks the creator's stake in the treasury and records a new proposal under
// the id currently held by the proposal counter. The counter is read and
// advanced inside this instruction, so two proposals can never share an id.
//
// Config, counter and token accounts are loaded in the handler; any of them
// missing fails with NotFound and rolls back the proposal allocation.

#[derive(Accounts)]
pub struct RegisterProposal<'info> {
    #[account(mut)]
    pub creator: Signer<'info>,

    /// CHECK: TreasuryConfig at ["treasury_config"], loaded in the handler
    #[account(
        seeds = [TREASURY_CONFIG],
        bump,
    )]
    pub treasury_config_account: UncheckedAccount<'info>,

    /// CHECK: ProposalCounter at ["proposal_counter"], loaded in the handler
    #[account(
        mut,
        seeds = [PROPOSAL_COUNTER],
        bump,
    )]
    pub proposal_counter: UncheckedAccount<'info>,

    // Seeds: ["proposal", proposal_counter.proposal_count]
    #[account(
        init,
        payer = creator,
        space = ANCHOR_DISCRIMINATOR + Proposal::INIT_SPACE,
        seeds = [PROPOSAL, &next_proposal_seed(&proposal_counter)],
        bump,
    )]
    pub proposal: Box<Account<'info, Proposal>>,

    /// CHECK: compared against the config's mint in the handler
    pub x_mint: UncheckedAccount<'info>,

    /// CHECK: creator's X token account, loaded in the handler
    #[account(mut)]
    pub creator_token_account: UncheckedAccount<'info>,

    /// CHECK: compared against the config's treasury account in the handler
    #[account(mut)]
    pub treasury_token_account: UncheckedAccount<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

impl<'info> RegisterProposal<'info> {
    pub fn register_proposal(
        &mut self,
        proposal_info: String,
        deadline: i64,
        token_amount: u64,
        bumps: &RegisterProposalBumps,
    ) -> Result<()> {
        let config: TreasuryConfig = load_record(&self.treasury_config_account)?;
        let mut counter: ProposalCounter = load_record(&self.proposal_counter)?;

        require_keys_eq!(self.x_mint.key(), config.x_mint, VoteError::InvalidMint);
        require_keys_eq!(
            self.treasury_token_account.key(),
            config.treasury_token_account,
            VoteError::InvalidTreasuryAccount
        );

        require!(
            !proposal_info.is_empty() && proposal_info.len() <= MAX_PROPOSAL_INFO_LEN,
            VoteError::InvalidProposalInfo
        );
        require!(token_amount > 0, VoteError::InvalidAmount);

        let now = Clock::get()?.unix_timestamp;
        require!(deadline > now, VoteError::InvalidDeadline);

        let creator_tokens =
            load_token_account(&self.creator_token_account, &config.x_mint, &self.creator.key())?;
        require!(
            creator_tokens.amount >= token_amount,
            VoteError::InsufficientStake
        );

        let (proposal_id, next_count) = counter
            .next_id()
            .ok_or(VoteError::ProposalCounterOverflow)?;

        lock_stake(
            token_amount,
            &self.token_program.to_account_info(),
            &self.creator_token_account.to_account_info(),
            &self.treasury_token_account.to_account_info(),
            &self.creator.to_account_info(),
        )?;

        counter.proposal_count = next_count;
        store_record(&self.proposal_counter, &counter)?;

        self.proposal.set_inner(Proposal {
            proposal_id,
            authority: self.creator.key(),
            proposal_info,
            deadline,
            number_of_votes: 0,
            staked_amount: token_amount,
            bump: bumps.proposal,
        });

        msg!(
            "Proposal {} registered by {}, deadline {}, stake {}",
            proposal_id,
            self.creator.key(),
            deadline,
            token_amount
        );

        Ok(())
    }
}
