use anchor_lang::prelude::*;

use crate::{constants::*, errors::*, helpers::*, state::*};

// Pick Winner Instruction
//
// The treasury authority names a proposal whose deadline has passed; its final
// vote count is written to the singleton winner record, replacing any earlier
// result.

#[derive(Accounts)]
#[instruction(proposal_id: u64)]
pub struct PickWinner<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    /// CHECK: TreasuryConfig at ["treasury_config"], loaded in the handler
    #[account(
        seeds = [TREASURY_CONFIG],
        bump,
    )]
    pub treasury_config_account: UncheckedAccount<'info>,

    /// CHECK: Proposal record at ["proposal", proposal_id], loaded in the handler
    #[account(
        seeds = [PROPOSAL, &proposal_id.to_le_bytes()],
        bump,
    )]
    pub proposal: UncheckedAccount<'info>,

    #[account(
        init_if_needed,
        payer = authority,
        space = ANCHOR_DISCRIMINATOR + Winner::INIT_SPACE,
        seeds = [WINNER],
        bump,
    )]
    pub winner: Account<'info, Winner>,

    pub system_program: Program<'info, System>,
}

impl<'info> PickWinner<'info> {
    pub fn pick_winner(&mut self, proposal_id: u64, bumps: &PickWinnerBumps) -> Result<()> {
        let config: TreasuryConfig = load_record(&self.treasury_config_account)?;
        require_keys_eq!(
            config.authority,
            self.authority.key(),
            VoteError::Unauthorized
        );

        let proposal: Proposal = load_record(&self.proposal)?;
        require_eq!(proposal.proposal_id, proposal_id, VoteError::NotFound);

        let now = Clock::get()?.unix_timestamp;
        require!(proposal.is_resolvable(now), VoteError::VotingStillActive);

        self.winner.set_inner(Winner {
            winning_proposal_id: proposal.proposal_id,
            winning_votes: proposal.number_of_votes,
            resolved_at: now,
            bump: bumps.winner,
        });

        msg!(
            "Proposal {} resolved with {} votes",
            proposal_id,
            proposal.number_of_votes
        );

        Ok(())
    }
}
