use anchor_lang::prelude::*;

use crate::{constants::*, errors::*, helpers::*, state::*};

#[derive(Accounts)]
pub struct RegisterVoter<'info> {
    #[account(mut)]
    pub voter: Signer<'info>,

    /// CHECK: TreasuryConfig at ["treasury_config"]. Only checked for
    /// existence; voters can't register before the treasury.
    #[account(
        seeds = [TREASURY_CONFIG],
        bump,
    )]
    pub treasury_config_account: UncheckedAccount<'info>,

    // init_if_needed so a second registration reaches the handler and
    // fails with AlreadyRegistered
    #[account(
        init_if_needed,
        payer = voter,
        space = ANCHOR_DISCRIMINATOR + Voter::INIT_SPACE,
        seeds = [VOTER, voter.key().as_ref()],
        bump,
    )]
    pub voter_account: Account<'info, Voter>,

    pub system_program: Program<'info, System>,
}

impl<'info> RegisterVoter<'info> {
    pub fn register_voter(&mut self, bumps: &RegisterVoterBumps) -> Result<()> {
        load_record::<TreasuryConfig>(&self.treasury_config_account)?;

        require!(
            !self.voter_account.is_registered(),
            VoteError::AlreadyRegistered
        );

        self.voter_account.set_inner(Voter {
            voter_id: self.voter.key(),
            proposal_voted: None,
            bump: bumps.voter_account,
        });

        msg!("Registered voter {}", self.voter.key());

        Ok(())
    }
}
