use anchor_lang::prelude::*;

// Governance item keyed by ["proposal", proposal_id]
#[account]
#[derive(InitSpace)]
pub struct Proposal {
    pub proposal_id: u64,
    // Creator of the proposal
    pub authority: Pubkey,
    #[max_len(200)]
    pub proposal_info: String,
    // Unix timestamp, fixed at creation
    pub deadline: i64,
    pub number_of_votes: u64,
    // X tokens locked in the treasury by the creator
    pub staked_amount: u64,
    pub bump: u8,
}

impl Proposal {
    // Votes are accepted strictly before the deadline
    pub fn is_voting_open(&self, now: i64) -> bool {
        now < self.deadline
    }

    // Resolution is allowed strictly after the deadline
    pub fn is_resolvable(&self, now: i64) -> bool {
        now > self.deadline
    }
}

// Singleton resolution record, overwritten by each pick_winner
#[account]
#[derive(InitSpace)]
pub struct Winner {
    pub winning_proposal_id: u64,
    pub winning_votes: u64,
    pub resolved_at: i64,
    pub bump: u8,
}
