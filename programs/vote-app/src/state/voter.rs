use anchor_lang::prelude::*;

// One governance identity, keyed by ["voter", voter_id]
#[account]
#[derive(InitSpace)]
pub struct Voter {
    pub voter_id: Pubkey,
    // Set by the first accepted vote, never cleared
    pub proposal_voted: Option<u64>,
    pub bump: u8,
}

impl Voter {
    pub fn is_registered(&self) -> bool {
        self.voter_id != Pubkey::default()
    }

    pub fn has_voted(&self) -> bool {
        self.proposal_voted.is_some()
    }
}
