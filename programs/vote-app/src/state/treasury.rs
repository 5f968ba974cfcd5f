use anchor_lang::prelude::*;

// Economic policy, written once by the admin
#[account]
#[derive(InitSpace)]
pub struct TreasuryConfig {
    pub authority: Pubkey,
    // Lamports paid per purchase
    pub sol_price: u64,
    // X tokens minted per purchase
    pub tokens_per_purchase: u64,
    pub x_mint: Pubkey,
    // Receives proposal and vote stakes
    pub treasury_token_account: Pubkey,
    pub config_bump: u8,
    pub x_mint_bump: u8,
    pub sol_vault_bump: u8,
    pub mint_authority_bump: u8,
}

impl TreasuryConfig {
    // A freshly allocated config has a zeroed authority
    pub fn is_initialized(&self) -> bool {
        self.authority != Pubkey::default()
    }
}

// Next proposal id to hand out
#[account]
#[derive(InitSpace)]
pub struct ProposalCounter {
    pub proposal_count: u64,
    pub bump: u8,
}

impl ProposalCounter {
    // Returns the id to assign now and the value to persist afterwards
    pub fn next_id(&self) -> Option<(u64, u64)> {
        let id = self.proposal_count;
        id.checked_add(1).map(|next| (id, next))
    }
}
