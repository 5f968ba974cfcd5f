use anchor_lang::prelude::*;

// Seeds: ["treasury_config"]
#[constant]
pub const TREASURY_CONFIG: &[u8] = b"treasury_config";

// Seeds: ["x_mint"]
pub const X_MINT: &[u8] = b"x_mint";

// Seeds: ["sol_vault"], system-owned, holds purchase payments
pub const SOL_VAULT: &[u8] = b"sol_vault";

// Seeds: ["mint_authority"], signs every mint_to
pub const MINT_AUTHORITY: &[u8] = b"mint_authority";

// Seeds: ["proposal_counter"]
pub const PROPOSAL_COUNTER: &[u8] = b"proposal_counter";

// Seeds: ["voter", identity]
pub const VOTER: &[u8] = b"voter";

// Seeds: ["proposal", proposal_id (u64 LE)]
pub const PROPOSAL: &[u8] = b"proposal";

// Seeds: ["winner"]
pub const WINNER: &[u8] = b"winner";

pub const TOKEN_DECIMALS: u8 = 9;

// First id handed out by the proposal counter
pub const PROPOSAL_COUNTER_START: u64 = 1;

// Must match #[max_len] on Proposal::proposal_info
pub const MAX_PROPOSAL_INFO_LEN: usize = 200;

pub const ANCHOR_DISCRIMINATOR: usize = 8;
