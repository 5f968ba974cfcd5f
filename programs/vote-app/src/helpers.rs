// Record loading and token CPI helpers shared by the instructions.

use anchor_lang::prelude::*;
use anchor_lang::{AccountDeserialize, AccountSerialize, Owner};
use anchor_spl::token::{mint_to, transfer, MintTo, TokenAccount, Transfer};

use crate::{errors::*, state::ProposalCounter};

// Load a program-owned record from an address derived in the accounts struct.
// Absent or foreign accounts surface as NotFound instead of a framework error.
pub fn load_record<T: AccountDeserialize + Owner>(account: &AccountInfo) -> Result<T> {
    if account.data_is_empty() || *account.owner != T::owner() {
        return err!(VoteError::NotFound);
    }
    let data = account.try_borrow_data()?;
    T::try_deserialize(&mut &data[..])
}

// Write a record loaded with load_record back to its account
pub fn store_record<T: AccountSerialize>(account: &AccountInfo, record: &T) -> Result<()> {
    let mut data = account.try_borrow_mut_data()?;
    let mut writer: &mut [u8] = &mut data[..];
    record.try_serialize(&mut writer)
}

// Token accounts are taken unchecked for the same reason as records: a missing
// account fails as NotFound once the treasury itself has been found.
pub fn load_token_account(
    account: &AccountInfo,
    mint: &Pubkey,
    owner: &Pubkey,
) -> Result<TokenAccount> {
    let token_account: TokenAccount = load_record(account)?;
    require_keys_eq!(token_account.mint, *mint, VoteError::InvalidMint);
    require_keys_eq!(token_account.owner, *owner, VoteError::Unauthorized);
    Ok(token_account)
}

// Seed of the id the counter hands out next. Zero when the counter is
// missing; register_proposal then fails on loading the counter.
pub fn next_proposal_seed(counter: &AccountInfo) -> [u8; 8] {
    load_record::<ProposalCounter>(counter)
        .map(|counter| counter.proposal_count.to_le_bytes())
        .unwrap_or_default()
}

// Move stake from a participant's token account into the treasury
pub fn lock_stake<'info>(
    amount: u64,
    token_program: &AccountInfo<'info>,
    from: &AccountInfo<'info>,
    to: &AccountInfo<'info>,
    owner: &AccountInfo<'info>,
) -> Result<()> {
    transfer(
        CpiContext::new(
            token_program.clone(),
            Transfer {
                from: from.clone(),
                to: to.clone(),
                authority: owner.clone(),
            },
        ),
        amount,
    )
}

// Mint X tokens signed by the mint authority PDA
pub fn mint_x_tokens<'info>(
    amount: u64,
    token_program: &AccountInfo<'info>,
    mint: &AccountInfo<'info>,
    to: &AccountInfo<'info>,
    authority: &AccountInfo<'info>,
    authority_seeds: &[&[u8]],
) -> Result<()> {
    let signer_seeds = &[authority_seeds];

    mint_to(
        CpiContext::new_with_signer(
            token_program.clone(),
            MintTo {
                mint: mint.clone(),
                to: to.clone(),
                authority: authority.clone(),
            },
            signer_seeds,
        ),
        amount,
    )
}
