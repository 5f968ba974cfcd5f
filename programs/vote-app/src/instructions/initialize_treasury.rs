use anchor_lang::prelude::*;
use anchor_lang::system_program::{transfer, Transfer};
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::{constants::*, errors::*, state::*};

// Initialize Treasury Instruction
//
// Sets the fixed exchange rate and creates everything the token economy needs:
// config, X mint, mint authority, SOL vault, treasury token account and the
// proposal counter. Accounts use init_if_needed so a repeated call reaches the
// handler and fails with AlreadyInitialized instead of an allocation error.

#[derive(Accounts)]
pub struct InitializeTreasury<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        init_if_needed,
        payer = authority,
        space = ANCHOR_DISCRIMINATOR + TreasuryConfig::INIT_SPACE,
        seeds = [TREASURY_CONFIG],
        bump,
    )]
    pub treasury_config_account: Box<Account<'info, TreasuryConfig>>,

    /// CHECK: PDA signer for mint_to, holds no data
    #[account(
        seeds = [MINT_AUTHORITY],
        bump
    )]
    pub mint_authority: UncheckedAccount<'info>,

    #[account(
        init_if_needed,
        payer = authority,
        seeds = [X_MINT],
        bump,
        mint::decimals = TOKEN_DECIMALS,
        mint::authority = mint_authority,
    )]
    pub x_mint: Box<Account<'info, Mint>>,

    #[account(
        mut,
        seeds = [SOL_VAULT],
        bump
    )]
    pub sol_vault: SystemAccount<'info>,

    #[account(
        init_if_needed,
        payer = authority,
        associated_token::mint = x_mint,
        associated_token::authority = treasury_config_account,
    )]
    pub treasury_token_account: Box<Account<'info, TokenAccount>>,

    #[account(
        init_if_needed,
        payer = authority,
        space = ANCHOR_DISCRIMINATOR + ProposalCounter::INIT_SPACE,
        seeds = [PROPOSAL_COUNTER],
        bump,
    )]
    pub proposal_counter: Box<Account<'info, ProposalCounter>>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

impl<'info> InitializeTreasury<'info> {
    pub fn initialize_treasury(
        &mut self,
        sol_price: u64,
        tokens_per_purchase: u64,
        bumps: &InitializeTreasuryBumps,
    ) -> Result<()> {
        require!(
            !self.treasury_config_account.is_initialized(),
            VoteError::AlreadyInitialized
        );
        require!(sol_price > 0, VoteError::InvalidAmount);
        require!(tokens_per_purchase > 0, VoteError::InvalidAmount);

        self.fund_sol_vault()?;

        self.treasury_config_account.set_inner(TreasuryConfig {
            authority: self.authority.key(),
            sol_price,
            tokens_per_purchase,
            x_mint: self.x_mint.key(),
            treasury_token_account: self.treasury_token_account.key(),
            config_bump: bumps.treasury_config_account,
            x_mint_bump: bumps.x_mint,
            sol_vault_bump: bumps.sol_vault,
            mint_authority_bump: bumps.mint_authority,
        });

        self.proposal_counter.set_inner(ProposalCounter {
            proposal_count: PROPOSAL_COUNTER_START,
            bump: bumps.proposal_counter,
        });

        msg!(
            "Treasury initialized: {} lamports buys {} X tokens",
            sol_price,
            tokens_per_purchase
        );

        Ok(())
    }

    // The vault is a plain system account; top it up to rent exemption so
    // purchases of any price can land in it.
    fn fund_sol_vault(&self) -> Result<()> {
        let rent_exempt = Rent::get()?.minimum_balance(0);
        let shortfall = rent_exempt.saturating_sub(self.sol_vault.lamports());
        if shortfall == 0 {
            return Ok(());
        }

        transfer(
            CpiContext::new(
                self.system_program.to_account_info(),
                Transfer {
                    from: self.authority.to_account_info(),
                    to: self.sol_vault.to_account_info(),
                },
            ),
            shortfall,
        )
    }
}
