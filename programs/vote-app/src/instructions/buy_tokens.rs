use anchor_lang::prelude::*;
use anchor_lang::system_program::{transfer, Transfer};
use anchor_spl::token::Token;

use crate::{constants::*, errors::*, helpers::*, state::*};

// Buy Tokens Instruction
//
// Pays sol_price lamports into the vault and mints tokens_per_purchase X
// tokens to the buyer. Both legs run in one transaction.
//
// The config, mint and buyer token account are checked in the handler so a
// purchase before initialize_treasury fails with NotFound.

#[derive(Accounts)]
pub struct BuyTokens<'info> {
    #[account(mut)]
    pub buyer: Signer<'info>,

    /// CHECK: TreasuryConfig at ["treasury_config"], loaded in the handler
    #[account(
        seeds = [TREASURY_CONFIG],
        bump,
    )]
    pub treasury_config_account: UncheckedAccount<'info>,

    #[account(
        mut,
        seeds = [SOL_VAULT],
        bump,
    )]
    pub sol_vault: SystemAccount<'info>,

    /// CHECK: compared against the config's mint in the handler
    #[account(mut)]
    pub x_mint: UncheckedAccount<'info>,

    /// CHECK: X token account owned by the buyer, loaded in the handler.
    /// Must already exist; the buyer creates it before purchasing.
    #[account(mut)]
    pub buyer_token_account: UncheckedAccount<'info>,

    /// CHECK: PDA signer for mint_to
    #[account(
        seeds = [MINT_AUTHORITY],
        bump,
    )]
    pub mint_authority: UncheckedAccount<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

impl<'info> BuyTokens<'info> {
    pub fn buy_tokens(&mut self) -> Result<()> {
        let config: TreasuryConfig = load_record(&self.treasury_config_account)?;
        require_keys_eq!(self.x_mint.key(), config.x_mint, VoteError::InvalidMint);
        load_token_account(&self.buyer_token_account, &config.x_mint, &self.buyer.key())?;

        self.ensure_funds(config.sol_price)?;

        transfer(
            CpiContext::new(
                self.system_program.to_account_info(),
                Transfer {
                    from: self.buyer.to_account_info(),
                    to: self.sol_vault.to_account_info(),
                },
            ),
            config.sol_price,
        )?;

        let authority_seeds: &[&[u8]] = &[MINT_AUTHORITY, &[config.mint_authority_bump]];
        mint_x_tokens(
            config.tokens_per_purchase,
            &self.token_program.to_account_info(),
            &self.x_mint.to_account_info(),
            &self.buyer_token_account.to_account_info(),
            &self.mint_authority.to_account_info(),
            authority_seeds,
        )?;

        msg!(
            "{} paid {} lamports for {} X tokens",
            self.buyer.key(),
            config.sol_price,
            config.tokens_per_purchase
        );

        Ok(())
    }

    // The buyer must cover the price and either end at zero or stay rent exempt,
    // otherwise the runtime would reject the transfer after the fact.
    fn ensure_funds(&self, sol_price: u64) -> Result<()> {
        let remaining = self
            .buyer
            .lamports()
            .checked_sub(sol_price)
            .ok_or(VoteError::InsufficientFunds)?;
        let rent_floor = Rent::get()?.minimum_balance(0);
        require!(
            remaining == 0 || remaining >= rent_floor,
            VoteError::InsufficientFunds
        );
        Ok(())
    }
}
