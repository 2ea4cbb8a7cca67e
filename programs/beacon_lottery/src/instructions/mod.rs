pub mod admin;
pub mod beacon;
pub mod purchase;
pub mod redeem;
pub mod round;
pub mod settle;
pub mod view;

pub use view::LotteryStatus;

use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::state::Lottery;

/// Moves `amount` out of the lottery vault, signed by the lottery PDA.
pub(crate) fn transfer_from_vault<'info>(
    token_program: &Program<'info, Token>,
    vault: &Account<'info, TokenAccount>,
    to: &Account<'info, TokenAccount>,
    lottery: &Account<'info, Lottery>,
    amount: u64,
) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }

    let lottery_le = lottery.lottery_id.to_le_bytes();
    let signer_seeds: &[&[&[u8]]] = &[&[
        crate::LOTTERY_SEED,
        lottery.store.as_ref(),
        &lottery_le,
        &[lottery.bump],
    ]];

    token::transfer(
        CpiContext::new_with_signer(
            token_program.to_account_info(),
            Transfer {
                from: vault.to_account_info(),
                to: to.to_account_info(),
                authority: lottery.to_account_info(),
            },
            signer_seeds,
        ),
        amount,
    )
}
