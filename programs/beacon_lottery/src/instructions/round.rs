use anchor_lang::prelude::*;

use crate::errors::LotteryError;
use crate::events::{RedemptionsAllowed, RoundAdvanced};
use crate::utils::now_ms;
use crate::{AdvanceRound, AllowRedemptions};

pub fn allow_redemptions_for_round(
    ctx: Context<AllowRedemptions>,
    lottery_id: u64,
    round: u64,
) -> Result<()> {
    let store = &ctx.accounts.store;
    require_keys_eq!(store.admin, ctx.accounts.admin.key(), LotteryError::Unauthorized);
    store.ensure_listed(lottery_id, &ctx.accounts.lottery.key())?;

    let lottery = &ctx.accounts.lottery;
    lottery.allow_redemptions(&mut ctx.accounts.lottery_round)?;

    emit!(RedemptionsAllowed {
        lottery_id,
        round,
        prize_pool: lottery.prize_pool,
    });
    Ok(())
}

pub fn set_next_round_and_drawing_time(
    ctx: Context<AdvanceRound>,
    lottery_id: u64,
    next_round: u64,
    drawing_time_ms: u64,
) -> Result<()> {
    let now = now_ms()?;

    let store = &ctx.accounts.store;
    require_keys_eq!(store.admin, ctx.accounts.admin.key(), LotteryError::Unauthorized);
    store.ensure_listed(lottery_id, &ctx.accounts.lottery.key())?;

    let lottery_key = ctx.accounts.lottery.key();
    let previous_round = ctx.accounts.lottery.current_round;
    ctx.accounts.lottery.advance_round(
        &ctx.accounts.current_round,
        next_round,
        drawing_time_ms,
        now,
    )?;

    ctx.accounts
        .next_round
        .open(lottery_key, next_round, ctx.bumps.next_round, now);

    emit!(RoundAdvanced {
        lottery_id,
        previous_round,
        round: next_round,
        drawing_time_ms,
    });
    msg!("Lottery {} moved to round {}", lottery_id, next_round);
    Ok(())
}
