use anchor_lang::prelude::*;

use crate::constants::BEACON_LEN;
use crate::errors::LotteryError;
use crate::events::{RoundSettled, SettlementPage};
use crate::instructions::beacon::verify_beacon;
use crate::settlement::SettlementProgress;
use crate::state::{Lottery, LotteryRound};
use crate::utils::now_ms;
use crate::SettleRound;

#[cfg(feature = "mock-beacon")]
use crate::SettleRoundMock;

// Tx layout must be: [ ed25519_verify, settle_round ]
pub fn settle_round(
    ctx: Context<SettleRound>,
    lottery_id: u64,
    round: u64,
    beacon: [u8; BEACON_LEN],
    page_size: Option<u32>,
) -> Result<bool> {
    let store = &ctx.accounts.store;
    require_keys_eq!(store.admin, ctx.accounts.admin.key(), LotteryError::Unauthorized);
    store.ensure_listed(lottery_id, &ctx.accounts.lottery.key())?;

    // stale or finished rounds are reported before the signature is looked at
    ctx.accounts
        .lottery
        .ensure_settleable(&ctx.accounts.round, round)?;

    let ix_sys = ctx.accounts.instructions.to_account_info();
    verify_beacon(store, &ix_sys, ctx.program_id, lottery_id, round, &beacon)?;

    let progress = ctx.accounts.lottery.settle_page(
        &mut ctx.accounts.queue,
        &mut ctx.accounts.round,
        round,
        &beacon,
        page_size,
        now_ms()?,
    )?;

    report(&ctx.accounts.lottery, &ctx.accounts.round, progress);
    Ok(progress.settled)
}

/// Local-cluster settlement without beacon signature checks.
#[cfg(feature = "mock-beacon")]
pub fn settle_round_mock(
    ctx: Context<SettleRoundMock>,
    lottery_id: u64,
    round: u64,
    beacon: [u8; BEACON_LEN],
    page_size: Option<u32>,
) -> Result<bool> {
    let store = &ctx.accounts.store;
    require_keys_eq!(store.admin, ctx.accounts.admin.key(), LotteryError::Unauthorized);
    store.ensure_listed(lottery_id, &ctx.accounts.lottery.key())?;

    let progress = ctx.accounts.lottery.settle_page(
        &mut ctx.accounts.queue,
        &mut ctx.accounts.round,
        round,
        &beacon,
        page_size,
        now_ms()?,
    )?;

    report(&ctx.accounts.lottery, &ctx.accounts.round, progress);
    Ok(progress.settled)
}

fn report(lottery: &Lottery, round: &LotteryRound, progress: SettlementProgress) {
    emit!(SettlementPage {
        lottery_id: lottery.lottery_id,
        round: round.round,
        scored: progress.scored,
        remaining: progress.remaining,
    });

    if !progress.settled {
        msg!(
            "Round {}: scored {}, {} left",
            round.round,
            progress.scored,
            progress.remaining
        );
        return;
    }

    if let Some(draw) = &round.draw {
        emit!(RoundSettled {
            lottery_id: lottery.lottery_id,
            round: round.round,
            winning_picks: draw.clone(),
            jackpot_winners: lottery.jackpot_winners.len() as u32,
            settled_at_ms: round.settled_at_ms,
        });
    }
    msg!("Round {} settled", round.round);
}
