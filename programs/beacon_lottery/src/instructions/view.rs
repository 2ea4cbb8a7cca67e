use anchor_lang::prelude::*;

use crate::state::{Lottery, LotteryRound, RoundPhase, TicketQueue};
use crate::ViewLottery;

/// Read-only snapshot returned through instruction return data.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct LotteryStatus {
    pub lottery_id: u64,
    pub current_round: u64,
    pub drawing_time_ms: u64,
    pub phase: RoundPhase,
    pub ticket_cost: u64,
    pub prize_pool: u64,
    pub fees: u64,
    pub reserved: u64,
    pub queued: u64,
    pub scored: u64,
    pub jackpot_winners: u32,
    pub winning_tickets: u32,
}

impl Lottery {
    pub fn status(&self, queue: &TicketQueue, round: &LotteryRound) -> LotteryStatus {
        LotteryStatus {
            lottery_id: self.lottery_id,
            current_round: self.current_round,
            drawing_time_ms: self.drawing_time_ms,
            phase: round.phase(),
            ticket_cost: self.ticket_cost,
            prize_pool: self.prize_pool,
            fees: self.fees,
            reserved: self.reserved,
            queued: queue.len() as u64,
            scored: round.scored_count,
            jackpot_winners: self.jackpot_winners.len() as u32,
            winning_tickets: self.winning_tickets.len() as u32,
        }
    }
}

pub fn lottery_status(ctx: Context<ViewLottery>, lottery_id: u64) -> Result<LotteryStatus> {
    ctx.accounts
        .store
        .ensure_listed(lottery_id, &ctx.accounts.lottery.key())?;

    Ok(ctx
        .accounts
        .lottery
        .status(&ctx.accounts.queue, &ctx.accounts.round))
}
