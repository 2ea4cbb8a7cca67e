use anchor_lang::prelude::*;

use crate::{
    constants::{BEACON_LEN, MAX_JACKPOT_WINNERS, MAX_WINNING_TICKETS},
    errors::LotteryError,
    randomness::draw_winning_picks,
    state::{BallConfig, Lottery, LotteryRound, PickSet, RewardTier, TicketQueue, WinningTicket},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PrizeOutcome {
    /// All normal numbers and the special number matched. Paid at redemption.
    Jackpot,
    /// Fixed table payout, reserved out of the prize pool during settlement.
    Fixed(u64),
    Loss,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SettlementProgress {
    pub scored: u64,
    pub remaining: u64,
    pub settled: bool,
}

pub fn resolve_prize(
    ticket: &PickSet,
    draw: &PickSet,
    balls: &BallConfig,
    reward_table: &[RewardTier],
) -> PrizeOutcome {
    let normal_matches = ticket.normal_matches(draw);
    let special_hit = ticket.special_hit(draw);

    if normal_matches == balls.normal_ball_count && special_hit {
        return PrizeOutcome::Jackpot;
    }

    match reward_table
        .iter()
        .find(|t| t.normal_matches == normal_matches && t.special_hit == special_hit)
    {
        Some(tier) if tier.payout > 0 => PrizeOutcome::Fixed(tier.payout),
        _ => PrizeOutcome::Loss,
    }
}

impl Lottery {
    /// Round checks that come before any beacon work.
    pub fn ensure_settleable(&self, round: &LotteryRound, round_number: u64) -> Result<()> {
        require!(round_number == self.current_round, LotteryError::WrongRound);
        require!(round.round == round_number, LotteryError::RoundAccountMismatch);
        require!(!round.settled, LotteryError::LotteryNotSettled);
        Ok(())
    }

    /// Scores up to `page_size` receipts (all of them when `None`) from the
    /// front of the queue against the round's draw.
    ///
    /// Resumable: the first page records the draw in `round`, later pages must
    /// reproduce it from the same beacon. The round is marked settled once the
    /// queue is drained.
    pub fn settle_page(
        &mut self,
        queue: &mut TicketQueue,
        round: &mut LotteryRound,
        round_number: u64,
        beacon: &[u8; BEACON_LEN],
        page_size: Option<u32>,
        now_ms: u64,
    ) -> Result<SettlementProgress> {
        self.ensure_settleable(round, round_number)?;

        let draw = draw_winning_picks(beacon, &self.balls);
        match &round.draw {
            Some(recorded) => require!(*recorded == draw, LotteryError::BeaconMismatch),
            None => round.draw = Some(draw.clone()),
        }

        let target = match page_size {
            Some(n) => queue.len().saturating_sub(n as usize),
            None => 0,
        };

        let mut scored = 0u64;
        while queue.len() > target {
            let receipt = queue.pop_front()?;
            let outcome = resolve_prize(&receipt.picks, &draw, &self.balls, &self.reward_table);
            self.record_outcome(receipt.ticket_id, outcome)?;
            scored += 1;
        }

        round.scored_count = round
            .scored_count
            .checked_add(scored)
            .ok_or(LotteryError::MathOverflow)?;

        if queue.is_empty() {
            round.settled = true;
            round.settled_at_ms = now_ms;
        }

        Ok(SettlementProgress {
            scored,
            remaining: queue.len() as u64,
            settled: round.settled,
        })
    }

    pub fn settle_until_drained(
        &mut self,
        queue: &mut TicketQueue,
        round: &mut LotteryRound,
        round_number: u64,
        beacon: &[u8; BEACON_LEN],
        now_ms: u64,
    ) -> Result<SettlementProgress> {
        self.settle_page(queue, round, round_number, beacon, None, now_ms)
    }

    fn record_outcome(&mut self, ticket_id: u64, outcome: PrizeOutcome) -> Result<()> {
        match outcome {
            PrizeOutcome::Jackpot => {
                require!(
                    self.jackpot_winners.len() < MAX_JACKPOT_WINNERS,
                    LotteryError::JackpotWinnersFull
                );
                self.jackpot_winners.push(ticket_id);
            }
            PrizeOutcome::Fixed(amount) => {
                require!(
                    self.winning_tickets.len() < MAX_WINNING_TICKETS,
                    LotteryError::WinningTicketsFull
                );
                require!(self.prize_pool >= amount, LotteryError::InsufficientPrizePool);

                self.prize_pool -= amount;
                self.reserved = self
                    .reserved
                    .checked_add(amount)
                    .ok_or(LotteryError::MathOverflow)?;
                self.winning_tickets.push(WinningTicket { ticket_id, amount });
            }
            PrizeOutcome::Loss => {}
        }
        Ok(())
    }
}
