use anchor_lang::prelude::*;

use crate::{
    constants::{
        INITIAL_TICKET_ID, MAX_LOTTERIES, MAX_NORMAL_BALLS, MAX_REWARD_TIERS, MAX_WINNING_TICKETS,
    },
    errors::LotteryError,
    state::{
        BallConfig, Lottery, LotteryEntry, LotteryParams, LotteryRound, LotteryStore, PickSet,
        RewardTier, Ticket, TicketQueue, TicketReceipt,
    },
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IssuedTicket {
    pub ticket_id: u64,
    pub round: u64,
    pub picks: PickSet,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RedemptionKind {
    Jackpot,
    Fixed,
    NoPrize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Redemption {
    pub kind: RedemptionKind,
    pub amount: u64,
}

// -------------------------
// Store registry
// -------------------------
impl LotteryStore {
    pub fn ensure_open(&self) -> Result<()> {
        require!(!self.is_closed, LotteryError::StoreClosed);
        Ok(())
    }

    pub fn lookup(&self, lottery_id: u64) -> Result<&LotteryEntry> {
        self.lotteries
            .iter()
            .find(|e| e.lottery_id == lottery_id)
            .ok_or_else(|| error!(LotteryError::LotteryNotFound))
    }

    /// Fails with `LotteryNotFound` unless `lottery` is the account registered
    /// under `lottery_id`.
    pub fn ensure_listed(&self, lottery_id: u64, lottery: &Pubkey) -> Result<()> {
        let entry = self.lookup(lottery_id)?;
        require_keys_eq!(entry.lottery, *lottery, LotteryError::LotteryNotFound);
        Ok(())
    }

    /// Registers a lottery under the next free id and returns that id.
    pub fn register(&mut self, lottery: Pubkey, mint: Pubkey) -> Result<u64> {
        require!(self.lotteries.len() < MAX_LOTTERIES, LotteryError::StoreFull);
        require!(
            !self.lotteries.iter().any(|e| e.lottery == lottery),
            LotteryError::LotteryAlreadyRegistered
        );

        let lottery_id = self.next_lottery_id;
        self.lotteries.push(LotteryEntry {
            lottery_id,
            lottery,
            mint,
        });
        self.next_lottery_id = self
            .next_lottery_id
            .checked_add(1)
            .ok_or(LotteryError::MathOverflow)?;

        Ok(lottery_id)
    }

    pub fn deregister(&mut self, lottery_id: u64) -> Result<LotteryEntry> {
        let pos = self
            .lotteries
            .iter()
            .position(|e| e.lottery_id == lottery_id)
            .ok_or(LotteryError::LotteryNotFound)?;
        Ok(self.lotteries.remove(pos))
    }
}

// -------------------------
// Lottery configuration
// -------------------------
pub fn validate_balls(balls: &BallConfig) -> Result<()> {
    require!(balls.normal_ball_count > 0, LotteryError::InvalidBallConfig);
    require!(
        balls.normal_ball_count as usize <= MAX_NORMAL_BALLS,
        LotteryError::InvalidBallConfig
    );
    // the draw needs enough distinct values to terminate
    require!(
        (balls.normal_ball_count as u16) <= balls.max_normal_ball as u16 + 1,
        LotteryError::InvalidBallConfig
    );
    Ok(())
}

pub fn validate_reward_table(balls: &BallConfig, table: &[RewardTier]) -> Result<()> {
    require!(table.len() <= MAX_REWARD_TIERS, LotteryError::InvalidRewardTable);

    for (i, tier) in table.iter().enumerate() {
        require!(
            tier.normal_matches <= balls.normal_ball_count,
            LotteryError::InvalidRewardTable
        );
        // the jackpot is never a table entry
        require!(
            !(tier.normal_matches == balls.normal_ball_count && tier.special_hit),
            LotteryError::InvalidRewardTable
        );
        require!(
            !table[..i]
                .iter()
                .any(|t| t.normal_matches == tier.normal_matches && t.special_hit == tier.special_hit),
            LotteryError::InvalidRewardTable
        );
    }
    Ok(())
}

impl Lottery {
    /// Validates `params` and resets configuration and ledger. Keys and bumps
    /// are written by the caller.
    pub fn configure(
        &mut self,
        params: LotteryParams,
        first_round: u64,
        drawing_time_ms: u64,
        now_ms: u64,
    ) -> Result<()> {
        validate_balls(&params.balls)?;
        validate_reward_table(&params.balls, &params.reward_table)?;
        require!(params.ticket_cost > 0, LotteryError::InvalidTicketCost);
        require!(drawing_time_ms > now_ms, LotteryError::InvalidDrawingTime);

        self.balls = params.balls;
        self.ticket_cost = params.ticket_cost;
        self.minimum_jackpot = params.minimum_jackpot;
        self.reward_table = params.reward_table;

        self.prize_pool = 0;
        self.fees = 0;
        self.reserved = 0;
        self.total_deposited = 0;
        self.total_paid_out = 0;

        self.current_round = first_round;
        self.drawing_time_ms = drawing_time_ms;
        self.next_ticket_id = INITIAL_TICKET_ID;

        self.winning_tickets = Vec::new();
        self.jackpot_winners = Vec::new();
        self.created_at_ms = now_ms;

        Ok(())
    }

    /// `prize_pool + fees + reserved == deposited - paid out`.
    pub fn is_conserved(&self) -> bool {
        let held = self.prize_pool as u128 + self.fees as u128 + self.reserved as u128;
        let net = self.total_deposited as i128 - self.total_paid_out as i128;
        net >= 0 && held == net as u128
    }

    // -------------------------
    // Purchase
    // -------------------------
    pub fn purchase(
        &mut self,
        queue: &mut TicketQueue,
        round: &LotteryRound,
        numbers: &[u8],
        special: u8,
        payment: u64,
        now_ms: u64,
    ) -> Result<IssuedTicket> {
        require!(now_ms <= self.drawing_time_ms, LotteryError::LotteryNotInProgress);
        require!(round.round == self.current_round, LotteryError::RoundAccountMismatch);
        // settled, redeemable, or a first settlement page already ran
        require!(
            !round.settled && !round.redemptions_allowed && round.draw.is_none(),
            LotteryError::LotteryNotSettled
        );

        let picks = PickSet::new(numbers, special, &self.balls)?;
        require!(payment == self.ticket_cost, LotteryError::InvalidPurchase);

        // settlement must always find room for every queued receipt
        require!(!queue.is_full(), LotteryError::QueueFull);
        require!(
            self.winning_tickets.len() + queue.len() < MAX_WINNING_TICKETS,
            LotteryError::WinningTicketsFull
        );

        let ticket_id = self.next_ticket_id;
        queue.push_back(TicketReceipt {
            ticket_id,
            picks: picks.clone(),
        })?;

        // odd remainder stays with the prize pool
        let fee = payment / 2;
        let to_pool = payment - fee;

        self.fees = self.fees.checked_add(fee).ok_or(LotteryError::MathOverflow)?;
        self.prize_pool = self
            .prize_pool
            .checked_add(to_pool)
            .ok_or(LotteryError::MathOverflow)?;
        self.total_deposited = self
            .total_deposited
            .checked_add(payment)
            .ok_or(LotteryError::MathOverflow)?;
        self.next_ticket_id = ticket_id.checked_add(1).ok_or(LotteryError::MathOverflow)?;

        Ok(IssuedTicket {
            ticket_id,
            round: self.current_round,
            picks,
        })
    }

    // -------------------------
    // Round lifecycle
    // -------------------------
    pub fn allow_redemptions(&self, round: &mut LotteryRound) -> Result<()> {
        require!(round.settled, LotteryError::LotteryNotSettled);
        if !self.jackpot_winners.is_empty() {
            require!(
                self.prize_pool >= self.minimum_jackpot,
                LotteryError::JackpotBelowMinimum
            );
        }

        round.redemptions_allowed = true;
        Ok(())
    }

    /// Moves the lottery to `next_round`. The caller opens the new
    /// `LotteryRound` account afterwards.
    pub fn advance_round(
        &mut self,
        current: &LotteryRound,
        next_round: u64,
        drawing_time_ms: u64,
        now_ms: u64,
    ) -> Result<()> {
        require!(current.round == self.current_round, LotteryError::RoundAccountMismatch);
        require!(current.redemptions_allowed, LotteryError::LotteryNotSettled);
        require!(self.jackpot_winners.is_empty(), LotteryError::JackpotHit);
        require!(next_round > self.current_round, LotteryError::WrongRound);
        require!(drawing_time_ms > now_ms, LotteryError::InvalidDrawingTime);

        self.current_round = next_round;
        self.drawing_time_ms = drawing_time_ms;
        Ok(())
    }

    // -------------------------
    // Redemption
    // -------------------------
    pub fn redeem(&mut self, ticket: &Ticket, round: &LotteryRound) -> Result<Redemption> {
        require!(ticket.lottery_id == self.lottery_id, LotteryError::TicketLotteryMismatch);
        require!(round.round == ticket.round, LotteryError::RoundAccountMismatch);
        require!(round.redemptions_allowed, LotteryError::LotteryNotSettled);

        if let Some(pos) = self
            .jackpot_winners
            .iter()
            .position(|id| *id == ticket.ticket_id)
        {
            // share of what is left, among those still to redeem (self included)
            let winners = self.jackpot_winners.len() as u64;
            let share = self.prize_pool / winners;

            self.jackpot_winners.swap_remove(pos);
            self.prize_pool -= share;
            self.total_paid_out = self
                .total_paid_out
                .checked_add(share)
                .ok_or(LotteryError::MathOverflow)?;

            return Ok(Redemption {
                kind: RedemptionKind::Jackpot,
                amount: share,
            });
        }

        if let Some(pos) = self
            .winning_tickets
            .iter()
            .position(|w| w.ticket_id == ticket.ticket_id)
        {
            let won = self.winning_tickets.remove(pos);
            self.reserved = self
                .reserved
                .checked_sub(won.amount)
                .ok_or(LotteryError::MathOverflow)?;
            self.total_paid_out = self
                .total_paid_out
                .checked_add(won.amount)
                .ok_or(LotteryError::MathOverflow)?;

            return Ok(Redemption {
                kind: RedemptionKind::Fixed,
                amount: won.amount,
            });
        }

        Ok(Redemption {
            kind: RedemptionKind::NoPrize,
            amount: 0,
        })
    }

    // -------------------------
    // Admin withdrawals
    // -------------------------
    pub fn withdraw_fees(&mut self) -> Result<u64> {
        let amount = self.fees;
        self.fees = 0;
        self.total_paid_out = self
            .total_paid_out
            .checked_add(amount)
            .ok_or(LotteryError::MathOverflow)?;
        Ok(amount)
    }

    /// Empties pool and fees for removal. Refused while any ticket can still
    /// be scored or redeemed for a prize.
    pub fn sweep_for_removal(&mut self, queue: &TicketQueue) -> Result<u64> {
        require!(queue.is_empty(), LotteryError::OutstandingClaims);
        require!(self.jackpot_winners.is_empty(), LotteryError::OutstandingClaims);
        require!(self.winning_tickets.is_empty(), LotteryError::OutstandingClaims);

        let amount = self
            .prize_pool
            .checked_add(self.fees)
            .ok_or(LotteryError::MathOverflow)?;
        self.prize_pool = 0;
        self.fees = 0;
        self.total_paid_out = self
            .total_paid_out
            .checked_add(amount)
            .ok_or(LotteryError::MathOverflow)?;
        Ok(amount)
    }
}

impl LotteryRound {
    pub fn open(&mut self, lottery: Pubkey, round: u64, bump: u8, now_ms: u64) {
        self.lottery = lottery;
        self.round = round;
        self.bump = bump;
        self.settled = false;
        self.redemptions_allowed = false;
        self.draw = None;
        self.scored_count = 0;
        self.opened_at_ms = now_ms;
        self.settled_at_ms = 0;
    }
}
