use anchor_lang::prelude::*;

use crate::errors::LotteryError;

// ---------------
// Value types
// ---------------

/// Ball ranges of a lottery. Both ranges are inclusive and start at 0.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, InitSpace)]
pub struct BallConfig {
    pub normal_ball_count: u8,
    pub max_normal_ball: u8,
    pub max_special_ball: u8,
}

/// A combination of distinct normal numbers plus one special number.
///
/// `numbers` is kept sorted so two pick sets with the same members compare
/// equal. Only `PickSet::new` (player input) and the draw build one.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq, InitSpace)]
pub struct PickSet {
    // MAX_NORMAL_BALLS
    #[max_len(8)]
    pub numbers: Vec<u8>,
    pub special: u8,
}

impl PickSet {
    pub fn new(numbers: &[u8], special: u8, balls: &BallConfig) -> Result<Self> {
        require!(
            numbers.len() == balls.normal_ball_count as usize,
            LotteryError::InvalidNumberSelection
        );
        require!(special <= balls.max_special_ball, LotteryError::InvalidNumberSelection);

        let mut sorted = numbers.to_vec();
        sorted.sort_unstable();
        for (i, n) in sorted.iter().enumerate() {
            require!(*n <= balls.max_normal_ball, LotteryError::InvalidNumberSelection);
            if i > 0 {
                require!(sorted[i - 1] != *n, LotteryError::InvalidNumberSelection);
            }
        }

        Ok(Self {
            numbers: sorted,
            special,
        })
    }

    /// Builds a pick set from numbers already known to be distinct and in range.
    pub(crate) fn from_drawn(mut numbers: Vec<u8>, special: u8) -> Self {
        numbers.sort_unstable();
        Self { numbers, special }
    }

    pub fn normal_matches(&self, other: &PickSet) -> u8 {
        self.numbers
            .iter()
            .filter(|n| other.numbers.binary_search(n).is_ok())
            .count() as u8
    }

    pub fn special_hit(&self, other: &PickSet) -> bool {
        self.special == other.special
    }
}

/// One row of the reward table: `(normal_matches, special_hit) -> payout`.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, InitSpace)]
pub struct RewardTier {
    pub normal_matches: u8,
    pub special_hit: bool,
    pub payout: u64,
}

/// Queue-side half of a ticket. Authoritative copy of the picks for scoring.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq, InitSpace)]
pub struct TicketReceipt {
    pub ticket_id: u64,
    pub picks: PickSet,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, InitSpace)]
pub struct WinningTicket {
    pub ticket_id: u64,
    pub amount: u64,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, InitSpace)]
pub struct LotteryEntry {
    pub lottery_id: u64,
    pub lottery: Pubkey,
    pub mint: Pubkey,
}

/// Creation-time configuration of a lottery.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct LotteryParams {
    pub balls: BallConfig,
    pub ticket_cost: u64,
    pub minimum_jackpot: u64,
    pub reward_table: Vec<RewardTier>,
}

// ---------------
// Accounts
// ---------------

#[account]
#[derive(InitSpace)]
pub struct LotteryStore {
    pub admin: Pubkey,
    pub bump: u8,

    pub is_closed: bool,

    /// Key allowed to sign beacon values (checked via ed25519 introspection).
    pub beacon_authority: Pubkey,

    pub next_lottery_id: u64,

    // MAX_LOTTERIES
    #[max_len(32)]
    pub lotteries: Vec<LotteryEntry>,

    pub version: u16,
}

#[account]
#[derive(InitSpace)]
pub struct Lottery {
    pub store: Pubkey,
    pub lottery_id: u64,
    pub bump: u8,

    // SPL custody: one vault holds pool, fees and reserved winnings
    pub mint: Pubkey,
    pub vault: Pubkey,
    pub vault_bump: u8,
    pub queue: Pubkey,

    pub balls: BallConfig,
    pub ticket_cost: u64,
    pub minimum_jackpot: u64,
    // MAX_REWARD_TIERS
    #[max_len(18)]
    pub reward_table: Vec<RewardTier>,

    // ledger
    pub prize_pool: u64,
    pub fees: u64,
    pub reserved: u64,
    pub total_deposited: u64,
    pub total_paid_out: u64,

    // round lifecycle
    pub current_round: u64,
    pub drawing_time_ms: u64,
    pub next_ticket_id: u64,

    // results
    // MAX_WINNING_TICKETS
    #[max_len(256)]
    pub winning_tickets: Vec<WinningTicket>,
    // MAX_JACKPOT_WINNERS
    #[max_len(256)]
    pub jackpot_winners: Vec<u64>,

    pub created_at_ms: u64,
    pub version: u16,
}

/// Bounded FIFO of receipts waiting to be scored.
///
/// Ring buffer over `slots`; `head` is the settlement cursor. `slots` grows up
/// to `QUEUE_CAPACITY` and is reused after that.
#[account]
#[derive(InitSpace)]
pub struct TicketQueue {
    pub lottery: Pubkey,
    pub bump: u8,
    pub head: u16,
    pub len: u16,
    // QUEUE_CAPACITY
    #[max_len(256)]
    pub slots: Vec<TicketReceipt>,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundPhase {
    Open,
    Settling,
    Settled,
    Redeemable,
}

#[account]
#[derive(InitSpace)]
pub struct LotteryRound {
    pub lottery: Pubkey,
    pub round: u64,
    pub bump: u8,

    pub settled: bool,
    pub redemptions_allowed: bool,

    // recorded on the first settlement page, replayed by the following ones
    pub draw: Option<PickSet>,
    pub scored_count: u64,

    pub opened_at_ms: u64,
    pub settled_at_ms: u64,
}

impl LotteryRound {
    pub fn phase(&self) -> RoundPhase {
        if self.redemptions_allowed {
            RoundPhase::Redeemable
        } else if self.settled {
            RoundPhase::Settled
        } else if self.draw.is_some() {
            RoundPhase::Settling
        } else {
            RoundPhase::Open
        }
    }
}

/// Player-held half of a ticket. Closed on redemption.
#[account]
#[derive(InitSpace)]
pub struct Ticket {
    pub ticket_id: u64,
    pub lottery_id: u64,
    pub lottery: Pubkey,
    pub round: u64,
    pub picks: PickSet,
    pub holder: Pubkey,
    pub issued_at_ms: u64,
    pub bump: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn balls() -> BallConfig {
        BallConfig {
            normal_ball_count: 3,
            max_normal_ball: 9,
            max_special_ball: 4,
        }
    }

    #[test]
    fn pick_set_sorts_numbers() {
        let picks = PickSet::new(&[7, 2, 5], 1, &balls()).unwrap();
        assert_eq!(picks.numbers, vec![2, 5, 7]);
        assert_eq!(picks, PickSet::new(&[5, 7, 2], 1, &balls()).unwrap());
    }

    #[test]
    fn pick_set_rejects_bad_selections() {
        let cfg = balls();
        let expected: Error = LotteryError::InvalidNumberSelection.into();

        // wrong count
        assert_eq!(PickSet::new(&[1, 2], 0, &cfg).unwrap_err(), expected);
        assert_eq!(PickSet::new(&[1, 2, 3, 4], 0, &cfg).unwrap_err(), expected);
        // duplicate
        assert_eq!(PickSet::new(&[1, 1, 3], 0, &cfg).unwrap_err(), expected);
        // out of range normal / special
        assert_eq!(PickSet::new(&[1, 2, 10], 0, &cfg).unwrap_err(), expected);
        assert_eq!(PickSet::new(&[1, 2, 3], 5, &cfg).unwrap_err(), expected);
    }

    #[test]
    fn pick_set_accepts_range_bounds() {
        let picks = PickSet::new(&[0, 9, 4], 4, &balls()).unwrap();
        assert_eq!(picks.numbers, vec![0, 4, 9]);
        assert_eq!(picks.special, 4);
    }

    #[test]
    fn matching_counts_shared_numbers() {
        let cfg = balls();
        let ticket = PickSet::new(&[1, 2, 3], 4, &cfg).unwrap();
        let draw = PickSet::new(&[3, 1, 8], 4, &cfg).unwrap();
        assert_eq!(ticket.normal_matches(&draw), 2);
        assert!(ticket.special_hit(&draw));

        let miss = PickSet::new(&[5, 6, 7], 0, &cfg).unwrap();
        assert_eq!(miss.normal_matches(&draw), 0);
        assert!(!miss.special_hit(&draw));
    }

    #[test]
    fn round_phase_follows_flags() {
        let mut round = LotteryRound {
            lottery: Pubkey::new_unique(),
            round: 1,
            bump: 255,
            settled: false,
            redemptions_allowed: false,
            draw: None,
            scored_count: 0,
            opened_at_ms: 0,
            settled_at_ms: 0,
        };
        assert_eq!(round.phase(), RoundPhase::Open);

        round.draw = Some(PickSet::from_drawn(vec![1, 2, 3], 0));
        assert_eq!(round.phase(), RoundPhase::Settling);

        round.settled = true;
        assert_eq!(round.phase(), RoundPhase::Settled);

        round.redemptions_allowed = true;
        assert_eq!(round.phase(), RoundPhase::Redeemable);
    }
}
