//! Off-chain harness driving one lottery through its round lifecycle.

use anchor_lang::prelude::*;

use crate::{
    constants::{BEACON_LEN, INITIAL_LOTTERY_ID, INITIAL_TICKET_ID, INITIAL_VERSION},
    ledger::IssuedTicket,
    randomness::draw_winning_picks,
    settlement::SettlementProgress,
    state::{
        BallConfig, Lottery, LotteryParams, LotteryRound, LotteryStore, PickSet, RewardTier,
        Ticket, TicketQueue,
    },
};

pub const DRAWING_TIME_MS: u64 = 1_700_000_000_000;
pub const FIRST_ROUND: u64 = 1_000;
pub const NEAR_MISS_SPECIAL_PAYOUT: u64 = 4;

/// Three numbers out of `[0, 9]`, special out of `[0, 4]`, ticket cost 10.
pub fn default_params() -> LotteryParams {
    LotteryParams {
        balls: BallConfig {
            normal_ball_count: 3,
            max_normal_ball: 9,
            max_special_ball: 4,
        },
        ticket_cost: 10,
        minimum_jackpot: 0,
        reward_table: vec![
            RewardTier { normal_matches: 3, special_hit: false, payout: 6 },
            RewardTier { normal_matches: 2, special_hit: true, payout: NEAR_MISS_SPECIAL_PAYOUT },
            RewardTier { normal_matches: 2, special_hit: false, payout: 2 },
            RewardTier { normal_matches: 1, special_hit: true, payout: 1 },
        ],
    }
}

pub fn empty_store() -> LotteryStore {
    LotteryStore {
        admin: Pubkey::new_unique(),
        bump: 255,
        is_closed: false,
        beacon_authority: Pubkey::new_unique(),
        next_lottery_id: INITIAL_LOTTERY_ID,
        lotteries: Vec::new(),
        version: INITIAL_VERSION,
    }
}

fn blank_lottery(store: Pubkey) -> Lottery {
    Lottery {
        store,
        lottery_id: INITIAL_LOTTERY_ID,
        bump: 254,
        mint: Pubkey::new_unique(),
        vault: Pubkey::new_unique(),
        vault_bump: 253,
        queue: Pubkey::new_unique(),
        balls: BallConfig {
            normal_ball_count: 0,
            max_normal_ball: 0,
            max_special_ball: 0,
        },
        ticket_cost: 0,
        minimum_jackpot: 0,
        reward_table: Vec::new(),
        prize_pool: 0,
        fees: 0,
        reserved: 0,
        total_deposited: 0,
        total_paid_out: 0,
        current_round: 0,
        drawing_time_ms: 0,
        next_ticket_id: INITIAL_TICKET_ID,
        winning_tickets: Vec::new(),
        jackpot_winners: Vec::new(),
        created_at_ms: 0,
        version: INITIAL_VERSION,
    }
}

fn blank_round() -> LotteryRound {
    LotteryRound {
        lottery: Pubkey::default(),
        round: 0,
        bump: 0,
        settled: false,
        redemptions_allowed: false,
        draw: None,
        scored_count: 0,
        opened_at_ms: 0,
        settled_at_ms: 0,
    }
}

pub struct Harness {
    pub lottery_key: Pubkey,
    pub holder: Pubkey,
    pub lottery: Lottery,
    pub queue: TicketQueue,
    pub round: LotteryRound,
    pub beacon: [u8; BEACON_LEN],
    pub clock: u64,
}

impl Harness {
    pub fn try_new(params: LotteryParams) -> Result<Self> {
        let lottery_key = Pubkey::new_unique();
        let clock = DRAWING_TIME_MS - 60_000;

        let mut lottery = blank_lottery(Pubkey::new_unique());
        lottery.configure(params, FIRST_ROUND, DRAWING_TIME_MS, clock)?;

        let mut round = blank_round();
        round.open(lottery_key, FIRST_ROUND, 252, clock);

        let queue = TicketQueue {
            lottery: lottery_key,
            bump: 251,
            head: 0,
            len: 0,
            slots: Vec::new(),
        };

        let mut beacon = [0u8; BEACON_LEN];
        for (i, b) in beacon.iter_mut().enumerate() {
            *b = (i as u8).wrapping_mul(37).wrapping_add(11);
        }

        Ok(Self {
            lottery_key,
            holder: Pubkey::new_unique(),
            lottery,
            queue,
            round,
            beacon,
            clock,
        })
    }

    pub fn new(params: LotteryParams) -> Self {
        Self::try_new(params).unwrap()
    }

    /// Winning picks the harness beacon produces for this lottery.
    pub fn draw(&self) -> PickSet {
        draw_winning_picks(&self.beacon, &self.lottery.balls)
    }

    pub fn buy(&mut self, numbers: &[u8], special: u8) -> Result<IssuedTicket> {
        let cost = self.lottery.ticket_cost;
        self.lottery
            .purchase(&mut self.queue, &self.round, numbers, special, cost, self.clock)
    }

    pub fn settle(&mut self, page: Option<u32>) -> Result<SettlementProgress> {
        let round = self.lottery.current_round;
        self.lottery
            .settle_page(&mut self.queue, &mut self.round, round, &self.beacon, page, self.clock)
    }

    /// Player-side account for a purchased ticket.
    pub fn ticket(&self, issued: &IssuedTicket) -> Ticket {
        Ticket {
            ticket_id: issued.ticket_id,
            lottery_id: self.lottery.lottery_id,
            lottery: self.lottery_key,
            round: issued.round,
            picks: issued.picks.clone(),
            holder: self.holder,
            issued_at_ms: self.clock,
            bump: 250,
        }
    }

    /// Opens `round` as the harness round and returns the previous one.
    pub fn open_round(&mut self, round: u64) -> LotteryRound {
        let mut next = blank_round();
        next.open(self.lottery_key, round, 249, self.clock);
        std::mem::replace(&mut self.round, next)
    }
}

/// All draw numbers but the largest, plus the smallest number outside the draw.
pub fn near_miss(draw: &PickSet, balls: &BallConfig) -> Vec<u8> {
    let mut numbers: Vec<u8> = draw.numbers[..draw.numbers.len() - 1].to_vec();
    let outside = (0..=balls.max_normal_ball)
        .find(|n| !draw.numbers.contains(n))
        .unwrap();
    numbers.push(outside);
    numbers
}

/// Numbers sharing nothing with the draw.
pub fn disjoint(draw: &PickSet, balls: &BallConfig) -> Vec<u8> {
    (0..=balls.max_normal_ball)
        .filter(|n| !draw.numbers.contains(n))
        .take(balls.normal_ball_count as usize)
        .collect()
}

pub fn other_special(draw: &PickSet, balls: &BallConfig) -> u8 {
    (draw.special + 1) % (balls.max_special_ball + 1)
}
