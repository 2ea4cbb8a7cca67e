use anchor_lang::prelude::*;

use crate::state::PickSet;

#[event]
pub struct LotteryCreated {
    pub lottery_id: u64,
    pub lottery: Pubkey,
    pub mint: Pubkey,
    pub first_round: u64,
    pub drawing_time_ms: u64,
}

#[event]
pub struct LotteryRemoved {
    pub lottery_id: u64,
    pub swept: u64,
}

#[event]
pub struct TicketPurchased {
    pub lottery_id: u64,
    pub round: u64,
    pub ticket_id: u64,
    pub holder: Pubkey,
    pub picks: PickSet,
    pub prize_pool_after: u64,
}

#[event]
pub struct SettlementPage {
    pub lottery_id: u64,
    pub round: u64,
    pub scored: u64,
    pub remaining: u64,
}

#[event]
pub struct RoundSettled {
    pub lottery_id: u64,
    pub round: u64,
    pub winning_picks: PickSet,
    pub jackpot_winners: u32,
    pub settled_at_ms: u64,
}

#[event]
pub struct RedemptionsAllowed {
    pub lottery_id: u64,
    pub round: u64,
    pub prize_pool: u64,
}

#[event]
pub struct RoundAdvanced {
    pub lottery_id: u64,
    pub previous_round: u64,
    pub round: u64,
    pub drawing_time_ms: u64,
}

#[event]
pub struct TicketRedeemed {
    pub lottery_id: u64,
    pub round: u64,
    pub ticket_id: u64,
    pub holder: Pubkey,
    pub jackpot: bool,
    pub amount: u64,
}

#[event]
pub struct TicketTransferred {
    pub ticket_id: u64,
    pub from: Pubkey,
    pub to: Pubkey,
}

#[event]
pub struct FeesWithdrawn {
    pub lottery_id: u64,
    pub amount: u64,
}
