use anchor_lang::prelude::*;

pub mod constants;
pub mod contexts;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod ledger;
pub mod queue;
pub mod randomness;
pub mod settlement;
pub mod state;
pub mod utils;

#[cfg(test)]
mod test_fixtures;

pub use constants::*;
pub use contexts::*;
pub use errors::*;
pub use instructions::*;
pub use state::*;
pub use utils::*;

declare_id!("BHToB3Bd7Jb5SM5XDg64B4HzX2jdGwZdYrJqAWhVYr16");

#[program]
pub mod beacon_lottery {
    use super::*;
    use crate::instructions::{admin, beacon, purchase, redeem, round, settle, view};

    // ----------------------------
    // Store administration
    // ----------------------------
    pub fn initialize_store(ctx: Context<InitializeStore>, beacon_authority: Pubkey) -> Result<()> {
        admin::initialize_store(ctx, beacon_authority)
    }

    pub fn set_store_closed(ctx: Context<UpdateStore>, closed: bool) -> Result<()> {
        admin::set_store_closed(ctx, closed)
    }

    pub fn set_beacon_authority(ctx: Context<UpdateStore>, beacon_authority: Pubkey) -> Result<()> {
        beacon::set_beacon_authority(ctx, beacon_authority)
    }

    pub fn create_lottery(
        ctx: Context<CreateLottery>,
        first_round: u64,
        drawing_time_ms: u64,
        params: LotteryParams,
    ) -> Result<()> {
        admin::create_lottery(ctx, first_round, drawing_time_ms, params)
    }

    pub fn remove_lottery(ctx: Context<RemoveLottery>, lottery_id: u64) -> Result<()> {
        admin::remove_lottery(ctx, lottery_id)
    }

    pub fn withdraw_fees(ctx: Context<WithdrawFees>, lottery_id: u64) -> Result<()> {
        admin::withdraw_fees(ctx, lottery_id)
    }

    // ----------------------------
    // Tickets
    // ----------------------------
    pub fn purchase_ticket(
        ctx: Context<PurchaseTicket>,
        lottery_id: u64,
        numbers: Vec<u8>,
        special: u8,
        payment: u64,
    ) -> Result<()> {
        purchase::purchase_ticket(ctx, lottery_id, numbers, special, payment)
    }

    pub fn transfer_ticket(ctx: Context<TransferTicket>, new_holder: Pubkey) -> Result<()> {
        purchase::transfer_ticket(ctx, new_holder)
    }

    pub fn redeem_ticket(ctx: Context<RedeemTicket>, lottery_id: u64) -> Result<u64> {
        redeem::redeem_ticket(ctx, lottery_id)
    }

    // ----------------------------
    // Settlement / rounds
    // ----------------------------
    pub fn settle_round(
        ctx: Context<SettleRound>,
        lottery_id: u64,
        round: u64,
        beacon: [u8; 64],
        page_size: Option<u32>,
    ) -> Result<bool> {
        settle::settle_round(ctx, lottery_id, round, beacon, page_size)
    }

    #[cfg(feature = "mock-beacon")]
    pub fn settle_round_mock(
        ctx: Context<SettleRoundMock>,
        lottery_id: u64,
        round: u64,
        beacon: [u8; 64],
        page_size: Option<u32>,
    ) -> Result<bool> {
        settle::settle_round_mock(ctx, lottery_id, round, beacon, page_size)
    }

    pub fn allow_redemptions_for_round(
        ctx: Context<AllowRedemptions>,
        lottery_id: u64,
        round: u64,
    ) -> Result<()> {
        round::allow_redemptions_for_round(ctx, lottery_id, round)
    }

    pub fn set_next_round_and_drawing_time(
        ctx: Context<AdvanceRound>,
        lottery_id: u64,
        next_round: u64,
        drawing_time_ms: u64,
    ) -> Result<()> {
        round::set_next_round_and_drawing_time(ctx, lottery_id, next_round, drawing_time_ms)
    }

    pub fn lottery_status(ctx: Context<ViewLottery>, lottery_id: u64) -> Result<LotteryStatus> {
        view::lottery_status(ctx, lottery_id)
    }
}
