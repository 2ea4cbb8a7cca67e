use anchor_lang::prelude::*;
use anchor_spl::token::{self, CloseAccount};

use crate::constants::{INITIAL_LOTTERY_ID, INITIAL_VERSION};
use crate::errors::LotteryError;
use crate::events::{FeesWithdrawn, LotteryCreated, LotteryRemoved};
use crate::instructions::transfer_from_vault;
use crate::state::{LotteryParams, LotteryStore, TicketQueue};
use crate::utils::now_ms;
use crate::{CreateLottery, InitializeStore, RemoveLottery, UpdateStore, WithdrawFees};

pub fn initialize_store(ctx: Context<InitializeStore>, beacon_authority: Pubkey) -> Result<()> {
    ctx.accounts.store.set_inner(LotteryStore {
        admin: ctx.accounts.admin.key(),
        bump: ctx.bumps.store,
        is_closed: false,
        beacon_authority,
        next_lottery_id: INITIAL_LOTTERY_ID,
        lotteries: Vec::new(),
        version: INITIAL_VERSION,
    });
    Ok(())
}

pub fn set_store_closed(ctx: Context<UpdateStore>, closed: bool) -> Result<()> {
    let store = &mut ctx.accounts.store;
    require_keys_eq!(store.admin, ctx.accounts.admin.key(), LotteryError::Unauthorized);

    store.is_closed = closed;
    msg!("Store closed: {}", closed);
    Ok(())
}

pub fn create_lottery(
    ctx: Context<CreateLottery>,
    first_round: u64,
    drawing_time_ms: u64,
    params: LotteryParams,
) -> Result<()> {
    let now = now_ms()?;

    let store_key = ctx.accounts.store.key();
    let lottery_key = ctx.accounts.lottery.key();
    let mint = ctx.accounts.mint.key();

    let store = &mut ctx.accounts.store;
    require_keys_eq!(store.admin, ctx.accounts.admin.key(), LotteryError::Unauthorized);
    store.ensure_open()?;

    // same id the lottery PDA was derived from
    let lottery_id = store.register(lottery_key, mint)?;

    let lottery = &mut ctx.accounts.lottery;
    lottery.configure(params, first_round, drawing_time_ms, now)?;
    lottery.store = store_key;
    lottery.lottery_id = lottery_id;
    lottery.bump = ctx.bumps.lottery;
    lottery.mint = mint;
    lottery.vault = ctx.accounts.vault.key();
    lottery.vault_bump = ctx.bumps.vault;
    lottery.queue = ctx.accounts.queue.key();
    lottery.version = INITIAL_VERSION;

    ctx.accounts.queue.set_inner(TicketQueue {
        lottery: lottery_key,
        bump: ctx.bumps.queue,
        head: 0,
        len: 0,
        slots: Vec::new(),
    });

    ctx.accounts
        .round
        .open(lottery_key, first_round, ctx.bumps.round, now);

    emit!(LotteryCreated {
        lottery_id,
        lottery: lottery_key,
        mint,
        first_round,
        drawing_time_ms,
    });
    msg!("Lottery {} created, first round {}", lottery_id, first_round);

    Ok(())
}

pub fn remove_lottery(ctx: Context<RemoveLottery>, lottery_id: u64) -> Result<()> {
    let lottery_key = ctx.accounts.lottery.key();
    {
        let store = &ctx.accounts.store;
        require_keys_eq!(store.admin, ctx.accounts.admin.key(), LotteryError::Unauthorized);
        store.ensure_listed(lottery_id, &lottery_key)?;
    }

    ctx.accounts.lottery.sweep_for_removal(&ctx.accounts.queue)?;

    // everything left in the vault goes, including stray deposits
    let swept = ctx.accounts.vault.amount;
    transfer_from_vault(
        &ctx.accounts.token_program,
        &ctx.accounts.vault,
        &ctx.accounts.admin_token,
        &ctx.accounts.lottery,
        swept,
    )?;

    let lottery = &ctx.accounts.lottery;
    let lottery_le = lottery.lottery_id.to_le_bytes();
    let signer_seeds: &[&[&[u8]]] = &[&[
        crate::LOTTERY_SEED,
        lottery.store.as_ref(),
        &lottery_le,
        &[lottery.bump],
    ]];
    token::close_account(CpiContext::new_with_signer(
        ctx.accounts.token_program.to_account_info(),
        CloseAccount {
            account: ctx.accounts.vault.to_account_info(),
            destination: ctx.accounts.admin.to_account_info(),
            authority: ctx.accounts.lottery.to_account_info(),
        },
        signer_seeds,
    ))?;

    ctx.accounts.store.deregister(lottery_id)?;

    emit!(LotteryRemoved { lottery_id, swept });
    Ok(())
}

pub fn withdraw_fees(ctx: Context<WithdrawFees>, lottery_id: u64) -> Result<()> {
    let store = &ctx.accounts.store;
    require_keys_eq!(store.admin, ctx.accounts.admin.key(), LotteryError::Unauthorized);
    store.ensure_listed(lottery_id, &ctx.accounts.lottery.key())?;

    let amount = ctx.accounts.lottery.withdraw_fees()?;
    transfer_from_vault(
        &ctx.accounts.token_program,
        &ctx.accounts.vault,
        &ctx.accounts.admin_token,
        &ctx.accounts.lottery,
        amount,
    )?;

    emit!(FeesWithdrawn { lottery_id, amount });
    Ok(())
}
