// programs/beacon_lottery/src/contexts.rs

use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::state::{Lottery, LotteryRound, LotteryStore, Ticket, TicketQueue};

// ----------------------------
// Store administration
// ----------------------------
#[derive(Accounts)]
pub struct InitializeStore<'info> {
    #[account(
        init,
        payer = admin,
        space = 8 + LotteryStore::INIT_SPACE,
        seeds = [crate::STORE_SEED],
        bump
    )]
    pub store: Account<'info, LotteryStore>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct UpdateStore<'info> {
    #[account(
        mut,
        seeds = [crate::STORE_SEED],
        bump = store.bump
    )]
    pub store: Account<'info, LotteryStore>,

    pub admin: Signer<'info>,
}

#[derive(Accounts)]
#[instruction(first_round: u64)]
pub struct CreateLottery<'info> {
    #[account(
        mut,
        seeds = [crate::STORE_SEED],
        bump = store.bump
    )]
    pub store: Account<'info, LotteryStore>,

    pub mint: Account<'info, Mint>,

    #[account(
        init,
        payer = admin,
        space = 8 + Lottery::INIT_SPACE,
        seeds = [
            crate::LOTTERY_SEED,
            store.key().as_ref(),
            store.next_lottery_id.to_le_bytes().as_ref()
        ],
        bump
    )]
    pub lottery: Box<Account<'info, Lottery>>,

    #[account(
        init,
        payer = admin,
        space = 8 + TicketQueue::INIT_SPACE,
        seeds = [crate::QUEUE_SEED, lottery.key().as_ref()],
        bump
    )]
    pub queue: Box<Account<'info, TicketQueue>>,

    /// First round of the lottery; its number is the `first_round` argument.
    #[account(
        init,
        payer = admin,
        space = 8 + LotteryRound::INIT_SPACE,
        seeds = [
            crate::ROUND_SEED,
            lottery.key().as_ref(),
            first_round.to_le_bytes().as_ref()
        ],
        bump
    )]
    pub round: Account<'info, LotteryRound>,

    #[account(
        init,
        payer = admin,
        seeds = [crate::PRIZE_VAULT_SEED, lottery.key().as_ref()],
        bump,
        token::mint = mint,
        token::authority = lottery
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[derive(Accounts)]
#[instruction(lottery_id: u64)]
pub struct RemoveLottery<'info> {
    #[account(
        mut,
        seeds = [crate::STORE_SEED],
        bump = store.bump
    )]
    pub store: Account<'info, LotteryStore>,

    #[account(
        mut,
        seeds = [crate::LOTTERY_SEED, store.key().as_ref(), lottery_id.to_le_bytes().as_ref()],
        bump = lottery.bump,
        close = admin
    )]
    pub lottery: Box<Account<'info, Lottery>>,

    #[account(
        mut,
        address = lottery.queue,
        close = admin
    )]
    pub queue: Box<Account<'info, TicketQueue>>,

    #[account(
        mut,
        seeds = [
            crate::ROUND_SEED,
            lottery.key().as_ref(),
            lottery.current_round.to_le_bytes().as_ref()
        ],
        bump = round.bump,
        close = admin
    )]
    pub round: Account<'info, LotteryRound>,

    #[account(mut, address = lottery.vault @ crate::errors::LotteryError::VaultMismatch)]
    pub vault: Account<'info, TokenAccount>,

    #[account(mut, token::mint = lottery.mint)]
    pub admin_token: Account<'info, TokenAccount>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[derive(Accounts)]
#[instruction(lottery_id: u64)]
pub struct WithdrawFees<'info> {
    #[account(
        seeds = [crate::STORE_SEED],
        bump = store.bump
    )]
    pub store: Account<'info, LotteryStore>,

    #[account(
        mut,
        seeds = [crate::LOTTERY_SEED, store.key().as_ref(), lottery_id.to_le_bytes().as_ref()],
        bump = lottery.bump
    )]
    pub lottery: Box<Account<'info, Lottery>>,

    #[account(mut, address = lottery.vault @ crate::errors::LotteryError::VaultMismatch)]
    pub vault: Account<'info, TokenAccount>,

    #[account(mut, token::mint = lottery.mint)]
    pub admin_token: Account<'info, TokenAccount>,

    pub admin: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

// ----------------------------
// Tickets
// ----------------------------
#[derive(Accounts)]
#[instruction(lottery_id: u64)]
pub struct PurchaseTicket<'info> {
    #[account(
        seeds = [crate::STORE_SEED],
        bump = store.bump
    )]
    pub store: Account<'info, LotteryStore>,

    #[account(
        mut,
        seeds = [crate::LOTTERY_SEED, store.key().as_ref(), lottery_id.to_le_bytes().as_ref()],
        bump = lottery.bump
    )]
    pub lottery: Box<Account<'info, Lottery>>,

    #[account(mut, address = lottery.queue)]
    pub queue: Box<Account<'info, TicketQueue>>,

    #[account(
        seeds = [
            crate::ROUND_SEED,
            lottery.key().as_ref(),
            lottery.current_round.to_le_bytes().as_ref()
        ],
        bump = round.bump
    )]
    pub round: Account<'info, LotteryRound>,

    #[account(
        init,
        payer = buyer,
        space = 8 + Ticket::INIT_SPACE,
        seeds = [
            crate::TICKET_SEED,
            lottery.key().as_ref(),
            lottery.next_ticket_id.to_le_bytes().as_ref()
        ],
        bump
    )]
    pub ticket: Account<'info, Ticket>,

    #[account(mut, address = lottery.vault @ crate::errors::LotteryError::VaultMismatch)]
    pub vault: Account<'info, TokenAccount>,

    #[account(
        mut,
        token::mint = lottery.mint,
        token::authority = buyer
    )]
    pub buyer_token: Account<'info, TokenAccount>,

    #[account(mut)]
    pub buyer: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct TransferTicket<'info> {
    #[account(
        mut,
        seeds = [
            crate::TICKET_SEED,
            ticket.lottery.as_ref(),
            ticket.ticket_id.to_le_bytes().as_ref()
        ],
        bump = ticket.bump,
        has_one = holder @ crate::errors::LotteryError::NotTicketHolder
    )]
    pub ticket: Account<'info, Ticket>,

    pub holder: Signer<'info>,
}

#[derive(Accounts)]
#[instruction(lottery_id: u64)]
pub struct RedeemTicket<'info> {
    #[account(
        seeds = [crate::STORE_SEED],
        bump = store.bump
    )]
    pub store: Account<'info, LotteryStore>,

    #[account(
        mut,
        seeds = [crate::LOTTERY_SEED, store.key().as_ref(), lottery_id.to_le_bytes().as_ref()],
        bump = lottery.bump
    )]
    pub lottery: Box<Account<'info, Lottery>>,

    #[account(
        mut,
        seeds = [
            crate::TICKET_SEED,
            ticket.lottery.as_ref(),
            ticket.ticket_id.to_le_bytes().as_ref()
        ],
        bump = ticket.bump,
        has_one = holder @ crate::errors::LotteryError::NotTicketHolder,
        close = holder
    )]
    pub ticket: Account<'info, Ticket>,

    /// Round the ticket was bought in, under the ticket's own lottery.
    #[account(
        seeds = [
            crate::ROUND_SEED,
            ticket.lottery.as_ref(),
            ticket.round.to_le_bytes().as_ref()
        ],
        bump = round.bump
    )]
    pub round: Account<'info, LotteryRound>,

    #[account(mut, address = lottery.vault @ crate::errors::LotteryError::VaultMismatch)]
    pub vault: Account<'info, TokenAccount>,

    #[account(mut, token::mint = lottery.mint)]
    pub holder_token: Account<'info, TokenAccount>,

    #[account(mut)]
    pub holder: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

// ----------------------------
// Settlement / rounds
// ----------------------------
#[derive(Accounts)]
#[instruction(lottery_id: u64)]
pub struct SettleRound<'info> {
    #[account(
        seeds = [crate::STORE_SEED],
        bump = store.bump
    )]
    pub store: Account<'info, LotteryStore>,

    #[account(
        mut,
        seeds = [crate::LOTTERY_SEED, store.key().as_ref(), lottery_id.to_le_bytes().as_ref()],
        bump = lottery.bump
    )]
    pub lottery: Box<Account<'info, Lottery>>,

    #[account(mut, address = lottery.queue)]
    pub queue: Box<Account<'info, TicketQueue>>,

    #[account(
        mut,
        seeds = [
            crate::ROUND_SEED,
            lottery.key().as_ref(),
            lottery.current_round.to_le_bytes().as_ref()
        ],
        bump = round.bump
    )]
    pub round: Account<'info, LotteryRound>,

    pub admin: Signer<'info>,

    /// CHECK: instructions sysvar for ed25519 introspection
    #[account(address = anchor_lang::solana_program::sysvar::instructions::ID)]
    pub instructions: UncheckedAccount<'info>,
}

#[cfg(feature = "mock-beacon")]
#[derive(Accounts)]
#[instruction(lottery_id: u64)]
pub struct SettleRoundMock<'info> {
    #[account(
        seeds = [crate::STORE_SEED],
        bump = store.bump
    )]
    pub store: Account<'info, LotteryStore>,

    #[account(
        mut,
        seeds = [crate::LOTTERY_SEED, store.key().as_ref(), lottery_id.to_le_bytes().as_ref()],
        bump = lottery.bump
    )]
    pub lottery: Box<Account<'info, Lottery>>,

    #[account(mut, address = lottery.queue)]
    pub queue: Box<Account<'info, TicketQueue>>,

    #[account(
        mut,
        seeds = [
            crate::ROUND_SEED,
            lottery.key().as_ref(),
            lottery.current_round.to_le_bytes().as_ref()
        ],
        bump = round.bump
    )]
    pub round: Account<'info, LotteryRound>,

    pub admin: Signer<'info>,
}

#[derive(Accounts)]
#[instruction(lottery_id: u64, round: u64)]
pub struct AllowRedemptions<'info> {
    #[account(
        seeds = [crate::STORE_SEED],
        bump = store.bump
    )]
    pub store: Account<'info, LotteryStore>,

    #[account(
        seeds = [crate::LOTTERY_SEED, store.key().as_ref(), lottery_id.to_le_bytes().as_ref()],
        bump = lottery.bump
    )]
    pub lottery: Box<Account<'info, Lottery>>,

    #[account(
        mut,
        seeds = [crate::ROUND_SEED, lottery.key().as_ref(), round.to_le_bytes().as_ref()],
        bump = lottery_round.bump
    )]
    pub lottery_round: Account<'info, LotteryRound>,

    pub admin: Signer<'info>,
}

#[derive(Accounts)]
#[instruction(lottery_id: u64, next_round_number: u64)]
pub struct AdvanceRound<'info> {
    #[account(
        seeds = [crate::STORE_SEED],
        bump = store.bump
    )]
    pub store: Account<'info, LotteryStore>,

    #[account(
        mut,
        seeds = [crate::LOTTERY_SEED, store.key().as_ref(), lottery_id.to_le_bytes().as_ref()],
        bump = lottery.bump
    )]
    pub lottery: Box<Account<'info, Lottery>>,

    #[account(
        seeds = [
            crate::ROUND_SEED,
            lottery.key().as_ref(),
            lottery.current_round.to_le_bytes().as_ref()
        ],
        bump = current_round.bump
    )]
    pub current_round: Account<'info, LotteryRound>,

    #[account(
        init,
        payer = admin,
        space = 8 + LotteryRound::INIT_SPACE,
        seeds = [
            crate::ROUND_SEED,
            lottery.key().as_ref(),
            next_round_number.to_le_bytes().as_ref()
        ],
        bump
    )]
    pub next_round: Account<'info, LotteryRound>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
#[instruction(lottery_id: u64)]
pub struct ViewLottery<'info> {
    #[account(
        seeds = [crate::STORE_SEED],
        bump = store.bump
    )]
    pub store: Account<'info, LotteryStore>,

    #[account(
        seeds = [crate::LOTTERY_SEED, store.key().as_ref(), lottery_id.to_le_bytes().as_ref()],
        bump = lottery.bump
    )]
    pub lottery: Box<Account<'info, Lottery>>,

    #[account(address = lottery.queue)]
    pub queue: Box<Account<'info, TicketQueue>>,

    #[account(
        seeds = [
            crate::ROUND_SEED,
            lottery.key().as_ref(),
            lottery.current_round.to_le_bytes().as_ref()
        ],
        bump = round.bump
    )]
    pub round: Account<'info, LotteryRound>,
}
