use anchor_lang::prelude::*;
use anchor_spl::token::{self, Transfer};

use crate::events::{TicketPurchased, TicketTransferred};
use crate::state::Ticket;
use crate::utils::now_ms;
use crate::{PurchaseTicket, TransferTicket};

pub fn purchase_ticket(
    ctx: Context<PurchaseTicket>,
    lottery_id: u64,
    numbers: Vec<u8>,
    special: u8,
    payment: u64,
) -> Result<()> {
    let now = now_ms()?;
    let lottery_key = ctx.accounts.lottery.key();

    let store = &ctx.accounts.store;
    store.ensure_open()?;
    store.ensure_listed(lottery_id, &lottery_key)?;

    let issued = ctx.accounts.lottery.purchase(
        &mut ctx.accounts.queue,
        &ctx.accounts.round,
        &numbers,
        special,
        payment,
        now,
    )?;

    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.buyer_token.to_account_info(),
                to: ctx.accounts.vault.to_account_info(),
                authority: ctx.accounts.buyer.to_account_info(),
            },
        ),
        payment,
    )?;

    let holder = ctx.accounts.buyer.key();
    ctx.accounts.ticket.set_inner(Ticket {
        ticket_id: issued.ticket_id,
        lottery_id,
        lottery: lottery_key,
        round: issued.round,
        picks: issued.picks.clone(),
        holder,
        issued_at_ms: now,
        bump: ctx.bumps.ticket,
    });

    emit!(TicketPurchased {
        lottery_id,
        round: issued.round,
        ticket_id: issued.ticket_id,
        holder,
        picks: issued.picks,
        prize_pool_after: ctx.accounts.lottery.prize_pool,
    });
    Ok(())
}

pub fn transfer_ticket(ctx: Context<TransferTicket>, new_holder: Pubkey) -> Result<()> {
    let ticket = &mut ctx.accounts.ticket;
    let from = ticket.holder;
    ticket.holder = new_holder;

    emit!(TicketTransferred {
        ticket_id: ticket.ticket_id,
        from,
        to: new_holder,
    });
    Ok(())
}
