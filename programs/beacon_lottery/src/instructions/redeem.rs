use anchor_lang::prelude::*;

use crate::events::TicketRedeemed;
use crate::instructions::transfer_from_vault;
use crate::ledger::RedemptionKind;
use crate::RedeemTicket;

/// Pays out whatever the ticket won (possibly nothing) and closes it.
pub fn redeem_ticket(ctx: Context<RedeemTicket>, lottery_id: u64) -> Result<u64> {
    ctx.accounts
        .store
        .ensure_listed(lottery_id, &ctx.accounts.lottery.key())?;

    let redemption = ctx
        .accounts
        .lottery
        .redeem(&ctx.accounts.ticket, &ctx.accounts.round)?;

    transfer_from_vault(
        &ctx.accounts.token_program,
        &ctx.accounts.vault,
        &ctx.accounts.holder_token,
        &ctx.accounts.lottery,
        redemption.amount,
    )?;

    let ticket = &ctx.accounts.ticket;
    emit!(TicketRedeemed {
        lottery_id,
        round: ticket.round,
        ticket_id: ticket.ticket_id,
        holder: ticket.holder,
        jackpot: redemption.kind == RedemptionKind::Jackpot,
        amount: redemption.amount,
    });
    Ok(redemption.amount)
}
