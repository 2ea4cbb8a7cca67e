use anchor_lang::prelude::*;

use crate::constants::BEACON_LEN;
use crate::errors::LotteryError;
use crate::state::LotteryStore;
use crate::utils::{expected_beacon_msg, verify_preceding_ed25519_ix};
use crate::UpdateStore;

pub fn set_beacon_authority(ctx: Context<UpdateStore>, beacon_authority: Pubkey) -> Result<()> {
    let store = &mut ctx.accounts.store;
    require_keys_eq!(store.admin, ctx.accounts.admin.key(), LotteryError::Unauthorized);

    store.beacon_authority = beacon_authority;
    msg!("Beacon authority set to {}", beacon_authority);
    Ok(())
}

/// Accepts `beacon` for `(lottery_id, round)` only when the preceding ed25519
/// instruction carries the store's beacon authority signing the canonical
/// beacon message.
pub fn verify_beacon(
    store: &LotteryStore,
    instructions_sysvar: &AccountInfo,
    program_id: &Pubkey,
    lottery_id: u64,
    round: u64,
    beacon: &[u8; BEACON_LEN],
) -> Result<()> {
    require!(
        store.beacon_authority != Pubkey::default(),
        LotteryError::BeaconAuthorityNotSet
    );

    let expected = expected_beacon_msg(program_id, lottery_id, round, beacon);
    verify_preceding_ed25519_ix(instructions_sysvar, &store.beacon_authority, &expected)
}
