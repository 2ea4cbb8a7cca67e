use anchor_lang::prelude::*;
use anchor_lang::solana_program::instruction::Instruction;
use anchor_lang::solana_program::sysvar::instructions::{
    load_current_index_checked, load_instruction_at_checked,
};

use crate::{
    constants::{BEACON_LEN, BEACON_MSG_DOMAIN},
    errors::LotteryError,
};

// Ed25519SigVerify111111111111111111111111111
pub fn ed25519_program_id() -> Pubkey {
    Pubkey::new_from_array([
        3, 125, 70, 214, 124, 147, 251, 190, 18, 249, 66, 143, 131, 141, 64, 255,
        5, 112, 116, 73, 39, 244, 138, 100, 252, 202, 112, 68, 128, 0, 0, 0,
    ])
}

// -----------------
// Seeds
// -----------------
pub const STORE_SEED: &[u8] = b"store_v1";
pub const LOTTERY_SEED: &[u8] = b"lottery_v1";
pub const QUEUE_SEED: &[u8] = b"queue_v1";
pub const ROUND_SEED: &[u8] = b"round_v1";
pub const TICKET_SEED: &[u8] = b"ticket_v1";
pub const PRIZE_VAULT_SEED: &[u8] = b"prize_vault_v1";

/// Cluster time in milliseconds. Pre-epoch clocks read as 0.
pub fn now_ms() -> Result<u64> {
    let ts = Clock::get()?.unix_timestamp;
    Ok(u64::try_from(ts).unwrap_or(0).saturating_mul(1_000))
}

// -------------------------
// Beacon message + ed25519 parsing
// -------------------------
pub fn expected_beacon_msg(
    program_id: &Pubkey,
    lottery_id: u64,
    round: u64,
    beacon: &[u8; BEACON_LEN],
) -> Vec<u8> {
    let mut out = Vec::with_capacity(BEACON_MSG_DOMAIN.len() + 32 + 8 + 8 + BEACON_LEN);
    out.extend_from_slice(BEACON_MSG_DOMAIN);
    out.extend_from_slice(program_id.as_ref());
    out.extend_from_slice(&lottery_id.to_le_bytes());
    out.extend_from_slice(&round.to_le_bytes());
    out.extend_from_slice(beacon);
    out
}

pub fn parse_ed25519_ix_pubkey_and_msg(ix: &Instruction) -> Result<(Pubkey, Vec<u8>)> {
    require_keys_eq!(
        ix.program_id,
        ed25519_program_id(),
        LotteryError::MissingOrInvalidEd25519Ix
    );

    let data = &ix.data;
    require!(data.len() >= 16, LotteryError::MissingOrInvalidEd25519Ix);
    require!(data[0] == 1, LotteryError::MissingOrInvalidEd25519Ix);

    // only self-contained offsets: every instruction index is u16::MAX
    let read = |at: usize| u16::from_le_bytes([data[at], data[at + 1]]);
    for at in [4, 8, 14] {
        require!(read(at) == u16::MAX, LotteryError::MissingOrInvalidEd25519Ix);
    }

    let pk_off = read(6) as usize;
    let msg_off = read(10) as usize;
    let msg_sz = read(12) as usize;

    require!(pk_off + 32 <= data.len(), LotteryError::MissingOrInvalidEd25519Ix);
    require!(msg_off + msg_sz <= data.len(), LotteryError::MissingOrInvalidEd25519Ix);

    let pk_bytes: [u8; 32] = data[pk_off..pk_off + 32]
        .try_into()
        .map_err(|_| error!(LotteryError::MissingOrInvalidEd25519Ix))?;

    Ok((
        Pubkey::new_from_array(pk_bytes),
        data[msg_off..msg_off + msg_sz].to_vec(),
    ))
}

pub fn assert_ed25519_ix_matches(
    ix: &Instruction,
    expected_pubkey: &Pubkey,
    expected_msg: &[u8],
) -> Result<()> {
    let (pk, msg) = parse_ed25519_ix_pubkey_and_msg(ix)?;

    require_keys_eq!(pk, *expected_pubkey, LotteryError::Ed25519PubkeyMismatch);
    require!(msg.as_slice() == expected_msg, LotteryError::Ed25519MessageMismatch);

    Ok(())
}

/// Checks that the instruction right before the current one is an ed25519
/// verification of `expected_msg` by `authority`.
///
/// Tx layout must be: [ ed25519_verify, settle_round ]
pub fn verify_preceding_ed25519_ix(
    instructions_sysvar: &AccountInfo,
    authority: &Pubkey,
    expected_msg: &[u8],
) -> Result<()> {
    let current_ix = load_current_index_checked(instructions_sysvar)? as usize;
    require!(current_ix >= 1, LotteryError::MissingOrInvalidEd25519Ix);

    let ed_ix = load_instruction_at_checked(current_ix - 1, instructions_sysvar)
        .map_err(|_| error!(LotteryError::MissingOrInvalidEd25519Ix))?;

    assert_ed25519_ix_matches(&ed_ix, authority, expected_msg)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Ed25519 instruction data with the native layout:
    /// `[num_sigs, padding, offsets(14), signature(64), pubkey(32), msg]`.
    /// The signature stays zeroed; only the parser is exercised here.
    fn make_ed25519_ix(pubkey: [u8; 32], msg: &[u8], indices: [u16; 3]) -> Instruction {
        let sig_off: u16 = 16;
        let pk_off: u16 = sig_off + 64;
        let msg_off: u16 = pk_off + 32;

        let mut data = vec![0u8; msg_off as usize + msg.len()];
        data[0] = 1;

        let fields = [
            sig_off,
            indices[0],
            pk_off,
            indices[1],
            msg_off,
            msg.len() as u16,
            indices[2],
        ];
        for (i, v) in fields.iter().enumerate() {
            data[2 + 2 * i..4 + 2 * i].copy_from_slice(&v.to_le_bytes());
        }

        data[pk_off as usize..pk_off as usize + 32].copy_from_slice(&pubkey);
        data[msg_off as usize..].copy_from_slice(msg);

        Instruction {
            program_id: ed25519_program_id(),
            accounts: vec![],
            data,
        }
    }

    const SELF: [u16; 3] = [u16::MAX; 3];

    fn beacon() -> [u8; BEACON_LEN] {
        [7u8; BEACON_LEN]
    }

    #[test]
    fn beacon_msg_binds_lottery_and_round() {
        let program = Pubkey::new_unique();
        let msg = expected_beacon_msg(&program, 3, 900, &beacon());

        assert!(msg.starts_with(BEACON_MSG_DOMAIN));
        assert_eq!(msg.len(), BEACON_MSG_DOMAIN.len() + 32 + 8 + 8 + BEACON_LEN);
        assert_ne!(msg, expected_beacon_msg(&program, 4, 900, &beacon()));
        assert_ne!(msg, expected_beacon_msg(&program, 3, 901, &beacon()));
        assert_ne!(msg, expected_beacon_msg(&Pubkey::new_unique(), 3, 900, &beacon()));
    }

    #[test]
    fn parse_accepts_self_contained_indices() {
        let authority = Pubkey::new_unique();
        let msg = expected_beacon_msg(&crate::ID, 0, 1, &beacon());
        let ix = make_ed25519_ix(authority.to_bytes(), &msg, SELF);

        let (pk, parsed) = parse_ed25519_ix_pubkey_and_msg(&ix).unwrap();
        assert_eq!(pk, authority);
        assert_eq!(parsed, msg);
        assert_ed25519_ix_matches(&ix, &authority, &msg).unwrap();
    }

    #[test]
    fn parse_rejects_external_indices() {
        let authority = Pubkey::new_unique();
        let msg = b"beacon".to_vec();

        for indices in [[0, u16::MAX, u16::MAX], [u16::MAX, 2, u16::MAX], [u16::MAX, u16::MAX, 7]] {
            let ix = make_ed25519_ix(authority.to_bytes(), &msg, indices);
            assert_eq!(
                parse_ed25519_ix_pubkey_and_msg(&ix).unwrap_err(),
                LotteryError::MissingOrInvalidEd25519Ix.into()
            );
        }
    }

    #[test]
    fn parse_rejects_other_programs_and_short_data() {
        let mut ix = make_ed25519_ix(Pubkey::new_unique().to_bytes(), b"m", SELF);
        ix.program_id = Pubkey::new_unique();
        assert!(parse_ed25519_ix_pubkey_and_msg(&ix).is_err());

        let mut short = make_ed25519_ix(Pubkey::new_unique().to_bytes(), b"m", SELF);
        short.data.truncate(10);
        assert!(parse_ed25519_ix_pubkey_and_msg(&short).is_err());
    }

    #[test]
    fn matches_rejects_wrong_pubkey_or_msg() {
        let authority = Pubkey::new_unique();
        let msg = expected_beacon_msg(&crate::ID, 0, 1, &beacon());
        let ix = make_ed25519_ix(authority.to_bytes(), &msg, SELF);

        assert_eq!(
            assert_ed25519_ix_matches(&ix, &Pubkey::new_unique(), &msg).unwrap_err(),
            LotteryError::Ed25519PubkeyMismatch.into()
        );

        let replayed = expected_beacon_msg(&crate::ID, 0, 2, &beacon());
        assert_eq!(
            assert_ed25519_ix_matches(&ix, &authority, &replayed).unwrap_err(),
            LotteryError::Ed25519MessageMismatch.into()
        );
    }
}
