// Centralized Lottery Constants

// Capacities
// ==========

/// Maximum number of lotteries a single store can register.
/// Must match the `max_len` on `LotteryStore::lotteries`.
pub const MAX_LOTTERIES: usize = 32;

/// Upper bound on `normal_ball_count`.
/// Must match the `max_len` on `PickSet::numbers`.
pub const MAX_NORMAL_BALLS: usize = 8;

/// One tier per (normal matches, special hit) pair.
/// Must match the `max_len` on `Lottery::reward_table`.
pub const MAX_REWARD_TIERS: usize = 2 * (MAX_NORMAL_BALLS + 1);

/// Receipts that can wait for settlement at once.
/// Must match the `max_len` on `TicketQueue::slots`.
pub const QUEUE_CAPACITY: usize = 256;

/// Reserved fixed-prize balances awaiting redemption, across rounds.
/// Purchases stop while `winning_tickets + queued` would exceed it.
/// Must match the `max_len` on `Lottery::winning_tickets`.
pub const MAX_WINNING_TICKETS: usize = 256;

/// Jackpot winners of the current round awaiting redemption. Every queued
/// receipt may be a jackpot, so this is the queue capacity.
/// Must match the `max_len` on `Lottery::jackpot_winners`.
pub const MAX_JACKPOT_WINNERS: usize = QUEUE_CAPACITY;

// Beacon
// ======

/// Length of one beacon value (512 bits).
pub const BEACON_LEN: usize = 64;

/// Domain tag prepended to the beacon before the first derivation.
pub const BEACON_SEED_DOMAIN: &[u8] = b"beacon-lottery:seed_v1";

/// Domain tag of the message the beacon authority signs.
pub const BEACON_MSG_DOMAIN: &[u8] = b"beacon-lottery:beacon_v1";

// Versioning
// ==========

/// Initial version for account structures.
pub const INITIAL_VERSION: u16 = 1;

/// First lottery id handed out by a new store.
pub const INITIAL_LOTTERY_ID: u64 = 0;

/// First ticket id handed out by a new lottery.
pub const INITIAL_TICKET_ID: u64 = 1;
