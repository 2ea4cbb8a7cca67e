use anchor_lang::prelude::*;

#[error_code]
pub enum LotteryError {
    #[msg("Unauthorized")]
    Unauthorized,
    #[msg("Lottery store is closed")]
    StoreClosed,
    #[msg("Lottery store is full")]
    StoreFull,
    #[msg("Lottery not found in store")]
    LotteryNotFound,
    #[msg("Lottery already registered")]
    LotteryAlreadyRegistered,

    // -----------------
    // Timing
    // -----------------
    #[msg("Lottery is not accepting tickets")]
    LotteryNotInProgress,
    #[msg("Round is not in the required settlement state")]
    LotteryNotSettled,
    #[msg("Drawing time must be in the future")]
    InvalidDrawingTime,

    // -----------------
    // Validation
    // -----------------
    #[msg("Invalid number selection")]
    InvalidNumberSelection,
    #[msg("Payment does not match ticket cost")]
    InvalidPurchase,
    #[msg("Invalid ball configuration")]
    InvalidBallConfig,
    #[msg("Invalid reward table")]
    InvalidRewardTable,
    #[msg("Ticket cost must be positive")]
    InvalidTicketCost,

    // -----------------
    // Identity
    // -----------------
    #[msg("Wrong round")]
    WrongRound,
    #[msg("Round account does not belong to this lottery round")]
    RoundAccountMismatch,
    #[msg("Ticket belongs to another lottery")]
    TicketLotteryMismatch,
    #[msg("Signer is not the ticket holder")]
    NotTicketHolder,
    #[msg("Vault does not belong to this lottery")]
    VaultMismatch,

    // -----------------
    // State
    // -----------------
    #[msg("Jackpot winners still have to redeem")]
    JackpotHit,
    #[msg("Prize pool below minimum jackpot")]
    JackpotBelowMinimum,
    #[msg("Prize pool cannot cover payout")]
    InsufficientPrizePool,
    #[msg("Lottery still has outstanding claims")]
    OutstandingClaims,

    // -----------------
    // Capacity
    // -----------------
    #[msg("Ticket queue is full")]
    QueueFull,
    #[msg("Ticket queue is empty")]
    QueueEmpty,
    #[msg("Winning ticket table is full")]
    WinningTicketsFull,
    #[msg("Jackpot winner set is full")]
    JackpotWinnersFull,

    // -----------------
    // Beacon
    // -----------------
    #[msg("Beacon authority not set")]
    BeaconAuthorityNotSet,
    #[msg("Beacon does not reproduce the recorded draw")]
    BeaconMismatch,
    #[msg("Missing or invalid ed25519 verify instruction")]
    MissingOrInvalidEd25519Ix,
    #[msg("Ed25519 pubkey mismatch")]
    Ed25519PubkeyMismatch,
    #[msg("Ed25519 message mismatch")]
    Ed25519MessageMismatch,

    #[msg("Math overflow")]
    MathOverflow,
}
