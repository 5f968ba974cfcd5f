use anchor_lang::prelude::*;

#[error_code]
pub enum VoteError {
    // Lifecycle errors
    #[msg("Treasury is already initialized")]
    AlreadyInitialized,

    #[msg("Voter is already registered")]
    AlreadyRegistered,

    #[msg("Voter has already cast a vote")]
    AlreadyVoted,

    // Deadline errors
    #[msg("Voting deadline has passed")]
    DeadlinePassed,

    #[msg("Voting is still active for this proposal")]
    VotingStillActive,

    #[msg("Deadline must be in the future")]
    InvalidDeadline,

    // Balance errors
    #[msg("Insufficient SOL to buy tokens")]
    InsufficientFunds,

    #[msg("Insufficient tokens to stake")]
    InsufficientStake,

    #[msg("Amount must be greater than zero")]
    InvalidAmount,

    // Lookup and authorization errors
    #[msg("Referenced account does not exist")]
    NotFound,

    #[msg("Only the treasury authority can perform this action")]
    Unauthorized,

    // Account validation errors
    #[msg("Invalid token mint")]
    InvalidMint,

    #[msg("Invalid treasury token account")]
    InvalidTreasuryAccount,

    #[msg("Proposal info must be between 1 and 200 bytes")]
    InvalidProposalInfo,

    // Arithmetic errors
    #[msg("Proposal counter overflow")]
    ProposalCounterOverflow,

    #[msg("Proposal votes overflow")]
    ProposalVotesOverflow,
}
