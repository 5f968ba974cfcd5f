pub mod initialize_treasury;
pub mod buy_tokens;
pub mod register_voter;
pub mod register_proposal;
pub mod cast_vote;
pub mod pick_winner;

pub use initialize_treasury::*;
pub use buy_tokens::*;
pub use register_voter::*;
pub use register_proposal::*;
pub use cast_vote::*;
pub use pick_winner::*;
