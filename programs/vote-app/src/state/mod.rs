pub mod treasury;
pub mod voter;
pub mod proposal;

pub use treasury::*;
pub use voter::*;
pub use proposal::*;
