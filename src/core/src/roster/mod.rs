pub mod error;
pub mod filter;
pub mod leadership;
pub mod roster;
pub mod settings;

pub use error::*;
pub use filter::*;
pub use leadership::TeamLeadership;
pub use roster::*;
pub use settings::*;
