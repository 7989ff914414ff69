pub mod builder;
pub mod player;
pub mod role;

pub use builder::*;
pub use player::*;
pub use role::*;
