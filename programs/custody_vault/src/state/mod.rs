pub mod user_deposit;
pub mod admin_state;
pub mod treasury_state;

pub use user_deposit::*;
pub use admin_state::*;
pub use treasury_state::*;
