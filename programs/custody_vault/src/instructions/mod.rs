pub mod user;
pub mod deposit;
pub mod admin;
pub mod sweep;

pub use user::*;
pub use deposit::*;
pub use admin::*;
pub use sweep::*;
