pub mod account;
pub mod window;

pub use account::GoldAccount;
pub use window::{Bound, DataWindow};
