mod client;
mod construction_object;
mod contract;
mod date;
mod fields;
mod kinds;
mod password;
mod record;
mod user;

pub use client::*;
pub use construction_object::*;
pub use contract::*;
pub use date::*;
pub use kinds::*;
pub use password::*;
pub use record::*;
pub use user::*;
