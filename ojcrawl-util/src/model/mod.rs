mod lookup;
mod service;
mod user;

pub use lookup::*;
pub use service::*;
pub use user::*;
