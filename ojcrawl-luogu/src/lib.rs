#![warn(clippy::all)]

mod client;
mod extract;
mod model;
mod page;

use ojcrawl_config as config;
use ojcrawl_util::{console, service, FetchError};

pub use client::LuoguClient;
pub use extract::extract_user_practice;
pub use model::{LentilleContext, PassedProblem, PracticeResult, PracticeUser};

pub type Result<T> = std::result::Result<T, FetchError>;
