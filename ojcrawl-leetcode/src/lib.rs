#![warn(clippy::all)]

mod client;
mod extract;
mod graphql;
mod model;
mod page;
mod query;
mod token;

use ojcrawl_config as config;
use ojcrawl_util::{console, service, FetchError};

pub use client::{Crawl, LeetcodeClient};
pub use model::{
    AcSubmission, DifficultyCount, ProfileMeta, PublicProfile, QuestionProgress, SubmitCounts,
    SubmitStats,
};

pub type Result<T> = std::result::Result<T, FetchError>;
