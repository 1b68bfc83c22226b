mod profile;

pub use profile::{profile_exists, ProfilePage, ProfilePageBuilder};
