mod practice;

pub use practice::{PracticePage, PracticePageBuilder};
