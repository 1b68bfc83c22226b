/// Outcome of a fetch that can legitimately find nothing.
///
/// `NotFound` is data, not an error: a missing user or an unreadable page
/// that the service answers normally.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Lookup<T> {
    Found(T),
    NotFound,
}

impl<T> Lookup<T> {
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Lookup<U> {
        match self {
            Self::Found(val) => Lookup::Found(f(val)),
            Self::NotFound => Lookup::NotFound,
        }
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Found(val) => Some(val),
            Self::NotFound => None,
        }
    }
}

impl<T> From<Option<T>> for Lookup<T> {
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(val) => Self::Found(val),
            None => Self::NotFound,
        }
    }
}
