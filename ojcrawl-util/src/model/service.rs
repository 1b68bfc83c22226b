use std::fmt;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

#[derive(
    Serialize,
    Deserialize,
    EnumString,
    EnumVariantNames,
    IntoStaticStr,
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum ServiceKind {
    Leetcode,
    Luogu,
}

impl Default for ServiceKind {
    fn default() -> Self {
        Self::Leetcode
    }
}

impl fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_kind_display() {
        assert_eq!(ServiceKind::default().to_string(), "leetcode");
        assert_eq!(ServiceKind::Luogu.to_string(), "luogu");
        assert_eq!("luogu".parse::<ServiceKind>().unwrap(), ServiceKind::Luogu);
    }
}
