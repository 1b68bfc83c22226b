/// A fixed GraphQL operation and the endpoint serving it.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Operation {
    pub name: &'static str,
    /// Path relative to the base url.
    pub endpoint: &'static str,
    pub query: &'static str,
}

pub const RECENT_AC_SUBMISSIONS: Operation = Operation {
    name: "recentACSubmissions",
    endpoint: "graphql/noj-go/",
    query: r#"
query recentACSubmissions($userSlug: String!) {
  recentACSubmissions(userSlug: $userSlug) {
    submitTime
    question {
      title
      translatedTitle
      titleSlug
      questionFrontendId
    }
  }
}
"#,
};

pub const USER_QUESTION_PROGRESS: Operation = Operation {
    name: "userQuestionProgress",
    endpoint: "graphql",
    query: r#"
query userQuestionProgress($userSlug: String!) {
  userProfileUserQuestionSubmitStats(userSlug: $userSlug) {
    acSubmissionNum { difficulty count }
    totalSubmissionNum { difficulty count }
  }
  userProfileUserQuestionProgress(userSlug: $userSlug) {
    numAcceptedQuestions { difficulty count }
    numFailedQuestions { difficulty count }
    numUntouchedQuestions { difficulty count }
  }
}
"#,
};

pub const USER_PUBLIC_PROFILE: Operation = Operation {
    name: "userPublicProfile",
    endpoint: "graphql",
    query: r#"
query userPublicProfile($userSlug: String!) {
  userProfilePublicProfile(userSlug: $userSlug) {
    profile {
      userSlug
      realName
      userAvatar
    }
  }
}
"#,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_names_match_operations() {
        for op in &[
            RECENT_AC_SUBMISSIONS,
            USER_QUESTION_PROGRESS,
            USER_PUBLIC_PROFILE,
        ] {
            let head = format!("query {}($userSlug: String!)", op.name);
            assert!(op.query.trim().starts_with(&head), "{}", op.name);
        }
    }
}
