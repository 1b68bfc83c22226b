use serde_json::Value;

use crate::model::{LentilleContext, PassedProblem, PracticeResult, PracticeUser};

fn str_field(obj: Option<&Value>, key: &str) -> String {
    obj.and_then(|obj| obj.get(key))
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_owned()
}

fn uid_field(obj: Option<&Value>) -> Option<u64> {
    match obj?.get("uid")? {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
}

/// Whether the context carries nothing at all: `null`, `{}` or `[]`.
fn is_blank(val: &Value) -> bool {
    match val {
        Value::Null => true,
        Value::Object(obj) => obj.is_empty(),
        Value::Array(arr) => arr.is_empty(),
        _ => false,
    }
}

/// Projects a practice context onto a [`PracticeResult`]. Pure.
///
/// A blank context has no user. Any other context yields a user record, with
/// empty fields where `data.user` has nothing to offer.
pub fn extract_user_practice(ctx: &LentilleContext) -> PracticeResult {
    if is_blank(&ctx.0) {
        return PracticeResult::empty();
    }
    let data = ctx.0.get("data");
    let user = data
        .and_then(|data| data.get("user"))
        .filter(|user| user.is_object());
    let user = PracticeUser {
        uid: uid_field(user),
        name: str_field(user, "name"),
        avatar: str_field(user, "avatar"),
    };
    let passed = data
        .and_then(|data| data.get("passed"))
        .and_then(Value::as_array)
        .map(|passed| {
            passed
                .iter()
                .map(|problem| PassedProblem {
                    pid: str_field(Some(problem), "pid"),
                    title: str_field(Some(problem), "title"),
                    difficulty: problem.get("difficulty").and_then(Value::as_i64),
                    kind: str_field(Some(problem), "type"),
                })
                .collect()
        })
        .unwrap_or_default();
    PracticeResult::new(Some(user), passed)
}
