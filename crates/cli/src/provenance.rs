use serde_json::{json, Value};
use std::panic::Location;
use std::process::Command;

/// Metadata for a provenance block.
pub struct Payload {
    pub params: Value,
}

impl Payload {
    pub fn new(params: Value) -> Self {
        Self { params }
    }

    /// JSON block with the git commit, callsite, library constants and params.
    #[track_caller]
    pub fn document(&self) -> Value {
        let callsite = Location::caller();
        json!({
            "code_rev": current_git_rev(),
            "version": tricmp::VERSION,
            "callsite": {
                "file": callsite.file(),
                "line": callsite.line()
            },
            "constants": {
                "epsilon": tricmp::cfg::EPSILON,
                "coord_range": tricmp::cfg::COORD_RANGE,
                "default_tests": tricmp::cfg::DEFAULT_TESTS,
            },
            "params": self.params,
        })
    }
}

pub fn current_git_rev() -> String {
    if let Some(from_env) = option_env!("GIT_COMMIT") {
        if !from_env.is_empty() {
            return from_env.to_string();
        }
    }
    Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .and_then(|output| {
            if output.status.success() {
                String::from_utf8(output.stdout)
                    .ok()
                    .map(|s| s.trim().to_string())
            } else {
                None
            }
        })
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_carries_params_and_constants() {
        let doc = Payload::new(json!({"tests": 10, "seed": 3})).document();
        assert_eq!(doc["params"]["tests"], 10);
        assert_eq!(doc["params"]["seed"], 3);
        assert_eq!(doc["constants"]["epsilon"], 1e-6);
        assert_eq!(doc["constants"]["coord_range"], 1000);
        assert!(doc["code_rev"].as_str().is_some_and(|s| !s.is_empty()));
        assert!(doc["callsite"]["file"]
            .as_str()
            .is_some_and(|f| f.ends_with("provenance.rs")));
    }
}
