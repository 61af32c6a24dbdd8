//! Two-step operation helper.
//!
//! Multi-step writes against two stores cannot be wrapped in one
//! transaction. `with_compensation` structures the pattern "side effect
//! already happened, now run the follow-up; undo the side effect if the
//! follow-up fails" so the compensating action cannot be forgotten at a call
//! site. The undo runs best-effort: its own failure must be handled (logged)
//! inside the closure, and the original error is always the one surfaced.

use std::future::Future;

/// Run `action`; if it fails, run `undo` and return the original error.
pub async fn with_compensation<T, E, A, U, UFut>(action: A, undo: U) -> Result<T, E>
where
    A: Future<Output = Result<T, E>>,
    U: FnOnce() -> UFut,
    UFut: Future<Output = ()>,
{
    match action.await {
        Ok(value) => Ok(value),
        Err(err) => {
            undo().await;
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};

    #[tokio::test]
    async fn test_undo_does_not_run_on_success() {
        let undone = AtomicBool::new(false);
        let result: Result<i32, ()> = with_compensation(async { Ok(7) }, || async {
            undone.store(true, Ordering::SeqCst);
        })
        .await;
        assert_eq!(result, Ok(7));
        assert!(!undone.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn test_undo_runs_on_failure_and_error_is_preserved() {
        let undone = AtomicBool::new(false);
        let result: Result<i32, &str> =
            with_compensation(async { Err("insert failed") }, || async {
                undone.store(true, Ordering::SeqCst);
            })
            .await;
        assert_eq!(result, Err("insert failed"));
        assert!(undone.load(Ordering::SeqCst));
    }
}
