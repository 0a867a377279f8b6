//! Polling for background work spawned on the tokio runtime.
//!
//! The UI never awaits. Each frame it checks whether a spawned task has
//! finished and, if so, takes its output.

use futures::FutureExt;
use tokio::task::{JoinError, JoinHandle};

/// Outcome of polling an optional task handle
pub enum PollResult<T> {
    /// Nothing was spawned, or the result was already taken
    NoTask,
    /// Still running
    Pending,
    /// Finished; the join error case means the task panicked or was aborted
    Complete(Result<T, JoinError>),
}

/// Take the task's output if it has finished.
///
/// The handle is removed from `task` once complete, so a second poll
/// returns `NoTask`.
pub fn poll_task<T>(task: &mut Option<JoinHandle<T>>) -> PollResult<T> {
    let Some(handle) = task.as_mut() else {
        return PollResult::NoTask;
    };
    if !handle.is_finished() {
        return PollResult::Pending;
    }

    match handle.now_or_never() {
        Some(result) => {
            *task = None;
            PollResult::Complete(result)
        }
        None => {
            tracing::warn!("Task not ready despite is_finished()");
            PollResult::Pending
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_poll_lifecycle() {
        let mut task: Option<JoinHandle<u32>> = None;
        assert!(matches!(poll_task(&mut task), PollResult::NoTask));

        let (tx, rx) = tokio::sync::oneshot::channel::<u32>();
        task = Some(tokio::spawn(async move { rx.await.unwrap_or(0) }));
        assert!(matches!(poll_task(&mut task), PollResult::Pending));

        tx.send(7).unwrap();
        while !task.as_ref().unwrap().is_finished() {
            tokio::task::yield_now().await;
        }

        assert!(matches!(poll_task(&mut task), PollResult::Complete(Ok(7))));
        assert!(task.is_none());
        assert!(matches!(poll_task(&mut task), PollResult::NoTask));
    }
}
