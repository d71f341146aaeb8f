//! Forgotten futures on a live runtime.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use cs_tasks::ForgetExt;

#[derive(Debug, PartialEq)]
enum JobError {
    Cancelled,
    Failed(&'static str),
}

impl std::fmt::Display for JobError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JobError::Cancelled => f.write_str("cancelled"),
            JobError::Failed(reason) => write!(f, "failed: {reason}"),
        }
    }
}

#[tokio::test]
async fn predicate_sees_the_error() {
    let seen = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&seen);
    let handle = async { Err::<(), _>(JobError::Cancelled) }
        .forget_accepting(move |e| {
            counter.fetch_add(1, Ordering::SeqCst);
            *e == JobError::Cancelled
        })
        .unwrap();
    handle.await.unwrap();
    assert_eq!(seen.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn predicate_is_not_called_on_success() {
    let seen = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&seen);
    let handle = async { Ok::<u32, JobError>(7) }
        .forget_accepting(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
            true
        })
        .unwrap();
    handle.await.unwrap();
    assert_eq!(seen.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn unaccepted_errors_do_not_panic_the_task() {
    let handle = async {
        tokio::time::sleep(Duration::from_millis(1)).await;
        Err::<(), _>(JobError::Failed("disk full"))
    }
    .forget()
    .unwrap();
    assert!(handle.await.is_ok());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn dropped_handle_keeps_running() {
    let (tx, rx) = tokio::sync::oneshot::channel();
    drop(
        async move {
            tx.send("done").map_err(|_| JobError::Cancelled)?;
            Ok::<(), JobError>(())
        }
        .forget()
        .unwrap(),
    );
    assert_eq!(rx.await, Ok("done"));
}
