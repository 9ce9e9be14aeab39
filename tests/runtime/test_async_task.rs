//! Tests for async task runtime primitives.

use gitproof_metrics::runtime::AsyncTask;

#[tokio::test]
async fn test_async_task_spawn_async() {
    let task = AsyncTask::spawn_async(async { 42 });
    let result = task.await.unwrap();
    assert_eq!(result, 42);
}

#[tokio::test]
async fn test_async_task_ready() {
    let task = AsyncTask::ready("done");
    assert_eq!(task.await.unwrap(), "done");
}

#[tokio::test]
async fn test_panicking_task_reports_receive_error() {
    let task: AsyncTask<u32> = AsyncTask::spawn_async(async { panic!("boom") });
    assert!(task.await.is_err());

    // The runtime keeps serving other tasks
    let sibling = AsyncTask::spawn_async(async { 7 });
    assert_eq!(sibling.await.unwrap(), 7);
}
