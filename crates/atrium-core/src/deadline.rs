//! Per-request deadline enforcement for store interactions.

use std::future::Future;
use std::time::Duration;

use crate::error::{AtriumError, AtriumResult};

/// Run `fut` under `budget`, surfacing an overrun as a timeout fault for the
/// named operation.
///
/// The in-flight store call is dropped on overrun. What the store does with
/// a cancelled call is store-defined; an insert may still complete on the
/// store after the caller has given up.
pub async fn with_deadline<T, F>(
    budget: Duration,
    operation: &'static str,
    fut: F,
) -> AtriumResult<T>
where
    F: Future<Output = AtriumResult<T>>,
{
    match tokio::time::timeout(budget, fut).await {
        Ok(result) => result,
        Err(_) => Err(AtriumError::timeout(operation)),
    }
}
