use std::{future::Future, time::Duration};

use crate::server::error::AppError;

/// Runs a store call with an upper bound on how long it may take.
///
/// # Arguments
/// - `limit` - Maximum time to wait for the call
/// - `call` - The store future
///
/// # Returns
/// - `Ok(T)` - Store call finished in time and succeeded
/// - `Err(AppError::StoreUnavailable)` - Store call exceeded `limit`
/// - `Err(AppError)` - Store call failed
pub async fn with_store_timeout<T, E, F>(limit: Duration, call: F) -> Result<T, AppError>
where
    F: Future<Output = Result<T, E>>,
    AppError: From<E>,
{
    match tokio::time::timeout(limit, call).await {
        Ok(result) => Ok(result?),
        Err(_) => Err(AppError::StoreUnavailable(format!(
            "store call exceeded {}ms",
            limit.as_millis()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::DbErr;

    #[tokio::test]
    async fn passes_through_fast_calls() {
        let result =
            with_store_timeout(Duration::from_secs(1), async { Ok::<_, DbErr>(7) }).await;
        assert_eq!(result.unwrap(), 7);
    }

    #[tokio::test]
    async fn maps_store_errors() {
        let result = with_store_timeout(Duration::from_secs(1), async {
            Err::<u8, _>(DbErr::Custom("down".to_string()))
        })
        .await;
        assert!(matches!(result, Err(AppError::DbErr(_))));
    }

    #[tokio::test]
    async fn maps_elapsed_to_store_unavailable() {
        let result = with_store_timeout(Duration::from_millis(10), async {
            tokio::time::sleep(Duration::from_millis(200)).await;
            Ok::<_, DbErr>(())
        })
        .await;
        assert!(matches!(result, Err(AppError::StoreUnavailable(_))));
    }
}
