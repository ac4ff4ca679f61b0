//! Glue for user actions: loading overlay while the action runs, a
//! notification when it fails.

use std::future::Future;

use crate::shared::error::UiError;
use crate::shared::state::{LoadingStore, Notifications};

/// Run a user-triggered operation under the global overlay.
///
/// A failure is shown as a notification and still returned, so forms can
/// render field-level messages next to their inputs.
pub async fn run_with_feedback<T, F>(
    loading: LoadingStore,
    notifications: Notifications,
    message: Option<String>,
    operation: F,
) -> Result<T, UiError>
where
    F: Future<Output = Result<T, UiError>>,
{
    let result = loading.with_loading(message, operation).await;
    if let Err(err) = &result {
        notifications.notify_error(err);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::api::{ApiError, FieldError};

    #[tokio::test]
    async fn test_success_is_silent() {
        let loading = LoadingStore::new();
        let notifications = Notifications::new();

        let saved = run_with_feedback(loading, notifications, Some("Saving".into()), async {
            Ok::<_, UiError>("WH-01")
        })
        .await;

        assert_eq!(saved, Ok("WH-01"));
        assert!(!loading.is_loading());
        assert!(notifications.items().is_empty());
    }

    #[tokio::test]
    async fn test_failure_notifies_and_keeps_field_errors() {
        let loading = LoadingStore::new();
        let notifications = Notifications::new();

        let result: Result<(), UiError> = run_with_feedback(loading, notifications, None, async {
            Err(ApiError {
                message: Some("Order is invalid".into()),
                errors: vec![FieldError {
                    field: "delivery_date".into(),
                    message: "must not be in the past".into(),
                }],
            }
            .into())
        })
        .await;

        let err = result.unwrap_err();
        assert_eq!(err.field_message("delivery_date"), Some("must not be in the past"));
        assert!(!loading.is_loading());

        let items = notifications.items();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].message, "Order is invalid");
    }
}
