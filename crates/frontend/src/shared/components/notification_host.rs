use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::config::AppConfig;
use crate::shared::state::notifications::Notification;
use crate::shared::state::{use_notifications, NotificationLevel};

/// Stack of dismissible notifications. Mount once at the app root.
#[component]
pub fn NotificationHost() -> impl IntoView {
    let notifications = use_notifications();
    let auto_dismiss_ms = use_context::<AppConfig>()
        .unwrap_or_default()
        .notifications
        .auto_dismiss_ms;

    view! {
        <style>
            ".notification-host {
                position: fixed;
                top: 12px;
                right: 12px;
                z-index: 1200;
                display: flex;
                flex-direction: column;
                gap: 8px;
                max-width: 360px;
            }
            .notification {
                display: flex;
                align-items: flex-start;
                gap: 8px;
                padding: 10px 12px;
                border-radius: var(--borderRadiusMedium, 4px);
                box-shadow: 0 2px 8px rgba(0, 0, 0, 0.15);
                background: var(--colorNeutralBackground1, #fff);
                border-left: 4px solid var(--colorBrandStroke1, #3b82f6);
            }
            .notification--success { border-left-color: #16a34a; }
            .notification--error { border-left-color: #dc2626; }
            .notification__close {
                margin-left: auto;
                background: none;
                border: none;
                cursor: pointer;
                color: #666;
            }"
        </style>
        <div class="notification-host">
            <For
                each=move || notifications.items()
                key=|notification| notification.id
                children=move |notification| view! {
                    <NotificationCard notification=notification auto_dismiss_ms=auto_dismiss_ms />
                }
            />
        </div>
    }
}

#[component]
fn NotificationCard(notification: Notification, auto_dismiss_ms: u64) -> impl IntoView {
    let notifications = use_notifications();
    let id = notification.id;

    // 0 keeps the notification until it is closed by hand
    if auto_dismiss_ms > 0 {
        let delay = u32::try_from(auto_dismiss_ms).unwrap_or(u32::MAX);
        spawn_local(async move {
            TimeoutFuture::new(delay).await;
            notifications.dismiss(id);
        });
    }

    let class = match notification.level {
        NotificationLevel::Info => "notification",
        NotificationLevel::Success => "notification notification--success",
        NotificationLevel::Error => "notification notification--error",
    };

    view! {
        <div class=class role="alert">
            <span>{notification.message}</span>
            <button
                class="notification__close"
                title="Dismiss"
                on:click=move |_| notifications.dismiss(id)
            >
                "×"
            </button>
        </div>
    }
}
