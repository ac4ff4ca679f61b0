//! TopHeader component - application top navigation bar.
//!
//! Contains:
//! - Application title
//! - Section links
//! - Period filter

use crate::shared::components::{DateFilterSelector, NavLink};
use crate::system::auth::session;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    view! {
        <style>
            ".top-header {
                display: flex;
                align-items: center;
                gap: 24px;
                padding: 8px 16px;
                border-bottom: 1px solid var(--colorNeutralStroke2, #e0e0e0);
                background: var(--colorNeutralBackground1, #fff);
            }
            .top-header__title { font-weight: 600; font-size: 1rem; }
            .top-header__nav { display: flex; gap: 12px; }
            .nav-link { text-decoration: none; color: var(--colorNeutralForeground2, #424242); }
            .nav-link--active { color: var(--colorBrandForeground1, #3b82f6); font-weight: 500; }
            .top-header__actions { margin-left: auto; }"
        </style>
        <div class="top-header">
            <div class="top-header__title">"Distribution Dashboard"</div>
            <nav class="top-header__nav">
                <NavLink href="/">"Overview"</NavLink>
                <NavLink href="/reports">"Reports"</NavLink>
            </nav>
            <DateFilterSelector />
            <div class="top-header__actions">
                <Button
                    size=ButtonSize::Small
                    appearance=ButtonAppearance::Subtle
                    on_click=move |_| session::sign_out_to_login()
                >
                    "Sign out"
                </Button>
            </div>
        </div>
    }
}
