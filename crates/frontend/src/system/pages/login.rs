use leptos::prelude::*;

/// Login entry point.
///
/// Credentials are handled by the external auth provider; this page is
/// where sign-out (manual or after inactivity) lands.
#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Distribution Dashboard"</h1>
                <h2>"Sign in"</h2>
                <p>"Your session has ended. Sign in again to continue."</p>
                <a href="/" class="login-link">"Sign in"</a>
            </div>
        </div>
    }
}
