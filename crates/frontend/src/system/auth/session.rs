use crate::shared::local_storage;

pub const LOGIN_ROUTE: &str = "/login";

const ACCESS_TOKEN_KEY: &str = "auth_access_token";
const REFRESH_TOKEN_KEY: &str = "auth_refresh_token";

/// Drop the stored session and leave for the login entry point
pub fn sign_out_to_login() {
    log::info!("Signing out, redirecting to {}", LOGIN_ROUTE);
    local_storage::remove_items(&[ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY]);

    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(err) = window.location().set_href(LOGIN_ROUTE) {
        log::warn!("Redirect to {} failed: {:?}", LOGIN_ROUTE, err);
    }
}
