pub mod date_filter;
pub mod loading_overlay;
pub mod navigation;
pub mod notification_host;

pub use date_filter::DateFilterSelector;
pub use loading_overlay::LoadingOverlay;
pub use navigation::{NavLink, NavigationOverlay, NavigationWatcher};
pub use notification_host::NotificationHost;
