pub mod filter_state;
pub mod loading_state;
pub mod navigation_state;
pub mod notifications;

pub use filter_state::{use_filter_state, FilterState};
pub use loading_state::{use_loading_state, LoadingStore};
pub use navigation_state::{use_navigation_loading, NavigationLoading};
pub use notifications::{use_notifications, NotificationLevel, Notifications};
