pub mod guard;
pub mod inactivity;
pub mod session;

pub use guard::InactivityGuard;
