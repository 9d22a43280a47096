pub mod confirm;
pub mod home;
pub mod not_found;

pub use confirm::Confirm;
pub use home::Home;
pub use not_found::NotFound;
