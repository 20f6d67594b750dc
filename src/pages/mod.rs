//! Page components for Daily Comfort.

mod home;
mod landing;
mod login;

pub use home::Home;
pub use landing::Landing;
pub use login::Login;
