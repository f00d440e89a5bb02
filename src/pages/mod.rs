pub mod corrections;
pub mod home;
