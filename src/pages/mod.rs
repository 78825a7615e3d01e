pub mod home;
pub mod library;
