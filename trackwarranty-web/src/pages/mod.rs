pub mod home;
pub mod invite;
