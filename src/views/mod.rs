pub mod calculate;
pub mod components;
pub mod detail;
pub mod home;
pub mod layout;
pub mod manage;
pub mod reports;
pub mod roster;
pub mod status;
pub mod work_log;
