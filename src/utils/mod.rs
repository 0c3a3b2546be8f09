pub mod dates;
pub mod session;
pub mod view_state;
