pub mod bunker;
pub mod record;
pub mod role;
pub mod session;
pub mod shift;
pub mod tanker;
pub mod user;
