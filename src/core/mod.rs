pub mod create;
pub mod dashboard;
pub mod editor;
pub mod log;
pub mod repository;
pub mod seed;
pub mod session;
pub mod shift;
pub mod view;
