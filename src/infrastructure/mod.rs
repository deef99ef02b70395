pub mod database;
pub mod html;
pub mod repositories;
pub mod security;
pub mod storage;
pub mod time;
pub mod util;
