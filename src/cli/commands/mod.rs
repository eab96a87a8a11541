pub mod activate;
pub mod add;
pub mod backup;
pub mod config;
pub mod day;
pub mod db;
pub mod init;
pub mod log;
pub mod subs;
pub mod window;
