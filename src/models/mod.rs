pub mod day_view;
pub mod event;
pub mod occurrence;
pub mod subscription;
pub mod weekday;
pub mod window;
