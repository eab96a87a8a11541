pub mod activation;
pub mod backup;
pub mod day_view;
pub mod resolver;
