pub mod client;
pub mod reply_generator;
