pub mod client;
pub mod column;
pub mod record;
pub mod role;
pub mod view;
