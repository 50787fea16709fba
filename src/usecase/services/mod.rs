pub mod client_service;
pub mod role_service;
