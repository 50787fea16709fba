pub mod client_form;
pub mod data_grid;
