pub mod filter_bar;
pub mod like_button;
pub mod project_grid;
pub mod project_modal;
