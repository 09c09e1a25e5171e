pub mod app;
pub mod board_view;
pub mod game_over_overlay;
pub mod score_panel;
pub mod settings_modal;
pub mod tile;
