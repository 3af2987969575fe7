pub mod app;
pub mod game_over_overlay;
pub mod game_view;
pub mod hud_panel;
pub mod planner_view;
