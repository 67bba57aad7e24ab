pub mod agent_card;
pub mod focus_trap;
pub mod kpi_card;
pub mod layout;
pub mod nav_bar;
pub mod skeleton;
pub mod status_badge;
pub mod task_row;
pub mod theme_toggle;
