mod action_bar;
mod badge;
mod chart;
mod loading;
mod nav;
mod stat_card;
mod status_panel;
mod toast;

pub use action_bar::ActionBar;
pub use badge::ConnectionBadge;
pub use chart::HistoryChart;
pub use loading::Loading;
pub use nav::Nav;
pub use stat_card::StatCard;
pub use status_panel::StatusPanel;
pub use toast::{ToastContainer, use_toasts};
