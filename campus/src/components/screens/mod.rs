pub mod dashboard;
pub mod fallback;
pub mod screen_panel;
pub mod screen_view;

pub use dashboard::DashboardScreen;
pub use fallback::FallbackScreen;
pub use screen_panel::ScreenPanel;
pub use screen_view::ScreenView;
