pub mod app_state;
pub mod tabs;

pub use app_state::AppState;
pub use tabs::TabId;
