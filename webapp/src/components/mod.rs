pub mod contact;
pub mod experience;
pub mod navigation;
pub mod projects;
pub mod reveal;
pub mod scroll_progress;
pub mod sections;
pub mod skills;
pub mod theme_toggle;

pub use scroll_progress::ScrollProgress;
pub use theme_toggle::ThemeToggle;
