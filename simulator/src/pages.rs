//! Page navigation for the simulator window.
//!
//! Press `Y` to toggle between the onboarding screen and the debug view.
//!
//! # Pages
//!
//! - [`Page::Onboarding`]: the animated onboarding screen
//! - [`Page::Debug`]: frame timing, reveal state and both debug logs

/// Pages the simulator can show.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum Page {
    #[default]
    Onboarding,
    Debug,
}

impl Page {
    /// Toggle to the other page.
    #[inline]
    pub const fn toggle(self) -> Self {
        match self {
            Self::Onboarding => Self::Debug,
            Self::Debug => Self::Onboarding,
        }
    }

    /// Debug log line announcing a switch to this page.
    pub const fn log_line(self) -> &'static str {
        match self {
            Self::Onboarding => "Page: Onboarding",
            Self::Debug => "Page: Debug",
        }
    }
}
