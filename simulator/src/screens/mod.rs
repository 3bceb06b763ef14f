//! Host-only screens.

mod debug;

pub use debug::draw_debug_page;
