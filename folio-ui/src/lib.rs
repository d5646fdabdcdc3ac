pub mod api;
pub mod desktop;
pub mod desktop_window;
pub mod interop;
pub mod views;

pub use desktop::*;
pub use desktop_window::*;
pub use interop::*;
