pub mod app;
pub mod input;
pub mod render;
pub mod smart_input;
pub mod theme;

pub use app::run;
pub use smart_input::{KeyAction, PanelState, SmartInput};
