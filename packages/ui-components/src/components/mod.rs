pub mod arrow_button;
pub mod button;
pub mod outside_click;
pub mod radio_group;
pub mod select;
pub mod settings_panel;

pub use arrow_button::*;
pub use button::*;
pub use outside_click::*;
pub use radio_group::*;
pub use select::*;
pub use settings_panel::*;
