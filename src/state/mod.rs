pub mod mode;
pub mod navigation;

pub use mode::PickerMode;
pub use navigation::NavigationState;
