pub mod order_calculator;
pub mod order_screen;
pub mod navigation;

pub use order_calculator::*;
pub use order_screen::*;
pub use navigation::*;
