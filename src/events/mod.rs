pub mod keyboard;
pub mod toggle;
