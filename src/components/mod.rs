pub mod app;
pub mod board;
pub mod cell;
pub mod win_message;

pub use app::App;
