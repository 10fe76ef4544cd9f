pub mod clock;
pub mod path;
pub mod time;
