pub mod event;
pub mod status;

pub use event::Event;
pub use status::Status;
