pub mod check;
pub mod controller;
pub mod history;
pub mod recovery;
pub mod timer;
