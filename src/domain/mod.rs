pub mod entity;
pub mod outbound;
pub mod session;
pub mod task;
