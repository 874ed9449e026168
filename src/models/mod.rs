pub mod role;
pub mod status;

pub use role::{Operation, Role};
pub use status::AttendanceStatus;
