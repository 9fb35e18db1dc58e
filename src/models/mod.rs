pub mod common;
pub mod criteria;
pub mod grades;
pub mod marks;
pub mod system;
pub mod tasks;
pub mod works;

pub use common::{ApiResponse, ErrorCode};
pub use system::AppStartTime;
