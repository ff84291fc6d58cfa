pub mod task;

pub use task::{STAMP_FORMAT, Task, TaskKind};
