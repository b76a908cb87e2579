//! In-memory data stores
//!
//! Contents are lost on restart.

pub use self::{
    message::{Message, MessageStore, NewMessage},
    task::{NewTask, Task, TaskStore, TaskUpdate},
};

mod message;
mod task;
