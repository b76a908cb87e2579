pub mod guestbook;
pub mod tasks;
