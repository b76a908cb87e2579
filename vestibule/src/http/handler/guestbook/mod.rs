pub mod contact;
pub mod guestbook;
pub mod index;
