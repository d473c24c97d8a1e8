pub mod ask;
pub mod chat;
pub mod extract;
pub mod health;
