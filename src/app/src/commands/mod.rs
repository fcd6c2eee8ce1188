pub mod connectivity;
pub mod notification;
