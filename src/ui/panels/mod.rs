//! Side panel rendering (chat list).

pub mod chat_list;

pub use chat_list::{render_chat_list, ChatListAction};
