//! The shopping cart: items, the single-owner store, persistence backends,
//! and the notification channel.

mod item;
mod notify;
mod storage;
mod store;

pub use item::CartItem;
pub use notify::{ChannelSink, Notification, NotificationSink, NullSink, Severity};
pub use storage::{CartStorage, JsonFileStorage, MemoryStorage, CART_SLOT};
pub use store::CartStore;
