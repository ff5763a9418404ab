pub mod filter;
pub mod order;

pub use filter::{paginate, DateWindow, OrderFilter, SortOrder};
pub use order::{Order, OrderStatus, OrderType};
