pub mod dashboard;

pub use dashboard::SellerHomeDashboard;
