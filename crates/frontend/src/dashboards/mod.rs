pub mod d400_seller_home;

pub use d400_seller_home::ui::SellerHomeDashboard;
