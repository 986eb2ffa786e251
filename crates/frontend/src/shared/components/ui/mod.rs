pub mod count_badge;

pub use count_badge::CountBadge;
