mod view;

pub use view::ActivityDetails;
