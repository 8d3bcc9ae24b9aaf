pub mod badge;
pub mod button;

pub use badge::ExpiryBadge;
pub use button::Button;
