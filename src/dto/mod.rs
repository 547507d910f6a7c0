pub mod bookings;
pub mod quote;
pub mod settings;
