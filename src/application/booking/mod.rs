mod booking_service;
mod errors;
mod maintenance;

#[allow(unused_imports)]
pub use booking_service::{
    ServiceDependencies, change_booking_status, create_booking, get_booking, list_bookings,
};
#[allow(unused_imports)]
pub use errors::{BookingApplicationError, Result};
#[allow(unused_imports)]
pub use maintenance::{complete_expired_bookings, purge_expired_bookings};
