pub mod booking_store;
pub mod directory;

// パブリックに型を再エクスポート
pub use booking_store::BookingStore as PostgresBookingStore;
pub use directory::{
    ClassroomDirectory as PostgresClassroomDirectory,
    TeacherDirectory as PostgresTeacherDirectory,
};
