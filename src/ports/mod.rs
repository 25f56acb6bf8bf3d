#[allow(unused_imports)]
pub mod booking_store;
#[allow(unused_imports)]
pub mod classroom_directory;
#[allow(unused_imports)]
pub mod teacher_directory;

#[allow(unused_imports)]
pub use booking_store::*;
#[allow(unused_imports)]
pub use classroom_directory::*;
#[allow(unused_imports)]
pub use teacher_directory::*;
