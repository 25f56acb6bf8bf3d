pub mod classroom_directory;
pub mod teacher_directory;

#[allow(unused_imports)]
pub use classroom_directory::ClassroomDirectory;
#[allow(unused_imports)]
pub use teacher_directory::TeacherDirectory;
