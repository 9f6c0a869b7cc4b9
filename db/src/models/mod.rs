pub mod attendance_record;
pub mod class;
pub mod class_meeting;
pub mod enrollment;
pub mod session_assignment;
pub mod user;

pub use attendance_record::Entity as AttendanceRecord;
pub use class::Entity as Class;
pub use class_meeting::Entity as ClassMeeting;
pub use enrollment::Entity as Enrollment;
pub use session_assignment::Entity as SessionAssignment;
pub use user::Entity as User;
