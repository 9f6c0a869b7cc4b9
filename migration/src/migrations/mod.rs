pub mod m202603150001_create_users;
pub mod m202603150002_create_classes;
pub mod m202603150003_create_class_meetings;
pub mod m202603150004_create_enrollments;
pub mod m202603200001_create_attendance_records;
pub mod m202604020001_create_session_assignments;
