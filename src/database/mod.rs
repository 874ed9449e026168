pub mod attendance_repo;
pub mod audit_repo;
pub mod faculty_repo;
pub mod schedule_repo;
pub mod section_repo;
pub mod student_day_repo;
pub mod student_repo;
pub mod summary_repo;
