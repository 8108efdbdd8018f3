pub mod address;

pub mod auth;

pub mod certificates;

pub mod courses;

pub mod dashboard;

pub mod exams;

pub mod files;

pub mod frontend;

pub mod students;

pub mod teachers;

pub mod teams;

pub mod users;

pub use address::configure_address_routes;
pub use auth::configure_auth_routes;
pub use certificates::{configure_certificate_routes, configure_legacy_routes};
pub use courses::configure_course_routes;
pub use dashboard::configure_dashboard_routes;
pub use exams::configure_exam_routes;
pub use files::configure_file_routes;
pub use frontend::configure_frontend_routes;
pub use students::configure_student_routes;
pub use teachers::configure_teacher_routes;
pub use teams::configure_team_routes;
pub use users::configure_user_routes;
