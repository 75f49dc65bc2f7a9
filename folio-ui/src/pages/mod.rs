pub mod dashboard;
pub mod home;

pub use dashboard::Dashboard;
pub use home::Home;
