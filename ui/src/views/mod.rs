mod survey;
pub use survey::Survey;

mod dashboard;
pub use dashboard::Dashboard;
