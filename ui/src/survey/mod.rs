mod model;
pub use model::{section_views, OptionView, QuestionView, SectionView};

mod notice;
pub use notice::{SuccessNotice, ValidationAlert};

mod patient;
pub use patient::PatientFields;

mod progress;
pub use progress::ProgressPanel;

mod questions;
pub use questions::SectionCard;

pub mod session;

mod view;
pub use view::SurveyView;
