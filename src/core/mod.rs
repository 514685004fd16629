pub mod error;
pub mod record;

pub use error::StoreError;
pub use record::{Annotation, Comment, NewSurvey, SurveyRecord};
