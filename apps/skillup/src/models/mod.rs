pub mod course;
pub mod submission;
pub mod video;

pub use course::CourseRecord;
pub use submission::Submission;
pub use video::VideoRecord;
