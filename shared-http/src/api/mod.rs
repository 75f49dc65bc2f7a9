mod responses;

pub use responses::{ErrorResponse, Resume, SavedResumesResponse, UserInfo};
