pub mod empty_state;
pub mod header;
pub mod profile_card;
pub mod resume_card;
pub mod saved_resumes;
pub mod spinner;
