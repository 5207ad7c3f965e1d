pub mod profile;
pub mod role_map;
pub mod rubric;

pub use profile::{CandidateProfile, EducationLevel};
pub use role_map::RoleMap;
pub use rubric::{role_label, RoleRubric, Rubric};
