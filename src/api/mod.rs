pub mod contact;
pub mod education;
pub mod experiences;
pub mod openapi;
pub mod profile;
pub mod projects;
pub mod skills;
