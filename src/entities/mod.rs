pub mod contact_messages;
pub mod education;
pub mod experiences;
pub mod profiles;
pub mod projects;
pub mod site_settings;
pub mod skills;
