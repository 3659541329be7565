pub mod admin;
pub mod header;
pub mod hero;
pub mod registration_form;
pub mod webinar_info;
