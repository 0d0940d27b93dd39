mod person_name;
mod registration;
