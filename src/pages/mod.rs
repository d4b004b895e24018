pub mod clients;
pub mod dashboard;
pub mod payments;
pub mod profile;
pub mod projects;
