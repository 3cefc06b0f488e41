// Read-only catalog of projects and skills shown on the site, seeded at startup.

pub mod handlers;
pub mod models;
pub mod repository;
pub mod seed;
