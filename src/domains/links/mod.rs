// Links domain: short links to external pages
pub mod handlers;
pub mod routes;
