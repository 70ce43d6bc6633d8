pub mod naming;
pub mod paths;
pub mod templates;
