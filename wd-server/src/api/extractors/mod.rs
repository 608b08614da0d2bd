pub mod auth_scope;
