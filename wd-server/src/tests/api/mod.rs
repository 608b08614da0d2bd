mod auth;
mod error;
mod notifications;
mod support;
mod users;
mod workspaces;
