mod config;
mod gameplay;
mod notifications;
