mod candidate;
mod common;
mod user;
