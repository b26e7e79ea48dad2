mod common;
mod store;
