mod common;
mod page;
