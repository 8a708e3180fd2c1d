mod common;
mod flow;
mod rules;
