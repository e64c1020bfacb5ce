mod common;
mod parser;
mod rules;
