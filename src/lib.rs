#![forbid(unsafe_code)]

#[macro_use]
extern crate log;

//Application Imports/Exports
pub mod objects;
pub mod parser;
pub mod tokenizer;
