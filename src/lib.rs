extern crate num_bigint;
extern crate num_integer;
extern crate num_rational;
extern crate num_traits;

pub mod lexer;
pub mod node;
pub mod parser;
mod ratio2flt;

pub use self::ratio2flt::ratio_to_f64;
