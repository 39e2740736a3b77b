extern crate exptree;

use std::env;
use std::process;

use exptree::lexer::Lexer;
use exptree::node::EvalError;
use exptree::parser::Parser;
use exptree::ratio_to_f64;

fn main() {
    env_logger::init();

    let expr = env::args().skip(1).collect::<Vec<_>>().join(" ");
    println!("Original expression: {}", expr);

    let tokens = match Lexer::new(&expr).collect::<Result<Vec<_>, _>>() {
        Ok(val) => val,
        Err(err) => {
            eprintln!("error: unknown token at index {}", err.index);
            process::exit(1);
        }
    };

    let parser = Parser::new(&tokens);
    let root_node = match parser.parse() {
        Ok(val) => val,
        Err(err) => {
            eprintln!("error: {:?}", err);
            process::exit(1);
        }
    };

    let simplified = root_node.simplify();
    println!("Simplified expression: {}", simplified);

    match simplified.eval() {
        Ok(val) if val.is_integer() => println!("Expression result: {}", val),
        Ok(val) => println!(
            "Expression result: {} (approximately {})",
            val,
            ratio_to_f64(&val)
        ),
        Err(EvalError::NonNumerical) => println!("Expression result: (not numerical)"),
        Err(EvalError::DivisionByZero) => {
            eprintln!("error: division by zero");
            process::exit(1);
        }
    }
}
