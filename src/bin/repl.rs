extern crate exptree;

use exptree::lexer::Lexer;
use exptree::node::EvalError;
use exptree::parser::Parser;
use exptree::ratio_to_f64;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

/// Runs one expression through the whole pipeline and reports every
/// outcome on stdout, keeping the session alive.
fn eval_line(line: &str) {
    let tokens = match Lexer::new(line).collect::<Result<Vec<_>, _>>() {
        Ok(val) => val,
        Err(err) => {
            log::debug!("unknown token at index {}", err.index);
            println!("this is not an expression");
            return;
        }
    };
    log::debug!("tokens: {:?}", tokens);

    let root_node = match Parser::new(&tokens).parse() {
        Ok(val) => val,
        Err(err) => {
            log::debug!("parse error: {:?}", err);
            println!("this is not an expression");
            return;
        }
    };
    println!("in infix notation: {}", root_node);

    let simplified = root_node.simplify();
    println!("simplified: {}", simplified);

    match simplified.eval() {
        Ok(val) if val.is_integer() => println!("the value is {}", val),
        Ok(val) => println!("the value is {} (approximately {})", val, ratio_to_f64(&val)),
        Err(EvalError::NonNumerical) => println!("this is not a numerical expression"),
        Err(EvalError::DivisionByZero) => println!("division by zero"),
    }
}

fn main() {
    env_logger::init();

    let mut rl = DefaultEditor::new().unwrap();

    // Ok(false) means the user asked to quit
    fn process_line(rl: &mut DefaultEditor) -> Result<bool, ReadlineError> {
        let input = rl.readline("give an expression: ")?;
        if input.starts_with('!') {
            return Ok(false);
        }
        if input.trim().is_empty() {
            return Ok(true);
        }

        rl.add_history_entry(&input)?;

        eval_line(&input);
        Ok(true)
    }

    loop {
        match process_line(&mut rl) {
            Ok(keep_going) => {
                if !keep_going {
                    break;
                }
            }
            Err(err) => {
                match err {
                    ReadlineError::Eof | ReadlineError::Interrupted => (),
                    _ => eprintln!("{}", err),
                }
                break;
            }
        }
    }

    println!("good bye");
}
