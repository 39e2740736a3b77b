extern crate exptree;
extern crate num_rational;
extern crate rand;

use exptree::lexer::{Lexer, Token};
use exptree::node::{simplify, BinOpKind, Node};
use exptree::parser::Parser;
use num_rational::BigRational;
use rand::prelude::*;

fn random_ident() -> Node {
    const NAMES: [&str; 5] = ["x", "y", "z", "rate", "n0"];
    Node::Ident(NAMES.choose(&mut thread_rng()).unwrap().to_string())
}

fn random_num() -> Node {
    let mut rng = thread_rng();
    let val: i32 = match rng.gen_range(0..10) {
        // make the literals the rewrite rules care about common
        0 | 1 => 0,
        2 | 3 => 1,
        _ => rng.gen_range(2..100),
    };
    Node::Num {
        val: BigRational::from_integer(val.into()),
    }
}

fn random_op() -> BinOpKind {
    const OPS: [BinOpKind; 4] = [
        BinOpKind::Add,
        BinOpKind::Sub,
        BinOpKind::Mul,
        BinOpKind::Div,
    ];
    *OPS.choose(&mut thread_rng()).unwrap()
}

fn random_node(depth: u32) -> Node {
    let mut rng = thread_rng();

    // limit the amount of node depth
    if depth < 6 && rng.gen_range(0..10) > 3 {
        return random_op().join(random_node(depth + 1), random_node(depth + 1));
    }

    // pick a leaf node
    if rng.gen_range(0..4) == 0 {
        random_ident()
    } else {
        random_num()
    }
}

fn main() {
    for i in 0..5000 {
        let node = random_node(0);

        if i != 0 {
            println!();
        }
        println!("Testing {}:", node);

        let ground_truth = node.eval();
        println!("- eval before simplification: {:?}", ground_truth);

        let simplified = simplify(node.clone());
        println!("- simplified expression: {}", simplified);

        // simplification must preserve the exact outcome, errors included
        assert_eq!(simplified.eval(), ground_truth);

        // a second pass must find nothing left to rewrite
        assert_eq!(simplified.clone().simplify(), simplified);

        // formatting and parsing back must reproduce the tree
        let formatted = node.to_string();
        let tokens: Vec<Token> = Lexer::new(&formatted).map(|r| r.unwrap()).collect();
        let reparsed = Parser::new(&tokens).parse().unwrap();
        assert_eq!(reparsed, node);
    }
}
