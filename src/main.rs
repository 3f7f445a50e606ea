mod ast;
mod error;
mod eval;
mod lexer;
mod parser;
mod token;
mod toplevel;

fn main() {
    toplevel::main_loop(">> ");
}
