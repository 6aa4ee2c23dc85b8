use lisp2c::emit::emit_c;
use lisp2c::lex::{lex_all, Lexer};
use lisp2c::parse::parser::Parser;
use lisp2c::parse::toplevel::parse_top_level;
use lisp2c::serialise::{serialise_ast, serialise_target, serialise_tokens};
use lisp2c::transform::transform;
use lisp2c::CompileError;
use serde_json::to_string_pretty;
use std::fs::File;
use std::io::stdin;
use std::io::stdout;
use std::io::BufWriter;
use std::io::Read;
use std::io::Write;
use std::process::exit;
use structopt::StructOpt;

#[derive(StructOpt)]
#[structopt(name = "lisp2c", about = "Lisp-style call expression to C compiler")]
struct Cli {
  /// File to compile; omit for stdin.
  #[structopt(parse(from_os_str))]
  input: Option<std::path::PathBuf>,

  /// Output destination; omit for stdout.
  #[structopt(short, long, parse(from_os_str))]
  output: Option<std::path::PathBuf>,

  /// Print the token list as JSON to stderr.
  #[structopt(long)]
  dump_tokens: bool,

  /// Print the source and target ASTs as JSON to stderr.
  #[structopt(long)]
  dump_ast: bool,
}

fn fail(err: CompileError) -> ! {
  eprintln!("{}", err);
  exit(1);
}

fn main() {
  let args = Cli::from_args();
  let mut input = Vec::new();
  let mut input_file: Box<dyn Read> = match args.input {
    Some(p) => Box::new(File::open(p).expect("open input file")),
    None => Box::new(stdin()),
  };
  input_file.read_to_end(&mut input).expect("read input");
  let out_file: Box<dyn Write> = match args.output {
    Some(p) => Box::new(File::create(p).expect("open output file")),
    None => Box::new(stdout()),
  };
  let mut output = BufWriter::new(out_file);

  let mut lexer = Lexer::new(input);
  let lexed = lex_all(&mut lexer).unwrap_or_else(|err| fail(CompileError::Syntax(err)));
  for diagnostic in &lexed.diagnostics {
    eprintln!(
      "unknown character 0x{:02x} at offset {}",
      diagnostic.byte, diagnostic.position
    );
  }
  if args.dump_tokens {
    eprintln!(
      "{}",
      to_string_pretty(&serialise_tokens(&lexed.tokens)).expect("serialise tokens")
    );
  };
  let mut parser = Parser::new(lexed.tokens);
  let ast = parse_top_level(&mut parser).unwrap_or_else(|err| fail(CompileError::Syntax(err)));
  let target = transform(&ast);
  if args.dump_ast {
    eprintln!(
      "{}",
      to_string_pretty(&serialise_ast(&ast)).expect("serialise source AST")
    );
    eprintln!(
      "{}",
      to_string_pretty(&serialise_target(&target)).expect("serialise target AST")
    );
  };
  emit_c(&mut output, &target).unwrap_or_else(|err| fail(CompileError::IO(err)));
  output.flush().expect("flush output");
}
