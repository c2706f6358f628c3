//! State shared by every source run in one invocation.

use cell_eval::{stdout_handler, Environment, Error, Interpreter, SharedPrintHandler, Value};
use cell_ir::{Expr, SharedInterner, StringInterner};
use cell_lexer::Lexer;
use cell_parse::Parser;
use cell_passes::{PassManager, Processor};
use std::cell::RefCell;
use tracing::debug;

/// One top-level environment, shared by all sources and REPL lines.
pub struct Session {
    interner: SharedInterner,
    globals: Environment,
    print_handler: SharedPrintHandler,
    passes: RefCell<PassManager>,
}

impl Session {
    /// A session printing to stdout.
    pub fn new(processors: &[Processor]) -> Result<Self, Error> {
        Self::with_print_handler(processors, stdout_handler())
    }

    /// Load the library into a fresh environment and set up `processors`.
    ///
    /// Every name the library defines is exempt from obfuscation.
    pub fn with_print_handler(
        processors: &[Processor],
        print_handler: SharedPrintHandler,
    ) -> Result<Self, Error> {
        let interner = SharedInterner::new();
        let globals = Environment::new();
        let interp = Interpreter::new(&interner).with_print_handler(print_handler.clone());
        cell_stdlib::bootstrap(&interp, &globals)?;

        let reserved = cell_stdlib::defined_names(&interp, &globals);
        let passes = PassManager::from_processors(processors, &interner, &reserved);
        debug!(passes = ?passes.names(), "session ready");

        Ok(Session {
            interner,
            globals,
            print_handler,
            passes: RefCell::new(passes),
        })
    }

    pub fn interner(&self) -> &StringInterner {
        &self.interner
    }

    pub fn globals(&self) -> &Environment {
        &self.globals
    }

    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print_handler
    }

    fn interpreter(&self) -> Interpreter<'_> {
        Interpreter::new(&self.interner).with_print_handler(self.print_handler.clone())
    }

    /// Parse statements from `chars` lazily, running the passes on each.
    pub fn statements<'s, S>(&'s self, chars: S) -> impl Iterator<Item = Result<Expr, Error>> + 's
    where
        S: Iterator<Item = char> + 's,
    {
        Parser::new(Lexer::new(chars), &self.interner).map(move |statement| match statement {
            Ok(expr) => Ok(self.passes.borrow_mut().run(expr)),
            Err(err) => Err(Error::from(err)),
        })
    }

    /// Evaluate one statement in the top-level environment.
    pub fn eval(&self, statement: &Expr) -> Result<Value, Error> {
        Ok(self.interpreter().eval_expr(statement, &self.globals)?)
    }

    /// Run a whole program, returning its last value.
    pub fn run_source(&self, source: &str) -> Result<Value, Error> {
        self.interpreter()
            .evaluate(self.statements(source.chars()), &self.globals)
    }
}
