//! Cell Stdlib - the functions every Cell program starts with.
//!
//! [`bootstrap`] fills a top-level [`Environment`] with the natives from
//! [`NATIVES`], the `None` constant, and then the Cell-written [`PRELUDE`].

mod native;
mod prelude;

pub use native::NATIVES;
pub use prelude::PRELUDE;

use cell_eval::{errors::redefinition, Environment, Error, Interpreter, Value};
use cell_ir::Name;
use tracing::debug;

/// Register the library into `env`.
///
/// Fails only if `env` already defines one of the library names.
#[tracing::instrument(level = "debug", skip_all)]
pub fn bootstrap(interp: &Interpreter<'_>, env: &Environment) -> Result<(), Error> {
    let interner = interp.interner();
    for native in NATIVES {
        define(env, interner.intern(native.name), Value::Native(*native), native.name)?;
    }
    define(env, interner.intern("None"), Value::None, "None")?;
    debug!(natives = NATIVES.len(), "registered natives");

    for fragment in PRELUDE {
        interp.run_source(fragment, env)?;
    }
    debug!(fragments = PRELUDE.len(), "evaluated prelude");
    Ok(())
}

/// A fresh top-level environment with the library loaded.
pub fn top_level_environment(interp: &Interpreter<'_>) -> Result<Environment, Error> {
    let env = Environment::new();
    bootstrap(interp, &env)?;
    Ok(env)
}

/// Names bound directly in `env`, as text. Used after [`bootstrap`] to
/// find out which names belong to the library.
pub fn defined_names(interp: &Interpreter<'_>, env: &Environment) -> Vec<&'static str> {
    let interner = interp.interner();
    let mut names: Vec<_> = env
        .local_names()
        .into_iter()
        .map(|name| interner.lookup(name))
        .collect();
    names.sort_unstable();
    names
}

fn define(env: &Environment, name: Name, value: Value, text: &str) -> Result<(), Error> {
    env.set(name, value)
        .map_err(|_| Error::Execution(redefinition(text)))
}
