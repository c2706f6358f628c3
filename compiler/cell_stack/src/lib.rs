//! Stack growth for deep recursion.
//!
//! Cell's parser builds nested expressions by recursion (every operator,
//! call argument list and function body opens a new level) and the
//! interpreter evaluates them the same way. A program such as
//! `1 + 1 + 1 + ...` or a long recursive function therefore nests as deep
//! as the input, which would overflow the main thread's stack long before
//! memory runs out.
//!
//! [`ensure_sufficient_stack`] checks how much stack is left and, when the
//! remainder falls below [`RED_ZONE`], continues on a freshly allocated
//! segment of [`STACK_PER_RECURSION`] bytes.
//!
//! On `wasm32` the guard is a plain call.

/// Grow when less than this much stack remains (100KB).
const RED_ZONE: usize = 100 * 1024;

/// Size of each newly allocated stack segment (1MB).
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, first switching to a new stack segment if the current one is
/// nearly exhausted.
///
/// Wrap the body of every function that recurses on user input:
///
/// ```text
/// fn eval_expr(&mut self, expr: &Expr, env: &Environment) -> EvalResult {
///     ensure_sufficient_stack(|| match expr {
///         // ... recursive evaluation ...
///     })
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM manages its own stack.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
