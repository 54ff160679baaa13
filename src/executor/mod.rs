mod executor;
mod fork_executor;
mod path_resolver;
mod pipeline;
mod plan;
mod process;
mod redirect;
#[cfg(test)]
pub mod tests;

pub use executor::{EXIT_CANNOT_INVOKE, EXIT_NOT_FOUND, ExecError, ExecStatus, Executor};
pub use fork_executor::ForkExecutor;
pub use path_resolver::{DEFAULT_SEARCH_DIRS, PathResolver};
pub use plan::{Invocation, Plan};
pub use process::ignore_shell_signals;
