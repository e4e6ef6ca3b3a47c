pub mod exec;
pub mod run;

use clicrew::{Capabilities, Config, Dispatcher, GeminiInterpreter};
use log::warn;

/// Resolve capabilities once and build the dispatcher.
///
/// An interpreter that cannot be constructed is simply absent; every
/// command then takes the shell fallback path.
pub fn build_dispatcher(config: &Config) -> Dispatcher {
    let capabilities = if config.interpreter_enabled {
        match GeminiInterpreter::new(&config.model, &config.api_key) {
            Ok(interpreter) => Capabilities::with_interpreter(Box::new(interpreter)),
            Err(e) => {
                warn!("interpreter unavailable, falling back to shell execution: {:#}", e);
                Capabilities::none()
            }
        }
    } else {
        Capabilities::none()
    };

    Dispatcher::new(capabilities, config.shell_timeout)
}
