use std::io;
use std::process;

use mini_shell_rs::SHELL_NAME;
use mini_shell_rs::config::ConfigLoader;
use mini_shell_rs::executor::ForkExecutor;
use mini_shell_rs::logger::init_logger;
use mini_shell_rs::repl::Repl;

fn main() {
    let config = match ConfigLoader::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}: config: {}", SHELL_NAME, e);
            process::exit(1);
        }
    };
    init_logger(&config);
    log::debug!("search dirs {:?}", config.search_dirs);

    let executor = ForkExecutor::from_config(&config);
    let mut repl = Repl::new(config, executor);
    let code = match repl.run(&mut io::stdin().lock()) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {}", SHELL_NAME, e);
            1
        }
    };
    process::exit(code);
}
