mod exits;
mod pass;
mod terminal;
mod tui;

use log::error;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    exits::reset_terminal();
    exits::install_handlers();

    if let Err(e) = tui::run() {
        error!("session ended: {e}");
        terminal::print_error(&e.to_string());
        std::process::exit(1);
    }
}
