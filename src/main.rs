use KiPLOG::Examples::plog_examples::plog_examples;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

pub fn main() {
    //
    let _ = TermLogger::init(
        LevelFilter::Info,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    );
    let task: usize = 0;
    plog_examples(task);
}
