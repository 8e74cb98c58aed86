use std::process;

use charity_form::{
    cli::{run_form, FormResult, TerminalInteraction},
    config::Config,
    form::JsonSink,
    init,
};

fn main() {
    init();

    let config = Config::default_path()
        .map(|path| Config::load_or_default(&path))
        .unwrap_or_default();

    let mut interaction = TerminalInteraction::new(&config);
    let mut sink = JsonSink::new();

    match run_form(&mut interaction, &mut sink) {
        FormResult::Completed(_donation) => {
            if let Some(json) = sink.rendered {
                println!("{json}");
            }
        }
        FormResult::Cancelled => {
            eprintln!("Donation cancelled.");
            process::exit(1);
        }
    }
}
