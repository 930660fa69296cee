mod logbook_cli;

pub use logbook_cli::LogbookCli;
