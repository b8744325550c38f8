use crate::base;

/// Output of a successful command invocation, to be written to stdout.
#[derive(Debug, PartialEq, Eq)]
pub enum Output {
    Str(String),
    Gifts(base::listprinter::Config),
    Events(base::eventprinter::Config),
    Summary(base::summaryprinter::Config),
}

impl std::fmt::Display for Output {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Output::Str(s) => {
                if s.ends_with('\n') {
                    write!(f, "{}", s)
                } else {
                    writeln!(f, "{}", s)
                }
            }
            Output::Gifts(config) => {
                if config.records.is_empty() {
                    writeln!(f, "No gift records.")
                } else {
                    write!(f, "{}", config)
                }
            }
            Output::Events(config) => {
                if config.events.is_empty() {
                    writeln!(f, "No events.")
                } else {
                    write!(f, "{}", config)
                }
            }
            Output::Summary(config) => write!(f, "{}", config.to_summaryprinter()),
        }
    }
}
