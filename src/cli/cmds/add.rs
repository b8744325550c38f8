use anyhow::Context;

use crate::base;
use crate::cli;

/// Add a gift record to the selected event
#[derive(clap::Parser)]
pub struct Add {
    /// Guest name
    name: String,

    /// Amount in won, thousands separators allowed
    amount: String,

    #[command(flatten)]
    opts: cli::sharedopts::GiftOpts,
}

impl Add {
    pub fn run(
        self,
        store: &mut base::Store,
        view: &base::ViewState,
        config: &base::Config,
    ) -> anyhow::Result<cli::Output> {
        let event_id = cli::util::selected_event(store, view)?.id();
        let default_side = config.default_side.map(|s| s.to_string());
        let draft = base::validate::GiftForm {
            name: &self.name,
            amount: &self.amount,
            companions: self.opts.companions.as_deref(),
            relation: self.opts.relation.as_deref(),
            method: self.opts.method.as_deref(),
            side: self.opts.side.as_deref().or(default_side.as_deref()),
            memo: self.opts.memo.as_deref(),
        }
        .validate(event_id)?;

        let updates = store.subscribe(event_id);
        let id = store.create_record(draft)?;
        let records = updates
            .try_recv()
            .context("gift records were not refreshed")?;

        let mut list = cli::util::gift_list(config, records);
        list.line_postprocessor = Some(cli::util::tag_record(id, "ADDED", colored::Color::Green));
        Ok(cli::Output::Gifts(list))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EVENTS: &str = r#"
        {"id":1,"kind":"wedding","date":"2024-05-01","location":"Grand Hall","host":"Lee","createdAt":"2015-03-30T12:00:00Z"}
        {"id":2,"kind":"birthday","date":"2024-07-01","location":"Cafe","host":"Kim","createdAt":"2015-03-30T12:00:00Z"}
    "#;

    cli::testing::generate_testcases![
        (
            no_selection,
            cli::testing::Case {
                invocations: &[cli::testing::Invocation {
                    args: &["", "add", "Kim", "50000"],
                    res: cli::testing::ResultMatcher::ErrGlob("no event selected"),
                }],
                initial_state: cli::testing::StrState::new()
                    .with_config("{}")
                    .with_events(EVENTS),
            }
        ),
        (
            selected_event_was_removed,
            cli::testing::Case {
                invocations: &[cli::testing::Invocation {
                    args: &["", "add", "Kim", "50000"],
                    res: cli::testing::ResultMatcher::ErrGlob("no event selected"),
                }],
                initial_state: cli::testing::StrState::new()
                    .with_config("{}")
                    .with_events(EVENTS)
                    .with_view(r#"{"selectedEvent":3}"#),
            }
        ),
        (
            minimal,
            cli::testing::MutCase {
                invocations: &[cli::testing::Invocation {
                    args: &["", "add", "Kim", "1"],
                    res: cli::testing::ResultMatcher::OkRenderedGlob("1 -- 1 kim x1 <- [added]\n"),
                }],
                initial_state: cli::testing::StrState::new()
                    .with_config("{}")
                    .with_events(EVENTS)
                    .with_view(r#"{"selectedEvent":2}"#),
                final_state: cli::testing::State::new()
                    .with_config("{}")
                    .with_events(EVENTS)
                    .with_gifts(
                        r#"{"id":1,"eventId":2,"name":"Kim","amount":1,"companions":1,"createdAt":"2015-03-30T12:00:00Z"}"#
                    )
                    .with_view(r#"{"selectedEvent":2}"#),
            }
        ),
        (
            all_fields,
            cli::testing::MutCase {
                invocations: &[cli::testing::Invocation {
                    args: &[
                        "", "add", "Lee", "100,000", "-n", "2", "-r", "Friend", "-p", "transfer",
                        "-s", "groom", "-m", " came late ",
                    ],
                    res: cli::testing::ResultMatcher::OkRenderedGlob(
                        "1 --- 50,000 kim x1\n2 -- 100,000 lee x2 [friend, transfer, groom]: came late <- [added]\n"
                    ),
                }],
                initial_state: cli::testing::StrState::new()
                    .with_config("{}")
                    .with_events(EVENTS)
                    .with_gifts(
                        r#"{"id":1,"eventId":1,"name":"Kim","amount":50000,"createdAt":"2015-03-30T12:00:00Z"}"#
                    )
                    .with_view(r#"{"selectedEvent":1}"#),
                final_state: cli::testing::State::new()
                    .with_config("{}")
                    .with_events(EVENTS)
                    .with_gifts(
                        r#"
                            {"id":1,"eventId":1,"name":"Kim","amount":50000,"createdAt":"2015-03-30T12:00:00Z"}
                            {"id":2,"eventId":1,"side":"groom","name":"Lee","amount":100000,"relation":"friend","companions":2,"paymentMethod":"transfer","memo":"came late","createdAt":"2015-03-30T12:00:00Z"}
                        "#
                    )
                    .with_view(r#"{"selectedEvent":1}"#),
            }
        ),
        (
            default_side,
            cli::testing::MutCase {
                invocations: &[
                    cli::testing::Invocation {
                        args: &["", "add", "Kim", "10000"],
                        res: cli::testing::ResultMatcher::OkRenderedGlob("*[bride]*"),
                    },
                    cli::testing::Invocation {
                        args: &["", "add", "Lee", "10000", "--side", "groom"],
                        res: cli::testing::ResultMatcher::OkRenderedGlob("*[groom] <- [added]\n"),
                    },
                ],
                initial_state: cli::testing::StrState::new()
                    .with_config(r#"{"defaultSide":"bride"}"#)
                    .with_events(EVENTS)
                    .with_view(r#"{"selectedEvent":1}"#),
                final_state: cli::testing::State::new()
                    .with_config(r#"{"defaultSide":"bride"}"#)
                    .with_events(EVENTS)
                    .with_gifts(
                        r#"
                            {"id":1,"eventId":1,"side":"bride","name":"Kim","amount":10000,"companions":1,"createdAt":"2015-03-30T12:00:00Z"}
                            {"id":2,"eventId":1,"side":"groom","name":"Lee","amount":10000,"companions":1,"createdAt":"2015-03-30T12:00:00Z"}
                        "#
                    )
                    .with_view(r#"{"selectedEvent":1}"#),
            }
        ),
        (
            invalid_fields,
            cli::testing::Case {
                invocations: &[cli::testing::Invocation {
                    args: &["", "add", " ", "0", "--companions=-1", "--method", "cheque"],
                    res: cli::testing::ResultMatcher::ErrGlob(
                        "name is required; amount must be at least 1; companions must be a whole number of 0 or more; method must be one of *"
                    ),
                }],
                initial_state: cli::testing::StrState::new()
                    .with_config("{}")
                    .with_events(EVENTS)
                    .with_view(r#"{"selectedEvent":1}"#),
            }
        ),
    ];
}
