use crate::base;
use crate::cli;

/// List events with their gift totals
///
/// The selected event is marked with a pointer.
#[derive(clap::Parser)]
pub struct Events {}

impl Events {
    pub fn run(
        &self,
        store: &base::Store,
        view: &base::ViewState,
        config: &base::Config,
    ) -> anyhow::Result<cli::Output> {
        let events = store
            .list_events()
            .iter()
            .map(|e| (e.clone(), base::Summary::of(store.list_records(e.id()))))
            .collect();
        Ok(cli::Output::Events(base::eventprinter::Config {
            charset: cli::util::charset_from_config(config),
            selected: view.selected(store).map(base::Event::id),
            events,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EVENTS: &str = r#"
        {"id":1,"kind":"wedding","date":"2024-05-01","location":"Grand Hall","host":"Lee","createdAt":"2015-03-30T12:00:00Z"}
        {"id":2,"kind":"birthday","date":"2024-07-01","location":"Cafe","host":"Kim","createdAt":"2015-03-30T12:00:00Z"}
    "#;

    const GIFTS: &str = r#"
        {"id":1,"eventId":1,"name":"a","amount":50000,"createdAt":"2015-03-30T12:00:00Z"}
        {"id":2,"eventId":2,"name":"b","amount":10000,"createdAt":"2015-03-30T12:00:00Z"}
        {"id":3,"eventId":1,"name":"c","amount":30000,"createdAt":"2015-03-30T12:00:00Z"}
        {"id":4,"eventId":9,"name":"orphan","amount":70000,"createdAt":"2015-03-30T12:00:00Z"}
    "#;

    cli::testing::generate_testcases![
        (
            no_events,
            cli::testing::Case {
                invocations: &[cli::testing::Invocation {
                    args: &["", "events"],
                    res: cli::testing::ResultMatcher::OkRenderedGlob("no events.\n"),
                }],
                initial_state: cli::testing::StrState::new().with_config("{}"),
            }
        ),
        (
            with_totals,
            cli::testing::Case {
                invocations: &[cli::testing::Invocation {
                    args: &["", "events"],
                    res: cli::testing::ResultMatcher::OkExact(cli::Output::Events(
                        base::eventprinter::Config {
                            charset: base::Charset::default(),
                            selected: Some(2),
                            events: vec![
                                (
                                    EVENTS.parse::<base::Eventlist>().unwrap().as_slice()[0].clone(),
                                    base::Summary::of(
                                        GIFTS
                                            .parse::<base::Giftlist>()
                                            .unwrap()
                                            .iter()
                                            .filter(|r| r.event_id() == 1)
                                    ),
                                ),
                                (
                                    EVENTS.parse::<base::Eventlist>().unwrap().as_slice()[1].clone(),
                                    base::Summary::of(
                                        GIFTS
                                            .parse::<base::Giftlist>()
                                            .unwrap()
                                            .iter()
                                            .filter(|r| r.event_id() == 2)
                                    ),
                                ),
                            ],
                        }
                    )),
                }],
                initial_state: cli::testing::StrState::new()
                    .with_config("{}")
                    .with_events(EVENTS)
                    .with_gifts(GIFTS)
                    .with_view(r#"{"selectedEvent":2}"#),
            }
        ),
        (
            rendered,
            cli::testing::Case {
                invocations: &[cli::testing::Invocation {
                    args: &["", "events"],
                    res: cli::testing::ResultMatcher::OkRenderedGlob(
                        "  1 -- 2024-05-01 wedding at grand hall, hosted by lee (2 gifts, 80,000)\n  2 -- 2024-07-01 birthday at cafe, hosted by kim (1 gifts, 10,000)\n"
                    ),
                }],
                initial_state: cli::testing::StrState::new()
                    .with_config("{}")
                    .with_events(EVENTS)
                    .with_gifts(GIFTS)
                    .with_view(r#"{"selectedEvent":5}"#),
            }
        ),
    ];
}
