use crate::base;
use crate::base::fs::Io;
use crate::cli;

/// A single command invocation.
pub struct Invocation<'a> {
    /// Command line arguments. First arg is the binary name, which doesn't do
    /// anything useful, so can be empty.
    pub args: &'a [&'a str],
    pub res: cli::testing::ResultMatcher<'a>,
}

/// Test case encapsulating expectations for the given command invocations.
/// Commands may rewrite the repository files, but must not leave any other
/// file behind.
pub struct MutCase<'a> {
    pub invocations: &'a [Invocation<'a>],

    /// Repository files prior to running the commands.
    pub initial_state: cli::testing::StrState<'a>,

    /// Desired repository files after running the commands.
    pub final_state: cli::testing::State,
}

impl MutCase<'_> {
    /// 1. Creates a tempdir and writes repository files from `initial_state`
    /// 1. Runs each command in order and checks its result
    /// 1. Checks that repository files match `final_state` and that no other
    ///    file was created
    pub fn run(self) {
        let (fs, _td) = cli::testing::tempfs();
        self.initial_state.to_fs(&fs);

        for inv in self.invocations {
            let root = match <cli::Root as clap::Parser>::try_parse_from(inv.args) {
                Ok(cmd) => cmd,
                Err(e) => panic!("{}", e),
            };
            inv.res.assert_matches(root.run(&fs));
        }

        let got_final_state = cli::testing::State::from_fs(&fs);
        assert_eq!(got_final_state, self.final_state);
        let stray = stray_files(&fs);
        assert!(stray.is_empty(), "unexpected files: {:?}", stray);
    }
}

/// Test case encapsulating expectations for the given command invocations.
/// Commands are expected to leave every file unchanged.
pub struct Case<'a> {
    pub invocations: &'a [Invocation<'a>],
    pub initial_state: cli::testing::StrState<'a>,
}

impl Case<'_> {
    /// Runs as a [`MutCase`] whose final state is the initial state.
    pub fn run(self) {
        MutCase {
            invocations: self.invocations,
            final_state: self.initial_state.to_state(),
            initial_state: self.initial_state,
        }
        .run()
    }
}

/// Returns names of entries in the repository directory that are not
/// repository files.
fn stray_files(fs: &base::Fs) -> Vec<std::ffi::OsString> {
    let known = [
        base::Config::FILENAME,
        base::ViewState::FILENAME,
        base::Eventlist::FILENAME,
        base::Giftlist::FILENAME,
    ];
    std::fs::read_dir(fs.dir())
        .unwrap()
        .map(|entry| entry.unwrap().file_name())
        .filter(|name| !known.iter().any(|k| name == k))
        .collect()
}

/// Generates test functions from test cases.
///
/// Accepts one or more tuples of the form `(testcase_name: ident, testcase:
/// Case|MutCase)`. Creates a submodule named `cmd_testcases` in the caller's
/// module, and then for each test case tuple, creates a corresponding function
/// named `testcase_name`.
macro_rules! generate_testcases {
    ($(($name:ident, $testcase:expr)),+ $(,)?) => {
        mod cmd_testcases {
            use super::*;

            $(
                #[test]
                fn $name() {
                    $testcase.run()
                }
            )+
        }
    };
}

pub(crate) use generate_testcases;
