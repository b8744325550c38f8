use crate::base;

/// The expected or actual objects deserialized from a repo directory. Unset
/// fields correspond to nonexistent files.
#[derive(Debug, PartialEq, Eq, Default)]
pub struct State {
    config: Option<base::Config>,
    events: Option<base::Eventlist>,
    gifts: Option<base::Giftlist>,
    view: Option<base::ViewState>,
}

impl State {
    /// Constructs the representation of an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets repo's [`base::Config`].
    pub fn with_config<T>(mut self, config: T) -> Self
    where
        T: TryInto<base::Config> + std::fmt::Debug,
        <T as TryInto<base::Config>>::Error: std::fmt::Debug,
    {
        self.config = Some(config.try_into().unwrap());
        self
    }

    /// Sets repo's [`base::Eventlist`].
    pub fn with_events<T>(mut self, events: T) -> Self
    where
        T: TryInto<base::Eventlist> + std::fmt::Debug,
        <T as TryInto<base::Eventlist>>::Error: std::fmt::Debug,
    {
        self.events = Some(events.try_into().unwrap());
        self
    }

    /// Sets repo's [`base::Giftlist`].
    pub fn with_gifts<T>(mut self, gifts: T) -> Self
    where
        T: TryInto<base::Giftlist> + std::fmt::Debug,
        <T as TryInto<base::Giftlist>>::Error: std::fmt::Debug,
    {
        self.gifts = Some(gifts.try_into().unwrap());
        self
    }

    /// Sets repo's [`base::ViewState`].
    pub fn with_view<T>(mut self, view: T) -> Self
    where
        T: TryInto<base::ViewState> + std::fmt::Debug,
        <T as TryInto<base::ViewState>>::Error: std::fmt::Debug,
    {
        self.view = Some(view.try_into().unwrap());
        self
    }

    /// Deserializes objects from `fs`.
    pub fn from_fs(fs: &base::Fs) -> Self {
        macro_rules! read {
            ($t:ty) => {{
                let p = fs.path::<$t>();
                if p.exists() {
                    Some(fs.read::<$t>().unwrap())
                } else {
                    None
                }
            }};
        }

        Self {
            config: read!(base::Config),
            events: read!(base::Eventlist),
            gifts: read!(base::Giftlist),
            view: read!(base::ViewState),
        }
    }
}

/// Representation of a repo directory's file contents. Unset fields correspond
/// to nonexistent files.
#[derive(Default)]
pub struct StrState<'a> {
    config: Option<&'a str>,
    events: Option<&'a str>,
    gifts: Option<&'a str>,
    view: Option<&'a str>,
}

impl<'a> StrState<'a> {
    /// Constructs the representation of an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets repo's [`base::Config`] file contents.
    pub fn with_config(mut self, s: &'a str) -> Self {
        self.config = Some(s);
        self
    }

    /// Sets repo's [`base::Eventlist`] file contents.
    pub fn with_events(mut self, s: &'a str) -> Self {
        self.events = Some(s);
        self
    }

    /// Sets repo's [`base::Giftlist`] file contents.
    pub fn with_gifts(mut self, s: &'a str) -> Self {
        self.gifts = Some(s);
        self
    }

    /// Sets repo's [`base::ViewState`] file contents.
    pub fn with_view(mut self, s: &'a str) -> Self {
        self.view = Some(s);
        self
    }

    /// Writes string contents verbatim to `fs`. Panics if any field is not a
    /// valid serialization of a real type.
    pub fn to_fs(&self, fs: &base::Fs) {
        fn write<T>(fs: &base::Fs, field: Option<&str>)
        where
            T: std::fmt::Debug + base::fs::Io,
            <T as std::str::FromStr>::Err: std::error::Error,
        {
            if let Some(s) = field {
                let obj = s.parse::<T>();
                assert!(obj.is_ok(), "{:?}", obj);
                std::fs::write(fs.path::<T>(), s).unwrap()
            }
        }

        write::<base::Config>(fs, self.config);
        write::<base::Eventlist>(fs, self.events);
        write::<base::Giftlist>(fs, self.gifts);
        write::<base::ViewState>(fs, self.view);
    }

    pub fn to_state(&self) -> State {
        let mut os = State::new();
        if let Some(s) = self.config {
            os = os.with_config(s);
        }
        if let Some(s) = self.events {
            os = os.with_events(s);
        }
        if let Some(s) = self.gifts {
            os = os.with_gifts(s);
        }
        if let Some(s) = self.view {
            os = os.with_view(s);
        }
        os
    }
}

/// Returns a filesystem object anchored at a temporary directory. The `Fs` must
/// not outlive the returned `TempDir`.
pub fn tempfs() -> (base::Fs, tempfile::TempDir) {
    let td = tempfile::TempDir::new().unwrap();
    let fs = base::Fs::new(td.path());
    (fs, td)
}
