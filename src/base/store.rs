//! Record store for events and their gift records.
//!
//! Both collections are loaded once when the store is opened and written back
//! in full after every change. A change only becomes visible in memory once
//! it has been persisted, so a failed write leaves the store as it was.
//!
//! Consumers interested in an event's record set register with
//! [`Store::subscribe`] and receive the refreshed list after each durable
//! write that affects the event.

use std::sync::mpsc;

use crate::base;
use crate::base::fs::Io;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to read '{}'", path.display())]
    Read {
        path: std::path::PathBuf,
        source: base::fs::ReadError,
    },
    #[error("failed to write '{}'", path.display())]
    Write {
        path: std::path::PathBuf,
        source: std::io::Error,
    },
    #[error("nonexistent event {0}")]
    NoSuchEvent(base::EventId),
    #[error("nonexistent gift record {0}")]
    NoSuchRecord(base::GiftId),
}

pub struct Store<'a> {
    fs: &'a base::Fs,
    events: base::Eventlist,
    gifts: base::Giftlist,
    watchers: Vec<(base::EventId, mpsc::Sender<Vec<base::GiftRecord>>)>,
}

impl<'a> Store<'a> {
    pub fn open(fs: &'a base::Fs) -> Result<Self, StoreError> {
        Ok(Self {
            fs,
            events: read(fs)?,
            gifts: read(fs)?,
            watchers: Vec::new(),
        })
    }

    pub fn list_events(&self) -> &[base::Event] {
        self.events.as_slice()
    }

    pub fn event(&self, id: base::EventId) -> Option<&base::Event> {
        self.events.get(id)
    }

    /// Returns the records belonging to the given event in store order.
    /// Returns nothing for an event that does not exist, even if records
    /// still reference it.
    pub fn list_records(&self, event_id: base::EventId) -> Vec<&base::GiftRecord> {
        if self.events.get(event_id).is_none() {
            return Vec::new();
        }
        self.gifts
            .iter()
            .filter(|r| r.event_id() == event_id)
            .collect()
    }

    pub fn record(&self, id: base::GiftId) -> Option<&base::GiftRecord> {
        self.gifts.get(id)
    }

    pub fn create_event(&mut self, draft: base::EventDraft) -> Result<base::EventId, StoreError> {
        let mut events = self.events.clone();
        let id = events.next_key();
        events.push(base::Event::new(id, draft, base::Timestamp::now()));
        persist(self.fs, &events)?;
        self.events = events;
        tracing::info!(event = id, "created event");
        Ok(id)
    }

    pub fn create_record(&mut self, draft: base::GiftDraft) -> Result<base::GiftId, StoreError> {
        let event_id = draft.event_id;
        if self.events.get(event_id).is_none() {
            return Err(StoreError::NoSuchEvent(event_id));
        }
        let mut gifts = self.gifts.clone();
        let id = gifts.next_key();
        gifts.push(base::GiftRecord::new(id, draft, base::Timestamp::now()));
        self.commit(gifts, event_id)?;
        tracing::info!(event = event_id, record = id, "created gift record");
        Ok(id)
    }

    pub fn update_record(
        &mut self,
        id: base::GiftId,
        patch: base::GiftPatch,
    ) -> Result<(), StoreError> {
        let mut gifts = self.gifts.clone();
        let r = gifts.get_mut(id).ok_or(StoreError::NoSuchRecord(id))?;
        r.apply(patch);
        let event_id = r.event_id();
        self.commit(gifts, event_id)?;
        tracing::info!(event = event_id, record = id, "updated gift record");
        Ok(())
    }

    pub fn delete_record(&mut self, id: base::GiftId) -> Result<base::GiftRecord, StoreError> {
        let mut gifts = self.gifts.clone();
        let removed = gifts.remove(id).ok_or(StoreError::NoSuchRecord(id))?;
        self.commit(gifts, removed.event_id())?;
        tracing::info!(event = removed.event_id(), record = id, "deleted gift record");
        Ok(removed)
    }

    /// Registers interest in an event's record set. After every successful
    /// write affecting the event, the full refreshed list is sent to the
    /// returned receiver. Dropping the receiver ends the subscription.
    pub fn subscribe(&mut self, event_id: base::EventId) -> mpsc::Receiver<Vec<base::GiftRecord>> {
        let (tx, rx) = mpsc::channel();
        self.watchers.push((event_id, tx));
        rx
    }

    fn commit(&mut self, gifts: base::Giftlist, event_id: base::EventId) -> Result<(), StoreError> {
        persist(self.fs, &gifts)?;
        self.gifts = gifts;
        self.notify(event_id);
        Ok(())
    }

    fn notify(&mut self, event_id: base::EventId) {
        let records = self
            .list_records(event_id)
            .into_iter()
            .cloned()
            .collect::<Vec<_>>();
        self.watchers.retain(|(id, tx)| {
            if *id != event_id {
                return true;
            }
            let delivered = tx.send(records.clone()).is_ok();
            if !delivered {
                tracing::debug!(event = event_id, "dropping closed subscription");
            }
            delivered
        });
    }
}

fn read<T>(fs: &base::Fs) -> Result<T, StoreError>
where
    T: Io,
    <T as std::str::FromStr>::Err: std::error::Error + Send + Sync + 'static,
{
    fs.read::<T>().map_err(|source| StoreError::Read {
        path: fs.path::<T>(),
        source,
    })
}

/// Writes `obj`, retrying once before reporting failure.
fn persist<T>(fs: &base::Fs, obj: &T) -> Result<(), StoreError>
where
    T: Io,
{
    if let Err(e) = fs.write(obj) {
        let path = fs.path::<T>();
        tracing::warn!(path = %path.display(), error = %e, "write failed, retrying");
        fs.write(obj)
            .map_err(|source| StoreError::Write { path, source })?;
    }
    Ok(())
}
