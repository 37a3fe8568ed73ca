use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

/// A sensor held over a barcode emits the same decoded value many times per
/// second; anything inside this window is noise from one physical scan.
pub const DEBOUNCE_WINDOW: Duration = Duration::from_millis(3000);

/// Single-slot debounce: remembers exactly one `(identifier, timestamp)`
/// pair, not a history. This is not a rate limiter: a different identifier
/// always passes immediately.
#[derive(Debug)]
pub struct ScanDebouncer {
    window: Duration,
    last: Option<(String, Instant)>,
}

impl Default for ScanDebouncer {
    fn default() -> Self {
        Self::new(DEBOUNCE_WINDOW)
    }
}

impl ScanDebouncer {
    pub fn new(window: Duration) -> Self {
        ScanDebouncer { window, last: None }
    }

    /// Decide whether to process `identifier` as of `now`. A repeat of the
    /// remembered identifier inside the window is discarded and the slot is
    /// left untouched, so a continuously held trigger keeps dying here
    /// instead of sliding the window forward.
    pub fn accept_at(&mut self, identifier: &str, now: Instant) -> bool {
        if let Some((last_id, last_at)) = &self.last {
            if last_id == identifier && now.duration_since(*last_at) < self.window {
                return false;
            }
        }
        self.last = Some((identifier.to_string(), now));
        true
    }

    pub fn accept(&mut self, identifier: &str) -> bool {
        self.accept_at(identifier, Instant::now())
    }

    /// An idle slot (empty, or last accepted a full window ago) decides every
    /// future scan exactly like a fresh one, so it can be dropped without
    /// changing any debounce decision.
    fn is_idle_at(&self, now: Instant) -> bool {
        match &self.last {
            None => true,
            Some((_, last_at)) => now.duration_since(*last_at) >= self.window,
        }
    }
}

/// Station ids come from request bodies, so the slot map cannot be trusted to
/// stay small on its own. Once it reaches this many entries, idle slots are
/// evicted before a new station is admitted.
pub const STATION_CAP: usize = 64;

/// One debounce slot per physical scan station. Two stations pointing at the
/// same badge are deliberately not mutually debounced; the attendance table's
/// unique index is the source of truth for "already checked in".
#[derive(Default)]
pub struct ScanStations {
    slots: Mutex<HashMap<String, ScanDebouncer>>,
}

impl ScanStations {
    pub fn accept(&self, station: &str, identifier: &str) -> bool {
        self.accept_at(station, identifier, Instant::now())
    }

    pub fn accept_at(&self, station: &str, identifier: &str, now: Instant) -> bool {
        let mut slots = self.slots.lock().unwrap_or_else(|e| e.into_inner());
        if slots.len() >= STATION_CAP && !slots.contains_key(station) {
            slots.retain(|_, slot| !slot.is_idle_at(now));
        }
        slots
            .entry(station.to_string())
            .or_default()
            .accept_at(identifier, now)
    }

    pub fn station_count(&self) -> usize {
        self.slots.lock().unwrap_or_else(|e| e.into_inner()).len()
    }
}
