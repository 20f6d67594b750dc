//! Message of the day and on-demand extra messages.
//!
//! The daily message is keyed by UTC calendar date: the first visit of a
//! day picks a random index into the daily pool and persists
//! `(lastMessageDate, todayMessageIndex)`; later visits on the same day show
//! the same message. A missing, unparsable or out-of-range stored index is
//! treated as the first visit of the day.
//!
//! Displayed text always changes through a fade: [`MessageDisplay::show`]
//! hides the element, swaps the text after a short delay, then fades back
//! in.

use std::time::Duration;

use crate::catalog::{MessageCatalog, Pool};
use crate::clock::{date_key, Clock};
use crate::error::ComfortResult;
use crate::page::TimerEvent;
use crate::random::RandomSource;
use crate::scheduler::{Scheduler, TimerId};
use crate::storage::{KeyValueStore, LAST_MESSAGE_DATE_KEY, TODAY_MESSAGE_INDEX_KEY};

/// Label of the generate button at rest.
pub const GENERATE_LABEL: &str = "Generate Message";
/// Label of the generate button while loading.
pub const GENERATING_LABEL: &str = "Generating...";
/// Shown when today's message can't be resolved.
pub const WELCOME_FALLBACK: &str = "Welcome home! 💚";

/// The message chosen for today.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailySelection {
    pub date: String,
    pub index: usize,
    pub message: String,
    /// True when a new index was rolled and persisted by this call.
    pub fresh: bool,
}

/// Pick a uniform message from `pool`.
pub fn roll(random: &dyn RandomSource, catalog: &MessageCatalog, pool: Pool) -> String {
    let messages = catalog.pool(pool);
    messages[random.index(messages.len())].clone()
}

/// Resolve today's message, rolling and persisting a new one when the
/// stored record is for another day or unusable.
pub fn initialize(
    store: &dyn KeyValueStore,
    clock: &dyn Clock,
    random: &dyn RandomSource,
    catalog: &MessageCatalog,
) -> ComfortResult<DailySelection> {
    let today = date_key(clock.today());
    let last_date = store.get(LAST_MESSAGE_DATE_KEY)?;

    if last_date.as_deref() != Some(today.as_str()) {
        return generate_new(store, today, random, catalog);
    }

    let stored = store
        .get(TODAY_MESSAGE_INDEX_KEY)?
        .and_then(|raw| raw.trim().parse::<usize>().ok())
        .and_then(|index| catalog.daily.get(index).map(|message| (index, message)));

    match stored {
        Some((index, message)) => Ok(DailySelection {
            date: today,
            index,
            message: message.clone(),
            fresh: false,
        }),
        None => {
            tracing::debug!("Stored daily index unusable, rolling a new one");
            generate_new(store, today, random, catalog)
        }
    }
}

fn generate_new(
    store: &dyn KeyValueStore,
    today: String,
    random: &dyn RandomSource,
    catalog: &MessageCatalog,
) -> ComfortResult<DailySelection> {
    let index = random.index(catalog.daily.len());

    store.set(LAST_MESSAGE_DATE_KEY, &today)?;
    store.set(TODAY_MESSAGE_INDEX_KEY, &index.to_string())?;

    tracing::info!("New daily message for {}: index {}", today, index);

    Ok(DailySelection {
        date: today,
        index,
        message: catalog.daily[index].clone(),
        fresh: true,
    })
}

/// Fade phase of the message element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayPhase {
    /// Nothing shown yet.
    Empty,
    /// Hidden, waiting for the text swap.
    FadingOut,
    /// Text visible (fading in or fully shown).
    Shown,
}

/// The message element with its fade-out / swap / fade-in sequence.
#[derive(Debug)]
pub struct MessageDisplay {
    text: String,
    phase: DisplayPhase,
    pending: Option<(TimerId, String)>,
}

impl Default for MessageDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageDisplay {
    pub fn new() -> Self {
        Self {
            text: String::new(),
            phase: DisplayPhase::Empty,
            pending: None,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn phase(&self) -> DisplayPhase {
        self.phase
    }

    /// Opacity the element should have right now.
    pub fn opacity(&self) -> f32 {
        match self.phase {
            DisplayPhase::Shown => 1.0,
            DisplayPhase::Empty | DisplayPhase::FadingOut => 0.0,
        }
    }

    /// Start showing `message`. A swap already in flight is replaced.
    pub fn show(
        &mut self,
        scheduler: &mut Scheduler<TimerEvent>,
        swap_after: Duration,
        message: String,
    ) {
        if let Some((previous, _)) = self.pending.take() {
            scheduler.cancel(previous);
        }

        self.phase = DisplayPhase::FadingOut;
        let id = scheduler.schedule_after(swap_after, TimerEvent::MessageSwap);
        self.pending = Some((id, message));
    }

    /// The swap delay elapsed.
    pub fn swap(&mut self, fired: TimerId) -> bool {
        match self.pending.take() {
            Some((id, message)) if id == fired => {
                self.text = message;
                self.phase = DisplayPhase::Shown;
                true
            }
            other => {
                self.pending = other;
                false
            }
        }
    }
}

/// The generate button: disabled with a loading label for a short while
/// after each press.
#[derive(Debug)]
pub struct GenerateButton {
    loading: Option<(TimerId, String)>,
}

impl Default for GenerateButton {
    fn default() -> Self {
        Self::new()
    }
}

impl GenerateButton {
    pub fn new() -> Self {
        Self { loading: None }
    }

    pub fn is_loading(&self) -> bool {
        self.loading.is_some()
    }

    pub fn label(&self) -> &'static str {
        if self.is_loading() {
            GENERATING_LABEL
        } else {
            GENERATE_LABEL
        }
    }

    /// Press with an already-rolled message. Ignored while loading.
    pub fn press(
        &mut self,
        scheduler: &mut Scheduler<TimerEvent>,
        delay: Duration,
        message: String,
    ) -> bool {
        if self.is_loading() {
            return false;
        }
        let id = scheduler.schedule_after(delay, TimerEvent::GenerateSettled);
        self.loading = Some((id, message));
        true
    }

    /// Loading period elapsed; returns the message to display.
    pub fn settle(&mut self, fired: TimerId) -> Option<String> {
        match self.loading.take() {
            Some((id, message)) if id == fired => Some(message),
            other => {
                self.loading = other;
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::random::ScriptedRandom;
    use crate::storage::MemoryStore;

    fn catalog() -> MessageCatalog {
        MessageCatalog {
            daily: vec!["A".into(), "B".into()],
            extra: vec!["X".into()],
            comfort: vec!["Y".into()],
        }
    }

    #[test]
    fn test_first_visit_rolls_and_persists() {
        let store = MemoryStore::new();
        let clock = FixedClock::at("2024-05-01");
        let random = ScriptedRandom::with_indices([1]);

        let selection = initialize(&store, &clock, &random, &catalog()).unwrap();
        assert!(selection.fresh);
        assert_eq!(selection.index, 1);
        assert_eq!(selection.message, "B");
        assert_eq!(store.get(LAST_MESSAGE_DATE_KEY).unwrap().as_deref(), Some("2024-05-01"));
        assert_eq!(store.get(TODAY_MESSAGE_INDEX_KEY).unwrap().as_deref(), Some("1"));
    }

    #[test]
    fn test_same_day_reuses_index() {
        let store = MemoryStore::new();
        let clock = FixedClock::at("2024-05-01");
        let random = ScriptedRandom::with_indices([1, 0]);

        let first = initialize(&store, &clock, &random, &catalog()).unwrap();
        let second = initialize(&store, &clock, &random, &catalog()).unwrap();
        assert!(!second.fresh);
        assert_eq!(first.message, second.message);
    }

    #[test]
    fn test_new_day_rolls_again() {
        let store = MemoryStore::new();
        let clock = FixedClock::at("2024-05-01");
        let random = ScriptedRandom::with_indices([1, 0]);

        initialize(&store, &clock, &random, &catalog()).unwrap();
        clock.advance_days(1);
        let next = initialize(&store, &clock, &random, &catalog()).unwrap();

        assert!(next.fresh);
        assert_eq!(next.index, 0);
        assert_eq!(store.get(LAST_MESSAGE_DATE_KEY).unwrap().as_deref(), Some("2024-05-02"));
        assert_eq!(store.get(TODAY_MESSAGE_INDEX_KEY).unwrap().as_deref(), Some("0"));
    }

    #[test]
    fn test_out_of_range_index_regenerates() {
        let store = MemoryStore::new();
        store.set(LAST_MESSAGE_DATE_KEY, "2024-05-01").unwrap();
        store.set(TODAY_MESSAGE_INDEX_KEY, "7").unwrap();
        let clock = FixedClock::at("2024-05-01");
        let random = ScriptedRandom::with_indices([0]);

        let selection = initialize(&store, &clock, &random, &catalog()).unwrap();
        assert!(selection.fresh);
        assert_eq!(selection.message, "A");
        assert_eq!(store.get(TODAY_MESSAGE_INDEX_KEY).unwrap().as_deref(), Some("0"));
    }

    #[test]
    fn test_missing_or_garbage_index_regenerates() {
        let clock = FixedClock::at("2024-05-01");
        for stored in [None, Some("abc"), Some("-1")] {
            let store = MemoryStore::new();
            store.set(LAST_MESSAGE_DATE_KEY, "2024-05-01").unwrap();
            if let Some(raw) = stored {
                store.set(TODAY_MESSAGE_INDEX_KEY, raw).unwrap();
            }

            let random = ScriptedRandom::with_indices([1]);
            let selection = initialize(&store, &clock, &random, &catalog()).unwrap();
            assert!(selection.fresh, "stored index {stored:?} should regenerate");
            assert_eq!(selection.message, "B");
        }
    }

    #[test]
    fn test_display_fades_then_swaps() {
        let mut scheduler = Scheduler::new();
        let mut display = MessageDisplay::new();
        assert_eq!(display.phase(), DisplayPhase::Empty);

        display.show(&mut scheduler, Duration::from_millis(300), "hello".into());
        assert_eq!(display.opacity(), 0.0);
        assert_eq!(display.text(), "");

        let (fired, _) = scheduler.pop_due(Duration::from_millis(300)).unwrap();
        assert!(display.swap(fired));
        assert_eq!(display.text(), "hello");
        assert_eq!(display.opacity(), 1.0);
    }

    #[test]
    fn test_overlapping_show_keeps_latest() {
        let mut scheduler = Scheduler::new();
        let mut display = MessageDisplay::new();

        display.show(&mut scheduler, Duration::from_millis(300), "first".into());
        scheduler.advance_to(Duration::from_millis(100));
        display.show(&mut scheduler, Duration::from_millis(300), "second".into());

        assert_eq!(scheduler.pending(), 1);
        let (fired, _) = scheduler.pop_due(Duration::from_secs(1)).unwrap();
        assert!(display.swap(fired));
        assert_eq!(display.text(), "second");
    }

    #[test]
    fn test_generate_button_ignores_presses_while_loading() {
        let mut scheduler = Scheduler::new();
        let mut button = GenerateButton::new();
        assert_eq!(button.label(), GENERATE_LABEL);

        assert!(button.press(&mut scheduler, Duration::from_millis(600), "X".into()));
        assert!(!button.press(&mut scheduler, Duration::from_millis(600), "Z".into()));
        assert_eq!(button.label(), GENERATING_LABEL);

        let (fired, event) = scheduler.pop_due(Duration::from_millis(600)).unwrap();
        assert_eq!(event, TimerEvent::GenerateSettled);
        assert_eq!(button.settle(fired).as_deref(), Some("X"));
        assert!(!button.is_loading());
    }
}
