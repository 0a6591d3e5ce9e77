use super::locale::Locale;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Persistence slot for the active locale code. The browser implementation
/// writes a single localStorage key; tests inject an in-memory slot.
pub trait LocaleSlot {
    fn load(&self) -> Option<String>;
    fn save(&self, code: &str);
}

pub type SubscriptionId = usize;

type Subscriber = Rc<dyn Fn(Locale)>;

/// Process-wide holder of the active locale.
///
/// Single-threaded by design: writes happen on the UI event loop and
/// subscribers are notified synchronously within the same turn as the write.
/// Consumers must not render translated text until [`LocaleStore::is_ready`]
/// reports true, so the persisted locale never flashes to another one.
pub struct LocaleStore {
    slot: Box<dyn LocaleSlot>,
    active: Cell<Locale>,
    ready: Cell<bool>,
    next_id: Cell<SubscriptionId>,
    subscribers: RefCell<Vec<(SubscriptionId, Subscriber)>>,
}

impl LocaleStore {
    #[must_use]
    pub fn new(slot: Box<dyn LocaleSlot>) -> Self {
        Self {
            slot,
            active: Cell::new(Locale::default()),
            ready: Cell::new(false),
            next_id: Cell::new(0),
            subscribers: RefCell::new(Vec::new()),
        }
    }

    /// Adopt the persisted locale if it names a supported one, else keep the
    /// default. A garbage value in the slot never corrupts the store.
    pub fn init(&self) {
        if let Some(code) = self.slot.load() {
            if let Some(locale) = Locale::from_code(&code) {
                self.active.set(locale);
            }
        }
        self.ready.set(true);
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.ready.get()
    }

    #[must_use]
    pub fn get(&self) -> Locale {
        self.active.get()
    }

    /// Activate `next`, persist it, and notify subscribers synchronously.
    pub fn set(&self, next: Locale) {
        self.active.set(next);
        self.slot.save(next.code());
        self.notify(next);
    }

    /// Validate and activate a raw locale code. Unsupported codes are a
    /// silent no-op so bad input can never reach the persisted slot.
    pub fn set_code(&self, code: &str) {
        match Locale::from_code(code) {
            Some(locale) => self.set(locale),
            None => log::warn!("ignoring unsupported locale code {code:?}"),
        }
    }

    pub fn subscribe(&self, callback: impl Fn(Locale) + 'static) -> SubscriptionId {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.subscribers
            .borrow_mut()
            .push((id, Rc::new(callback)));
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.subscribers
            .borrow_mut()
            .retain(|(sub_id, _)| *sub_id != id);
    }

    fn notify(&self, locale: Locale) {
        // Snapshot first so a subscriber may re-enter the store.
        let current: Vec<Subscriber> = self
            .subscribers
            .borrow()
            .iter()
            .map(|(_, cb)| Rc::clone(cb))
            .collect();
        for callback in current {
            callback(locale);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MemorySlot {
        value: RefCell<Option<String>>,
    }

    impl MemorySlot {
        fn with(value: Option<&str>) -> Rc<Self> {
            Rc::new(Self {
                value: RefCell::new(value.map(str::to_string)),
            })
        }
    }

    impl LocaleSlot for Rc<MemorySlot> {
        fn load(&self) -> Option<String> {
            self.value.borrow().clone()
        }
        fn save(&self, code: &str) {
            *self.value.borrow_mut() = Some(code.to_string());
        }
    }

    #[test]
    fn init_adopts_persisted_locale() {
        let slot = MemorySlot::with(Some("th"));
        let store = LocaleStore::new(Box::new(Rc::clone(&slot)));
        assert!(!store.is_ready());
        store.init();
        assert!(store.is_ready());
        assert_eq!(store.get(), Locale::Th);
    }

    #[test]
    fn init_ignores_garbage_in_slot() {
        let slot = MemorySlot::with(Some("klingon"));
        let store = LocaleStore::new(Box::new(Rc::clone(&slot)));
        store.init();
        assert_eq!(store.get(), Locale::En);
        // The slot itself is left untouched at load time.
        assert_eq!(slot.value.borrow().as_deref(), Some("klingon"));
    }

    #[test]
    fn set_persists_and_notifies_synchronously() {
        let slot = MemorySlot::with(None);
        let store = LocaleStore::new(Box::new(Rc::clone(&slot)));
        store.init();

        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        store.subscribe(move |locale| sink.borrow_mut().push(locale));

        store.set(Locale::Zh);
        // Notification happened within the same turn as the write.
        assert_eq!(*seen.borrow(), vec![Locale::Zh]);
        assert_eq!(slot.value.borrow().as_deref(), Some("zh"));
    }

    #[test]
    fn set_code_rejects_unsupported_input() {
        let slot = MemorySlot::with(None);
        let store = LocaleStore::new(Box::new(Rc::clone(&slot)));
        store.init();
        store.set_code("xx");
        assert_eq!(store.get(), Locale::En);
        assert_eq!(*slot.value.borrow(), None);

        store.set_code("zh");
        assert_eq!(store.get(), Locale::Zh);
    }

    #[test]
    fn unsubscribe_stops_delivery() {
        let store = LocaleStore::new(Box::new(MemorySlot::with(None)));
        store.init();

        let seen = Rc::new(Cell::new(0));
        let sink = Rc::clone(&seen);
        let id = store.subscribe(move |_| sink.set(sink.get() + 1));

        store.set(Locale::Th);
        store.unsubscribe(id);
        store.set(Locale::En);
        assert_eq!(seen.get(), 1);
    }
}
