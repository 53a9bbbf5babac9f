use colored::Colorize;
use std::rc::Rc;
use thiserror::Error;

// =============================================================================
// Milestone 1: Listener capability and display variants
// =============================================================================

/// One capability: take the new match status and react to it.
pub trait ScoreListener {
    fn receive(&self, status: &str);
}

pub struct TvDisplay {
    channel: String,
}

impl TvDisplay {
    pub fn new(channel: impl Into<String>) -> Self {
        Self {
            channel: channel.into(),
        }
    }

    pub fn render(&self, status: &str) -> String {
        format!("{} on TV: Match Update - {status}", self.channel)
    }
}

impl ScoreListener for TvDisplay {
    fn receive(&self, status: &str) {
        println!("{}", self.render(status));
    }
}

pub struct StreamingApp {
    app: String,
}

impl StreamingApp {
    pub fn new(app: impl Into<String>) -> Self {
        Self { app: app.into() }
    }

    pub fn render(&self, status: &str) -> String {
        format!("{} app: Match Update - {status}", self.app)
    }
}

impl ScoreListener for StreamingApp {
    fn receive(&self, status: &str) {
        println!("{}", self.render(status));
    }
}

/// Label-free variant: echoes the raw status, nothing else.
pub struct SearchCard;

impl SearchCard {
    pub fn render(&self, status: &str) -> String {
        status.to_string()
    }
}

impl ScoreListener for SearchCard {
    fn receive(&self, status: &str) {
        println!("{}", self.render(status));
    }
}

// =============================================================================
// Milestone 2: The live match feed (subject)
// =============================================================================

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatchFeedError {
    #[error("no score has been published yet")]
    NoScoreYet,
}

/// Holds the current match status and the viewers to push it to.
///
/// Listeners are shared handles: the feed never owns them, and the same
/// handle may be registered twice (both registrations get notified).
#[derive(Default)]
pub struct LiveMatch {
    listeners: Vec<Rc<dyn ScoreListener>>,
    status: Option<String>,
}

impl LiveMatch {
    pub fn new() -> Self {
        Self {
            listeners: Vec::new(),
            status: None,
        }
    }

    /// Appends `listener`; notification order is registration order.
    pub fn register(&mut self, listener: Rc<dyn ScoreListener>) {
        self.listeners.push(listener);
    }

    /// Removes the first occurrence of `listener`, matched by handle
    /// identity rather than value. Unknown listeners are ignored.
    pub fn unregister(&mut self, listener: &Rc<dyn ScoreListener>) {
        if let Some(pos) = self
            .listeners
            .iter()
            .position(|registered| Rc::ptr_eq(registered, listener))
        {
            self.listeners.remove(pos);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Stores the new status, then synchronously pushes it to every
    /// listener registered at this moment, in registration order.
    pub fn update_score(&mut self, status: impl Into<String>) {
        let status = status.into();
        self.status = Some(status.clone());
        self.broadcast(&status);
    }

    /// Re-sends the current status. Errors if no update has happened yet.
    pub fn notify(&self) -> Result<(), MatchFeedError> {
        let status = self.status.as_deref().ok_or(MatchFeedError::NoScoreYet)?;
        self.broadcast(status);
        Ok(())
    }

    fn broadcast(&self, status: &str) {
        for listener in &self.listeners {
            listener.receive(status);
        }
    }
}

// =============================================================================
// Milestone 3: Broadcast scenario
// =============================================================================

fn main() {
    let mut feed = LiveMatch::new();

    let tv: Rc<dyn ScoreListener> = Rc::new(TvDisplay::new("Star Sports"));
    let app: Rc<dyn ScoreListener> = Rc::new(StreamingApp::new("JioCinema"));
    let search: Rc<dyn ScoreListener> = Rc::new(SearchCard);

    feed.register(Rc::clone(&tv));
    feed.register(Rc::clone(&app));
    feed.register(Rc::clone(&search));

    println!("{}", "=== First Match Update ===".bold().cyan());
    feed.update_score("CSK: 150/3 IN 18 OVERS");

    println!("\n{}", "=== Second Match Update ===".bold().cyan());
    feed.update_score("CSK: 180/4 IN 20 OVERS");

    // The search card drops out; the remaining two keep getting updates.
    feed.unregister(&search);

    println!("\n{}", "=== Final Match Update ===".bold().cyan());
    feed.update_score("CSK WON BY 20 RUNS");

    println!(
        "\n{} {}",
        "Feed closed with".green(),
        format!("{} listeners still registered", feed.listener_count()).green()
    );
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Appends every delivery to a shared log so ordering and delivery
    /// can be asserted without capturing stdout.
    struct RecordingListener {
        label: &'static str,
        log: Rc<RefCell<Vec<String>>>,
    }

    impl RecordingListener {
        fn new(label: &'static str, log: &Rc<RefCell<Vec<String>>>) -> Rc<dyn ScoreListener> {
            Rc::new(Self {
                label,
                log: Rc::clone(log),
            })
        }
    }

    impl ScoreListener for RecordingListener {
        fn receive(&self, status: &str) {
            self.log.borrow_mut().push(format!("{}: {status}", self.label));
        }
    }

    fn shared_log() -> Rc<RefCell<Vec<String>>> {
        Rc::new(RefCell::new(Vec::new()))
    }

    #[test]
    fn test_notification_order_matches_registration_order() {
        let log = shared_log();
        let mut feed = LiveMatch::new();
        feed.register(RecordingListener::new("a", &log));
        feed.register(RecordingListener::new("b", &log));
        feed.register(RecordingListener::new("c", &log));

        feed.update_score("10/0");

        assert_eq!(*log.borrow(), vec!["a: 10/0", "b: 10/0", "c: 10/0"]);
    }

    #[test]
    fn test_update_score_stores_status_verbatim() {
        let mut feed = LiveMatch::new();
        assert_eq!(feed.status(), None);

        feed.update_score("CSK: 150/3 IN 18 OVERS");
        assert_eq!(feed.status(), Some("CSK: 150/3 IN 18 OVERS"));
    }

    #[test]
    fn test_unregistered_listener_is_not_invoked() {
        let log = shared_log();
        let mut feed = LiveMatch::new();
        let a = RecordingListener::new("a", &log);
        let b = RecordingListener::new("b", &log);
        feed.register(Rc::clone(&a));
        feed.register(Rc::clone(&b));

        feed.unregister(&a);
        feed.update_score("50/1");

        assert_eq!(*log.borrow(), vec!["b: 50/1"]);
    }

    #[test]
    fn test_unregister_unknown_listener_is_a_no_op() {
        let log = shared_log();
        let mut feed = LiveMatch::new();
        let registered = RecordingListener::new("in", &log);
        let stranger = RecordingListener::new("out", &log);
        feed.register(Rc::clone(&registered));

        feed.unregister(&stranger);

        assert_eq!(feed.listener_count(), 1);
        feed.update_score("99/2");
        assert_eq!(*log.borrow(), vec!["in: 99/2"]);
    }

    #[test]
    fn test_unregister_is_idempotent() {
        let log = shared_log();
        let mut feed = LiveMatch::new();
        let a = RecordingListener::new("a", &log);
        let b = RecordingListener::new("b", &log);
        feed.register(Rc::clone(&a));
        feed.register(Rc::clone(&b));

        feed.unregister(&a);
        feed.unregister(&a);

        feed.update_score("done");
        assert_eq!(*log.borrow(), vec!["b: done"]);
    }

    #[test]
    fn test_duplicate_registration_is_notified_twice() {
        let log = shared_log();
        let mut feed = LiveMatch::new();
        let a = RecordingListener::new("a", &log);
        feed.register(Rc::clone(&a));
        feed.register(Rc::clone(&a));

        feed.update_score("tied");
        assert_eq!(*log.borrow(), vec!["a: tied", "a: tied"]);

        // Removing strips one occurrence; the other keeps listening.
        feed.unregister(&a);
        feed.update_score("over");
        assert_eq!(log.borrow().last().map(String::as_str), Some("a: over"));
        assert_eq!(feed.listener_count(), 1);
    }

    #[test]
    fn test_notify_before_first_update_errors() {
        let feed = LiveMatch::new();
        assert_eq!(feed.notify(), Err(MatchFeedError::NoScoreYet));
    }

    #[test]
    fn test_notify_resends_current_status() {
        let log = shared_log();
        let mut feed = LiveMatch::new();
        feed.register(RecordingListener::new("a", &log));

        feed.update_score("120/5");
        feed.notify().unwrap();

        assert_eq!(*log.borrow(), vec!["a: 120/5", "a: 120/5"]);
    }

    #[test]
    fn test_listener_survives_unregistration() {
        let log = shared_log();
        let mut feed = LiveMatch::new();
        let a = RecordingListener::new("a", &log);
        feed.register(Rc::clone(&a));
        feed.unregister(&a);

        // The handle is still alive and usable outside the feed.
        a.receive("direct");
        assert_eq!(*log.borrow(), vec!["a: direct"]);
    }

    #[test]
    fn test_one_listener_on_two_feeds() {
        let log = shared_log();
        let a = RecordingListener::new("a", &log);

        let mut first = LiveMatch::new();
        let mut second = LiveMatch::new();
        first.register(Rc::clone(&a));
        second.register(Rc::clone(&a));

        first.update_score("feed one");
        second.update_score("feed two");

        assert_eq!(*log.borrow(), vec!["a: feed one", "a: feed two"]);
    }

    #[test]
    fn test_display_variant_rendering() {
        let tv = TvDisplay::new("Star Sports");
        let app = StreamingApp::new("JioCinema");
        let search = SearchCard;

        assert_eq!(
            tv.render("CSK WON BY 20 RUNS"),
            "Star Sports on TV: Match Update - CSK WON BY 20 RUNS"
        );
        assert_eq!(
            app.render("CSK WON BY 20 RUNS"),
            "JioCinema app: Match Update - CSK WON BY 20 RUNS"
        );
        assert_eq!(search.render("CSK WON BY 20 RUNS"), "CSK WON BY 20 RUNS");
    }

    #[test]
    fn test_acceptance_scenario() {
        let log = shared_log();
        let mut feed = LiveMatch::new();
        let tv = RecordingListener::new("Star Sports", &log);
        let app = RecordingListener::new("JioCinema", &log);
        let search = RecordingListener::new("Search", &log);

        feed.register(Rc::clone(&tv));
        feed.register(Rc::clone(&app));
        feed.register(Rc::clone(&search));

        feed.update_score("CSK: 150/3 IN 18 OVERS");
        feed.update_score("CSK: 180/4 IN 20 OVERS");
        feed.unregister(&search);
        feed.update_score("CSK WON BY 20 RUNS");

        assert_eq!(
            *log.borrow(),
            vec![
                "Star Sports: CSK: 150/3 IN 18 OVERS",
                "JioCinema: CSK: 150/3 IN 18 OVERS",
                "Search: CSK: 150/3 IN 18 OVERS",
                "Star Sports: CSK: 180/4 IN 20 OVERS",
                "JioCinema: CSK: 180/4 IN 20 OVERS",
                "Search: CSK: 180/4 IN 20 OVERS",
                "Star Sports: CSK WON BY 20 RUNS",
                "JioCinema: CSK WON BY 20 RUNS",
            ]
        );
    }
}
