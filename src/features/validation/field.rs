//! Per-field validation state machine. Keystrokes recompute the synchronous
//! rules immediately; uniqueness is asked of the server through a debounced
//! availability query. Every scheduled query carries a generation number and
//! both the timer callback and the settled response re-check it against the
//! field's current generation, so a superseded query can neither fire nor
//! publish a verdict over a newer one.

use leptos::prelude::*;

use crate::features::auth::{
    client,
    types::{AvailabilityKind, AvailabilityResponse},
};
use crate::features::validation::rules::{self, FieldKind, FieldRules};

/// Quiet period before an availability query fires.
#[cfg(target_arch = "wasm32")]
const AVAILABILITY_DEBOUNCE_MS: u32 = 500;
/// Values shorter than this are never sent to the server.
const MIN_AVAILABILITY_CHARS: usize = 3;

/// Reactive state for one validated form field. Cheap to copy; all handles
/// point into the reactive arena.
#[derive(Clone, Copy)]
pub struct FieldState {
    pub value: RwSignal<String>,
    /// First failing rule message, or the server's unavailable message.
    pub error: RwSignal<Option<String>>,
    /// Meaningful only for fields that request availability checking.
    pub is_available: RwSignal<bool>,
    pub is_checking: RwSignal<bool>,
    pub is_dirty: RwSignal<bool>,
    rules: FieldRules,
    check_availability: bool,
    /// Advances on every keystroke of an availability-checked field; a query
    /// may only fire and publish while its generation is still current.
    generation: StoredValue<u64>,
    #[cfg(target_arch = "wasm32")]
    pending_timer: StoredValue<Option<gloo_timers::callback::Timeout>, LocalStorage>,
}

impl FieldState {
    pub fn new(rules: FieldRules, check_availability: bool) -> Self {
        Self {
            value: RwSignal::new(String::new()),
            error: RwSignal::new(None),
            is_available: RwSignal::new(true),
            is_checking: RwSignal::new(false),
            is_dirty: RwSignal::new(false),
            rules,
            check_availability,
            generation: StoredValue::new(0),
            #[cfg(target_arch = "wasm32")]
            pending_timer: StoredValue::new_local(None),
        }
    }

    /// Handles one keystroke: the field becomes dirty, the synchronous rules
    /// rerun, and any pending availability query is superseded.
    pub fn on_input(&self, next: &str) {
        self.value.set(next.to_string());
        self.is_dirty.set(true);
        self.error.set(rules::first_error(next, &self.rules));
        self.schedule_availability_check(next);
    }

    /// Whether this field asks the server about uniqueness at all; drives the
    /// inline status indicator.
    pub fn checks_availability(&self) -> bool {
        self.check_availability
    }

    /// Submit-time gate over the synchronous rules. Marks the field dirty so
    /// untouched fields report their errors too. Availability is a separate
    /// signal that submit flows combine with this result.
    pub fn validate(&self) -> bool {
        self.is_dirty.set(true);
        let error = rules::first_error(&self.value.get_untracked(), &self.rules);
        let valid = error.is_none();
        self.error.set(error);
        valid
    }

    fn schedule_availability_check(&self, value: &str) {
        if !self.check_availability {
            return;
        }

        // Supersede whatever was scheduled or in flight for this field.
        let generation = self.generation.get_value() + 1;
        self.generation.set_value(generation);

        if value.chars().count() < MIN_AVAILABILITY_CHARS {
            self.cancel_pending_timer();
            return;
        }

        self.arm_timer(generation);
    }

    #[cfg(target_arch = "wasm32")]
    fn arm_timer(&self, generation: u64) {
        use gloo_timers::callback::Timeout;

        let state = *self;
        let timer = Timeout::new(AVAILABILITY_DEBOUNCE_MS, move || {
            leptos::task::spawn_local(state.run_availability_check(generation));
        });
        self.pending_timer.update_value(|slot| {
            if let Some(previous) = slot.replace(timer) {
                previous.cancel();
            }
        });
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn arm_timer(&self, _generation: u64) {}

    #[cfg(target_arch = "wasm32")]
    fn cancel_pending_timer(&self) {
        self.pending_timer.update_value(|slot| {
            if let Some(previous) = slot.take() {
                previous.cancel();
            }
        });
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn cancel_pending_timer(&self) {}

    /// Timer-fire entry point. Bails out up front when superseded, short, or
    /// not an availability kind; re-checks the generation after the response
    /// settles before publishing anything.
    async fn run_availability_check(self, generation: u64) {
        if self.generation.get_value() != generation {
            return;
        }
        let value = self.value.get_untracked();
        if value.chars().count() < MIN_AVAILABILITY_CHARS {
            return;
        }
        let Some(kind) = availability_kind(self.rules.kind) else {
            return;
        };

        self.is_checking.set(true);
        let result = client::check_availability(kind, &value).await;

        if self.generation.get_value() == generation {
            match result {
                Ok(response) => self.apply_verdict(kind, &value, response),
                Err(err) => {
                    // Connectivity loss must not block the form; the
                    // synchronous rules remain the source of truth.
                    log::warn!("Availability check for {value:?} failed: {err}");
                }
            }
        }
        self.is_checking.set(false);
    }

    fn apply_verdict(&self, kind: AvailabilityKind, value: &str, response: AvailabilityResponse) {
        self.is_available.set(response.available);
        if response.available {
            // Clear an earlier unavailable message but keep any synchronous
            // rule failure for the current value.
            self.error.set(rules::first_error(value, &self.rules));
        } else {
            let message = response
                .message
                .unwrap_or_else(|| unavailable_fallback(kind).to_string());
            self.error.set(Some(message));
        }
    }

    #[cfg(test)]
    fn current_generation(&self) -> u64 {
        self.generation.get_value()
    }
}

fn availability_kind(kind: FieldKind) -> Option<AvailabilityKind> {
    match kind {
        FieldKind::Username => Some(AvailabilityKind::Username),
        FieldKind::Email => Some(AvailabilityKind::Email),
        FieldKind::Password => None,
    }
}

fn unavailable_fallback(kind: AvailabilityKind) -> &'static str {
    match kind {
        AvailabilityKind::Username => "Username is already taken",
        AvailabilityKind::Email => "Email is already registered",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_lib::api::test_transport;
    use crate::app_lib::browser;

    fn reset() {
        browser::reset_host_state();
        test_transport::reset();
    }

    fn username_field() -> FieldState {
        let rules = FieldRules {
            required: true,
            min_length: 3,
            max_length: 20,
            ..FieldRules::new(FieldKind::Username)
        };
        FieldState::new(rules, true)
    }

    fn password_field() -> FieldState {
        let rules = FieldRules {
            required: true,
            min_length: 8,
            max_length: 50,
            ..FieldRules::new(FieldKind::Password)
        };
        FieldState::new(rules, false)
    }

    #[test]
    fn pristine_fields_show_no_error() {
        reset();
        let field = username_field();

        assert!(!field.is_dirty.get_untracked());
        assert_eq!(field.error.get_untracked(), None);
        assert!(field.is_available.get_untracked());
    }

    #[test]
    fn keystrokes_mark_dirty_and_recompute_the_rules() {
        reset();
        let field = username_field();

        field.on_input("ab");
        assert!(field.is_dirty.get_untracked());
        assert_eq!(
            field.error.get_untracked().as_deref(),
            Some("Must be at least 3 characters")
        );

        field.on_input("abc");
        assert_eq!(field.error.get_untracked(), None);
    }

    #[test]
    fn validate_marks_untouched_fields_dirty() {
        reset();
        let field = username_field();

        assert!(!field.validate());
        assert!(field.is_dirty.get_untracked());
        assert_eq!(
            field.error.get_untracked().as_deref(),
            Some("Username is required")
        );
    }

    #[tokio::test]
    async fn rapid_keystrokes_issue_at_most_one_query_for_the_last_value() {
        reset();
        let field = username_field();

        field.on_input("a");
        field.on_input("ab");
        field.on_input("abc");

        // Superseded generations bail out before dispatch, like their
        // cancelled timers would in the browser.
        field.run_availability_check(1).await;
        field.run_availability_check(2).await;
        assert!(test_transport::sent().is_empty());

        test_transport::enqueue_json(200, r#"{"available": true, "message": "Username is available"}"#);
        field.run_availability_check(field.current_generation()).await;

        let sent = test_transport::sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(
            sent[0].body.as_deref(),
            Some(r#"{"type":"username","value":"abc"}"#)
        );
        assert!(field.is_available.get_untracked());
        assert!(!field.is_checking.get_untracked());
    }

    #[tokio::test]
    async fn a_superseding_check_wins_under_any_settlement_order() {
        reset();
        let field = username_field();

        field.on_input("old_name");
        let stale = field.current_generation();

        // The stale response settles only after yielding, so the newer check
        // fires while the stale one is still in flight and settles first.
        test_transport::enqueue_deferred_json(
            200,
            r#"{"available": false, "message": "Username is already taken"}"#,
        );
        test_transport::enqueue_json(200, r#"{"available": true, "message": "Username is available"}"#);

        tokio::join!(field.run_availability_check(stale), async {
            field.on_input("new_name");
            field.run_availability_check(field.current_generation()).await;
        });

        let sent = test_transport::sent();
        assert_eq!(sent.len(), 2);
        assert_eq!(
            sent[0].body.as_deref(),
            Some(r#"{"type":"username","value":"old_name"}"#)
        );
        assert_eq!(
            sent[1].body.as_deref(),
            Some(r#"{"type":"username","value":"new_name"}"#)
        );

        // The stale unavailable verdict never overwrites the newer one.
        assert!(field.is_available.get_untracked());
        assert_eq!(field.error.get_untracked(), None);
        assert!(!field.is_checking.get_untracked());
    }

    #[tokio::test]
    async fn unavailable_verdict_surfaces_the_server_message() {
        reset();
        let field = username_field();

        field.on_input("valid_user");
        test_transport::enqueue_json(
            200,
            r#"{"available": false, "message": "Username is already taken"}"#,
        );
        field.run_availability_check(field.current_generation()).await;

        assert!(!field.is_available.get_untracked());
        assert_eq!(
            field.error.get_untracked().as_deref(),
            Some("Username is already taken")
        );

        // Synchronous rules pass, so only the availability signal blocks
        // submission.
        assert!(field.validate());
        assert!(!field.is_available.get_untracked());
    }

    #[tokio::test]
    async fn unavailable_verdict_without_a_message_uses_the_fallback() {
        reset();
        let field = username_field();

        field.on_input("valid_user");
        test_transport::enqueue_json(200, r#"{"available": false}"#);
        field.run_availability_check(field.current_generation()).await;

        assert_eq!(
            field.error.get_untracked().as_deref(),
            Some("Username is already taken")
        );
    }

    #[tokio::test]
    async fn available_verdict_keeps_a_synchronous_rule_error() {
        reset();
        let field = username_field();

        // Long enough to query, but the charset rule fails.
        field.on_input("bad name");
        assert!(field.error.get_untracked().is_some());

        test_transport::enqueue_json(200, r#"{"available": true, "message": "Username is available"}"#);
        field.run_availability_check(field.current_generation()).await;

        assert!(field.is_available.get_untracked());
        assert_eq!(
            field.error.get_untracked().as_deref(),
            Some("Username can only contain letters, numbers, underscores, and hyphens")
        );
    }

    #[tokio::test]
    async fn availability_network_failure_is_swallowed() {
        reset();
        let field = username_field();

        field.on_input("valid_user");
        test_transport::enqueue(Err(crate::app_lib::AppError::Network(
            "connection refused".to_string(),
        )));
        field.run_availability_check(field.current_generation()).await;

        assert_eq!(field.error.get_untracked(), None);
        assert!(field.is_available.get_untracked());
        assert!(!field.is_checking.get_untracked());
    }

    #[tokio::test]
    async fn short_values_never_reach_the_server() {
        reset();
        let field = username_field();

        field.on_input("ab");
        field.run_availability_check(field.current_generation()).await;

        assert!(test_transport::sent().is_empty());
    }

    #[tokio::test]
    async fn password_fields_never_query_availability() {
        reset();
        let field = password_field();

        field.on_input("Abcdefg1!");
        assert_eq!(field.error.get_untracked(), None);

        field.run_availability_check(field.current_generation()).await;
        assert!(test_transport::sent().is_empty());
    }

    #[test]
    fn too_short_username_blocks_submission() {
        reset();
        let field = username_field();

        field.on_input("ab");
        assert!(!field.validate());
    }
}
