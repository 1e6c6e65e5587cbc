use super::lead::LeadError;
use super::wizard::{BookingForm, Effect, Event};

/// One open-to-close lifetime of the booking dialog.
///
/// Delivery results and auto-close timers are tagged with the session that
/// started them. Anything arriving for an earlier session, or after this one
/// was closed, is dropped instead of touching the current form.
#[derive(Debug, Default)]
pub struct BookingSession {
    id: u64,
    form: BookingForm,
    closed: bool,
    auto_close_armed: Option<u64>,
}

impl BookingSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn form(&self) -> &BookingForm {
        &self.form
    }

    /// Start over with an empty form. Disarms any pending auto-close.
    pub fn reset(&mut self) {
        self.id += 1;
        self.form = BookingForm::new();
        self.closed = false;
        self.auto_close_armed = None;
    }

    /// The dialog was dismissed. The form stays as it is until `reset`, but
    /// late results and auto-close timers no longer apply to it.
    pub fn close(&mut self) {
        self.closed = true;
        self.auto_close_armed = None;
    }

    pub fn dispatch(&mut self, event: Event) -> Vec<Effect> {
        if self.closed {
            return Vec::new();
        }
        self.form.update(event)
    }

    /// Feeds a delivery result back into the form. `None` if it belongs to a
    /// session that has since been closed or reset.
    pub fn settle(&mut self, session: u64, result: Result<(), LeadError>) -> Option<Vec<Effect>> {
        if session != self.id || self.closed {
            log::info!("Dropping delivery result from closed session {}", session);
            return None;
        }
        Some(self.form.update(Event::SubmissionSettled(result)))
    }

    /// Records that an auto-close timer now runs for this session and returns
    /// the tag the timer must hand back to `auto_close_due`.
    pub fn arm_auto_close(&mut self) -> u64 {
        self.auto_close_armed = Some(self.id);
        self.id
    }

    /// Whether a fired auto-close timer should close the dialog. True at most
    /// once per arming, and only for the live, still open session.
    pub fn auto_close_due(&mut self, session: u64) -> bool {
        if self.closed || session != self.id || self.auto_close_armed != Some(session) {
            log::info!("Ignoring auto-close for session {}", session);
            return false;
        }
        self.auto_close_armed = None;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::wizard::{Field, Stage};
    use pretty_assertions::assert_eq;

    fn fill_and_submit(session: &mut BookingSession) {
        for (field, value) in [
            (Field::StudentName, "Ali"),
            (Field::WhatsappNumber, "+971501234567"),
        ] {
            session.dispatch(Event::Edit(field, value.to_string()));
        }
        session.dispatch(Event::SubmitContact);
        for (field, value) in [
            (Field::Grade, "Grade 5"),
            (Field::Subject, "Mathematics"),
            (Field::Place, "Dubai"),
        ] {
            session.dispatch(Event::Edit(field, value.to_string()));
        }
        session.dispatch(Event::SubmitFinal);
    }

    #[test]
    fn reset_after_completion_starts_clean() {
        let mut session = BookingSession::new();
        fill_and_submit(&mut session);
        let id = session.id();
        session.settle(id, Ok(()));
        assert!(session.form().is_completed());

        session.reset();

        assert_eq!(session.form(), &BookingForm::new());
        assert!(!session.form().partial_lead_sent());
        assert_eq!(session.form().fields().student_name, "");
    }

    #[test]
    fn results_from_a_closed_session_are_dropped() {
        let mut session = BookingSession::new();
        fill_and_submit(&mut session);
        let stale = session.id();

        session.reset();

        assert_eq!(session.settle(stale, Ok(())), None);
        assert_eq!(session.form().stage(), Stage::Step1);
        assert!(!session.form().is_completed());
    }

    #[test]
    fn results_for_the_live_session_complete_the_form() {
        let mut session = BookingSession::new();
        fill_and_submit(&mut session);

        let effects = session.settle(session.id(), Ok(()));

        assert!(matches!(
            effects.as_deref(),
            Some([Effect::ScheduleAutoClose { .. }])
        ));
        assert!(session.form().is_completed());
    }

    #[test]
    fn results_arriving_after_close_are_dropped() {
        let mut session = BookingSession::new();
        fill_and_submit(&mut session);
        let id = session.id();

        session.close();

        assert_eq!(session.settle(id, Ok(())), None);
        assert!(!session.form().is_completed());
        assert!(session.form().submission_in_flight());
    }

    #[test]
    fn auto_close_fires_once_for_the_live_session() {
        let mut session = BookingSession::new();
        fill_and_submit(&mut session);
        session.settle(session.id(), Ok(()));

        let armed = session.arm_auto_close();

        assert!(session.auto_close_due(armed));
        assert!(!session.auto_close_due(armed));
    }

    #[test]
    fn reopening_disarms_a_pending_auto_close() {
        let mut session = BookingSession::new();
        fill_and_submit(&mut session);
        session.settle(session.id(), Ok(()));
        let armed = session.arm_auto_close();

        session.close();
        session.reset();
        session.dispatch(Event::Edit(Field::StudentName, "Sara".to_string()));

        assert!(!session.auto_close_due(armed));
        assert_eq!(session.form().fields().student_name, "Sara");
        assert_eq!(session.form().stage(), Stage::Step1);
    }

    #[test]
    fn closing_disarms_auto_close_before_reset() {
        let mut session = BookingSession::new();
        fill_and_submit(&mut session);
        session.settle(session.id(), Ok(()));
        let armed = session.arm_auto_close();

        session.close();

        assert!(!session.auto_close_due(armed));
    }

    #[test]
    fn edits_after_close_are_ignored() {
        let mut session = BookingSession::new();
        session.close();

        assert_eq!(
            session.dispatch(Event::Edit(Field::StudentName, "Ali".to_string())),
            Vec::new()
        );
        assert_eq!(session.form().fields().student_name, "");
    }
}
