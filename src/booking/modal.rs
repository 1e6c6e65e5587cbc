use web_sys::MouseEvent;
use yew::Callback;

/// Whether the booking dialog is on screen.
///
/// Owned by the application root. `open` and `close` report whether anything
/// changed so callers can skip redundant re-renders.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ModalVisibility {
    shown: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VisibilityChange {
    Opened,
    Closed,
}

impl ModalVisibility {
    pub fn is_open(self) -> bool {
        self.shown
    }

    pub fn open(&mut self) -> bool {
        let changed = !self.shown;
        self.shown = true;
        changed
    }

    pub fn close(&mut self) -> bool {
        let changed = self.shown;
        self.shown = false;
        changed
    }

    /// Transition from `previous` to `self`, if there was one.
    pub fn change_from(self, previous: ModalVisibility) -> Option<VisibilityChange> {
        match (previous.shown, self.shown) {
            (false, true) => Some(VisibilityChange::Opened),
            (true, false) => Some(VisibilityChange::Closed),
            _ => None,
        }
    }
}

/// How the booking dialog is drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Presence {
    Shown,
    /// Closed, but the old session is still on screen while it fades out.
    Closing,
    Hidden,
}

impl Presence {
    pub fn of(visibility: ModalVisibility, reset_pending: bool) -> Self {
        match (visibility.is_open(), reset_pending) {
            (true, _) => Presence::Shown,
            (false, true) => Presence::Closing,
            (false, false) => Presence::Hidden,
        }
    }
}

impl From<bool> for ModalVisibility {
    fn from(shown: bool) -> Self {
        Self { shown }
    }
}

/// Open/close pair handed to every component that can start a booking.
#[derive(Clone, PartialEq)]
pub struct BookingHandle {
    open: Callback<()>,
    close: Callback<()>,
}

impl BookingHandle {
    pub fn new(open: Callback<()>, close: Callback<()>) -> Self {
        Self { open, close }
    }

    pub fn open(&self) {
        self.open.emit(());
    }

    pub fn close(&self) {
        self.close.emit(());
    }

    /// `onclick` handler that opens the booking dialog.
    pub fn open_on_click(&self) -> Callback<MouseEvent> {
        let open = self.open.clone();
        Callback::from(move |_: MouseEvent| open.emit(()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn starts_hidden() {
        assert!(!ModalVisibility::default().is_open());
    }

    #[test]
    fn open_and_close_are_idempotent() {
        let mut visibility = ModalVisibility::default();

        assert!(visibility.open());
        assert!(!visibility.open());
        assert!(visibility.is_open());

        assert!(visibility.close());
        assert!(!visibility.close());
        assert!(!visibility.is_open());
    }

    #[test]
    fn reports_transitions_only() {
        let hidden = ModalVisibility::from(false);
        let shown = ModalVisibility::from(true);

        assert_eq!(shown.change_from(hidden), Some(VisibilityChange::Opened));
        assert_eq!(hidden.change_from(shown), Some(VisibilityChange::Closed));
        assert_eq!(shown.change_from(shown), None);
        assert_eq!(hidden.change_from(hidden), None);
    }

    #[test]
    fn closing_frame_lasts_until_reset() {
        let hidden = ModalVisibility::from(false);
        let shown = ModalVisibility::from(true);

        assert_eq!(Presence::of(shown, false), Presence::Shown);
        assert_eq!(Presence::of(shown, true), Presence::Shown);
        assert_eq!(Presence::of(hidden, true), Presence::Closing);
        assert_eq!(Presence::of(hidden, false), Presence::Hidden);
    }

    #[test]
    fn handle_forwards_to_callbacks() {
        use std::cell::Cell;
        use std::rc::Rc;

        let opened = Rc::new(Cell::new(0));
        let closed = Rc::new(Cell::new(0));
        let handle = BookingHandle::new(
            {
                let opened = opened.clone();
                Callback::from(move |_| opened.set(opened.get() + 1))
            },
            {
                let closed = closed.clone();
                Callback::from(move |_| closed.set(closed.get() + 1))
            },
        );

        handle.open();
        handle.close();
        handle.close();

        assert_eq!(opened.get(), 1);
        assert_eq!(closed.get(), 2);
    }
}
