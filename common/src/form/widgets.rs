//! Ownership of the third-party widgets bound to one form instance.
//!
//! A `WidgetSlot` holds at most one widget. Releasing the slot drops the
//! widget, and the widget's `Drop` is its teardown. `attach` always drops the
//! previous occupant before the new widget is created, so two widgets never
//! coexist for the same input.
//!
//! `FormWidgets` groups the phone slot and the select slot and knows which
//! changes invalidate which: a new instance id invalidates both, a new
//! location list only the selects.

use log::debug;

use super::events::InstanceId;

#[derive(Debug)]
pub struct WidgetSlot<W> {
    widget: Option<W>,
    instance: Option<InstanceId>,
    pending: bool,
}

impl<W> Default for WidgetSlot<W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W> WidgetSlot<W> {
    /// An empty slot waiting for its first attach.
    pub fn new() -> Self {
        Self {
            widget: None,
            instance: None,
            pending: true,
        }
    }

    pub fn get(&self) -> Option<&W> {
        self.widget.as_ref()
    }

    /// Form instance the current widget was attached for.
    pub fn instance(&self) -> Option<InstanceId> {
        self.instance
    }

    /// Whether the slot must be (re)attached after the next render.
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Tears the current widget down and marks the slot pending.
    pub fn release(&mut self) {
        if let Some(instance) = self.instance.take() {
            debug!("releasing widget bound to form instance {instance}");
        }
        self.widget = None;
        self.pending = true;
    }

    /// Replaces the occupant with the widget built by `attach`.
    ///
    /// The previous widget is dropped before `attach` runs. `Ok(None)` means
    /// the widget is unavailable on this page; the slot stays empty but is no
    /// longer pending. An error also clears the pending flag so a broken
    /// plugin is not retried on every render.
    pub fn attach<E>(
        &mut self,
        instance: InstanceId,
        attach: impl FnOnce() -> Result<Option<W>, E>,
    ) -> Result<(), E> {
        self.widget = None;
        self.instance = None;
        self.pending = false;

        let widget = attach()?;
        self.instance = widget.as_ref().map(|_| instance);
        self.widget = widget;
        Ok(())
    }
}

/// The phone widget and the select widgets of the lead form.
#[derive(Debug)]
pub struct FormWidgets<P, S> {
    pub phone: WidgetSlot<P>,
    pub selects: WidgetSlot<S>,
}

impl<P, S> Default for FormWidgets<P, S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P, S> FormWidgets<P, S> {
    pub fn new() -> Self {
        Self {
            phone: WidgetSlot::new(),
            selects: WidgetSlot::new(),
        }
    }

    /// The form was reset: every widget belongs to a dead instance.
    pub fn instance_changed(&mut self) {
        self.selects.release();
        self.phone.release();
    }

    /// The location list changed: only the selects depend on it.
    pub fn locations_changed(&mut self) {
        self.selects.release();
    }

    pub fn needs_setup(&self) -> bool {
        self.phone.is_pending() || self.selects.is_pending()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::FormState;
    use std::cell::RefCell;
    use std::rc::Rc;

    type Journal = Rc<RefCell<Vec<String>>>;

    struct Recorded {
        name: &'static str,
        instance: InstanceId,
        journal: Journal,
    }

    impl Recorded {
        fn attach(name: &'static str, instance: InstanceId, journal: &Journal) -> Self {
            journal.borrow_mut().push(format!("attach {name} {instance}"));
            Self {
                name,
                instance,
                journal: journal.clone(),
            }
        }
    }

    impl Drop for Recorded {
        fn drop(&mut self) {
            self.journal
                .borrow_mut()
                .push(format!("drop {} {}", self.name, self.instance));
        }
    }

    fn attach_all(widgets: &mut FormWidgets<Recorded, Recorded>, instance: InstanceId, journal: &Journal) {
        if widgets.phone.is_pending() {
            widgets
                .phone
                .attach(instance, || Ok::<_, ()>(Some(Recorded::attach("phone", instance, journal))))
                .unwrap();
        }
        if widgets.selects.is_pending() {
            widgets
                .selects
                .attach(instance, || Ok::<_, ()>(Some(Recorded::attach("selects", instance, journal))))
                .unwrap();
        }
    }

    #[test]
    fn test_reset_tears_down_old_widgets_before_new_ones_attach() {
        let journal = Journal::default();
        let mut state = FormState::new();
        let mut widgets = FormWidgets::new();
        let old = state.instance_id();
        attach_all(&mut widgets, old, &journal);

        state.reset();
        widgets.instance_changed();
        assert!(widgets.needs_setup());
        let new = state.instance_id();
        attach_all(&mut widgets, new, &journal);

        assert_eq!(
            *journal.borrow(),
            vec![
                format!("attach phone {old}"),
                format!("attach selects {old}"),
                format!("drop selects {old}"),
                format!("drop phone {old}"),
                format!("attach phone {new}"),
                format!("attach selects {new}"),
            ]
        );
        assert_eq!(widgets.phone.instance(), Some(new));
        assert_eq!(widgets.selects.instance(), Some(new));
        assert!(!widgets.needs_setup());
    }

    #[test]
    fn test_location_change_keeps_phone_widget() {
        let journal = Journal::default();
        let instance = InstanceId::new();
        let mut widgets = FormWidgets::new();
        attach_all(&mut widgets, instance, &journal);
        journal.borrow_mut().clear();

        widgets.locations_changed();
        assert!(!widgets.phone.is_pending());
        assert!(widgets.selects.is_pending());
        attach_all(&mut widgets, instance, &journal);

        assert_eq!(
            *journal.borrow(),
            vec![
                format!("drop selects {instance}"),
                format!("attach selects {instance}"),
            ]
        );
        assert!(widgets.phone.get().is_some());
    }

    #[test]
    fn test_attach_drops_previous_occupant_first() {
        let journal = Journal::default();
        let first = InstanceId::new();
        let second = InstanceId::new();
        let mut slot = WidgetSlot::new();
        slot.attach(first, || Ok::<_, ()>(Some(Recorded::attach("phone", first, &journal))))
            .unwrap();

        slot.attach(second, || Ok::<_, ()>(Some(Recorded::attach("phone", second, &journal))))
            .unwrap();

        assert_eq!(
            *journal.borrow(),
            vec![
                format!("attach phone {first}"),
                format!("drop phone {first}"),
                format!("attach phone {second}"),
            ]
        );
    }

    #[test]
    fn test_failed_or_unavailable_attach_clears_pending() {
        let instance = InstanceId::new();
        let mut slot: WidgetSlot<Recorded> = WidgetSlot::new();
        assert!(slot.is_pending());

        assert_eq!(slot.attach(instance, || Err("plugin missing")), Err("plugin missing"));
        assert!(!slot.is_pending());
        assert!(slot.get().is_none());

        slot.release();
        assert!(slot.is_pending());
        assert_eq!(slot.attach(instance, || Ok::<_, ()>(None)), Ok(()));
        assert!(!slot.is_pending());
        assert_eq!(slot.instance(), None);
    }

    #[test]
    fn test_release_runs_teardown_once() {
        let journal = Journal::default();
        let instance = InstanceId::new();
        let mut slot = WidgetSlot::new();
        slot.attach(instance, || Ok::<_, ()>(Some(Recorded::attach("phone", instance, &journal))))
            .unwrap();

        slot.release();
        slot.release();

        let drops = journal.borrow().iter().filter(|e| e.starts_with("drop")).count();
        assert_eq!(drops, 1);
    }
}
