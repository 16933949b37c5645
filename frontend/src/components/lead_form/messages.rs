use lead_common::form::{FormEvent, InstanceId};
use lead_common::transport::TransportError;

pub enum Msg {
    /// A change or blur from an input or widget.
    Form(FormEvent),
    /// Keystrokes in the phone input; the stored value is read back from the widget.
    PhoneInput(InstanceId),
    Submit,
    IntakeResolved(Result<(), TransportError>),
    LocationsLoaded(Vec<String>),
}
