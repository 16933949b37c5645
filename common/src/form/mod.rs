//! Form state: values, errors, touched flags and the instance id, plus the
//! events that mutate them and the widget slots bound to one instance.

mod events;
mod field_map;
mod state;
mod values;
mod widgets;

pub use events::{FormEvent, InstanceId};
pub use field_map::{ErrorMap, FieldMap, TouchedMap};
pub use state::{FieldStatus, FormState};
pub use values::FormValues;
pub use widgets::{FormWidgets, WidgetSlot};
