mod advice;
mod method;
mod object;
mod selector;
mod slots;
mod value;

pub use advice::WithAdvice;
pub use method::{CallError, CallResult, Method, Previous};
pub use object::SlotObject;
pub use selector::{Selector, SelectorId};
pub use slots::{MethodTable, Slots};
pub use value::Value;
