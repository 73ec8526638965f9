use std::collections::HashMap;

use crate::{CallResult, Method, MethodTable, Selector, Slots, Value, WithAdvice};

/// A dynamic object: named data slots plus named method slots.
///
/// Data and method slots live in separate namespaces; methods receive the
/// whole object and read or write its data slots through [`get`](Self::get)
/// and [`get_mut`](Self::get_mut).
#[derive(Debug, Default)]
pub struct SlotObject {
    data: HashMap<Selector, Value>,
    methods: MethodTable<SlotObject>,
}

impl SlotObject {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: impl Into<Selector>) -> Option<&Value> {
        self.data.get(&name.into())
    }

    pub fn get_mut(&mut self, name: impl Into<Selector>) -> Option<&mut Value> {
        self.data.get_mut(&name.into())
    }

    pub fn set(
        &mut self,
        name: impl Into<Selector>,
        value: impl Into<Value>,
    ) -> Option<Value> {
        self.data.insert(name.into(), value.into())
    }

    /// Put `body` into method slot `name`, replacing whatever was there.
    pub fn define<F>(&mut self, name: impl Into<Selector>, body: F)
    where
        F: Fn(&mut SlotObject, &[Value]) -> CallResult + 'static,
    {
        self.methods.insert(name.into(), Method::new(body));
    }

    #[inline]
    pub fn responds_to(&self, name: impl Into<Selector>) -> bool {
        self.methods.contains(name.into())
    }
}

impl Slots for SlotObject {
    #[inline]
    fn method(&self, selector: Selector) -> Option<&Method<Self>> {
        self.methods.get(selector)
    }

    #[inline]
    fn set_method(
        &mut self,
        selector: Selector,
        method: Method<Self>,
    ) -> Option<Method<Self>> {
        self.methods.insert(selector, method)
    }
}

impl WithAdvice for SlotObject {}
