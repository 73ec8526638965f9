use std::collections::HashMap;

use crate::{CallError, CallResult, Method, Selector, Value};

/// Named method slots of a receiver.
///
/// Anything that can look up and overwrite a method by [`Selector`] can be
/// sent messages, and opting into [`WithAdvice`](crate::WithAdvice) lets
/// those slots be wrapped.
pub trait Slots: Sized {
    fn method(&self, selector: Selector) -> Option<&Method<Self>>;

    /// Overwrite the slot, returning what was there.
    fn set_method(
        &mut self,
        selector: Selector,
        method: Method<Self>,
    ) -> Option<Method<Self>>;

    /// Invoke the method in slot `name` with `self` as receiver.
    fn send(&mut self, name: impl Into<Selector>, args: &[Value]) -> CallResult {
        let selector = name.into();
        let Some(method) = self.method(selector).cloned() else {
            return Err(CallError::MessageNotUnderstood { selector });
        };
        log::trace!("send {selector:?} with {} args", args.len());
        method.call(self, args)
    }
}

/// Selector → method storage, meant to be embedded in a receiver type.
pub struct MethodTable<T> {
    methods: HashMap<Selector, Method<T>>,
}

impl<T> MethodTable<T> {
    pub fn new() -> Self {
        Self {
            methods: HashMap::new(),
        }
    }

    #[inline]
    pub fn get(&self, selector: Selector) -> Option<&Method<T>> {
        self.methods.get(&selector)
    }

    #[inline]
    pub fn insert(
        &mut self,
        selector: Selector,
        method: Method<T>,
    ) -> Option<Method<T>> {
        self.methods.insert(selector, method)
    }

    #[inline]
    pub fn contains(&self, selector: Selector) -> bool {
        self.methods.contains_key(&selector)
    }

    pub fn selectors(&self) -> impl Iterator<Item = Selector> + '_ {
        self.methods.keys().copied()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.methods.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }
}

impl<T> Default for MethodTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Debug for MethodTable<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.methods.keys()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Greeter {
        greeted: Vec<String>,
        methods: MethodTable<Greeter>,
    }

    impl Slots for Greeter {
        fn method(&self, selector: Selector) -> Option<&Method<Self>> {
            self.methods.get(selector)
        }

        fn set_method(
            &mut self,
            selector: Selector,
            method: Method<Self>,
        ) -> Option<Method<Self>> {
            self.methods.insert(selector, method)
        }
    }

    fn greeter() -> Greeter {
        let mut g = Greeter::default();
        g.set_method(
            Selector::intern("greet"),
            Method::new(|this: &mut Greeter, args: &[Value]| {
                let who = args.first().map(Value::to_string).unwrap_or_default();
                this.greeted.push(who);
                Ok(Value::from(this.greeted.len() as i64))
            }),
        );
        g
    }

    #[test]
    fn send_invokes_slot_with_receiver() {
        let mut g = greeter();
        assert_eq!(g.send("greet", &[Value::from("ada")]), Ok(Value::Fixnum(1)));
        assert_eq!(g.send("greet", &[Value::from("bob")]), Ok(Value::Fixnum(2)));
        assert_eq!(g.greeted, ["ada", "bob"]);
    }

    #[test]
    fn send_to_empty_slot_is_not_understood() {
        let mut g = greeter();
        assert_eq!(
            g.send("wave", &[]),
            Err(CallError::MessageNotUnderstood {
                selector: Selector::intern("wave")
            })
        );
    }

    #[test]
    fn set_method_returns_old_value() {
        let mut g = greeter();
        let greet = Selector::intern("greet");
        let old = g.methods.get(greet).cloned().expect("greet is defined");
        let replacement = Method::new(|_: &mut Greeter, _: &[Value]| Ok(Value::Nil));
        let returned = g
            .set_method(greet, replacement.clone())
            .expect("slot was filled");
        assert!(returned.ptr_eq(&old));
        assert!(g.methods.get(greet).is_some_and(|m| m.ptr_eq(&replacement)));
        assert_eq!(g.methods.len(), 1);
    }

    #[test]
    fn table_bookkeeping() {
        let mut table: MethodTable<Greeter> = MethodTable::new();
        assert!(table.is_empty());
        let s = Selector::intern("noop");
        table.insert(s, Method::new(|_: &mut Greeter, _: &[Value]| Ok(Value::Nil)));
        assert!(table.contains(s));
        assert_eq!(table.selectors().collect::<Vec<_>>(), [s]);
    }
}
