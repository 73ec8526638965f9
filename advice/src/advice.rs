use crate::{CallResult, Method, Previous, Selector, Slots, Value};

/// Before / after / around advice on the method slots of a receiver.
///
/// Opt in with an empty impl (`impl WithAdvice for MyObject {}`). Each call
/// reads the slot's current method, composes it with `advice` and writes the
/// composite back under the same selector. Installing again wraps the
/// composite, so chains nest: the last `before`/`around` runs first, the
/// last `after` runs last.
///
/// Nothing is validated at installation time. Failures (including calling
/// an absent previous method from around advice) surface when the slot is
/// invoked and propagate unchanged through every layer.
pub trait WithAdvice: Slots + 'static {
    /// Run `advice` before the current method, with the same receiver and
    /// arguments. An empty slot receives `advice` itself.
    fn before<F>(&mut self, name: impl Into<Selector>, advice: F)
    where
        F: Fn(&mut Self, &[Value]) -> CallResult + 'static,
    {
        let selector = name.into();
        let method = match self.method(selector).cloned() {
            Some(previous) => Method::new(move |this: &mut Self, args: &[Value]| {
                advice(this, args)?;
                previous.call(this, args)?;
                Ok(Value::Nil)
            }),
            None => Method::new(advice),
        };
        log::debug!("before advice on {selector:?}");
        self.set_method(selector, method);
    }

    /// Run `advice` after the current method, with the same receiver and
    /// arguments. An empty slot receives `advice` itself.
    fn after<F>(&mut self, name: impl Into<Selector>, advice: F)
    where
        F: Fn(&mut Self, &[Value]) -> CallResult + 'static,
    {
        let selector = name.into();
        let method = match self.method(selector).cloned() {
            Some(previous) => Method::new(move |this: &mut Self, args: &[Value]| {
                previous.call(this, args)?;
                advice(this, args)?;
                Ok(Value::Nil)
            }),
            None => Method::new(advice),
        };
        log::debug!("after advice on {selector:?}");
        self.set_method(selector, method);
    }

    /// Hand the current method to `advice`, which decides whether, when and
    /// with which arguments it runs. The composite returns what `advice`
    /// returns.
    fn around<F>(&mut self, name: impl Into<Selector>, advice: F)
    where
        F: Fn(&mut Self, &Previous<Self>, &[Value]) -> CallResult + 'static,
    {
        let selector = name.into();
        let previous = Previous::new(selector, self.method(selector).cloned());
        log::debug!(
            "around advice on {selector:?} (previous absent: {})",
            previous.is_absent()
        );
        self.set_method(
            selector,
            Method::new(move |this: &mut Self, args: &[Value]| {
                advice(this, &previous, args)
            }),
        );
    }
}
