//! Dispatch cost through advised method slots.
//!
//!   cargo bench --bench advice_benchmark

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use advice::{CallResult, Previous, SlotObject, Slots, Value, WithAdvice};

const DEPTHS: &[usize] = &[0, 1, 8, 64];

fn bump(this: &mut SlotObject, _: &[Value]) -> CallResult {
    let n = this.get("n").and_then(Value::as_fixnum).unwrap_or(0);
    this.set("n", n + 1);
    Ok(Value::Nil)
}

fn object() -> SlotObject {
    let mut object = SlotObject::new();
    object.set("n", 0i64);
    object.define("method", bump);
    object
}

fn send(object: &mut SlotObject, args: &[Value]) {
    black_box(object.send("method", args)).ok();
}

fn bench_chains(c: &mut Criterion) {
    let args = [Value::from(1i64), Value::from("two")];

    for &depth in DEPTHS {
        let mut o = object();
        for _ in 0..depth {
            o.before("method", bump);
        }
        c.bench_function(&format!("before x{depth}"), |b| {
            b.iter(|| send(&mut o, &args))
        });

        let mut o = object();
        for _ in 0..depth {
            o.after("method", bump);
        }
        c.bench_function(&format!("after x{depth}"), |b| {
            b.iter(|| send(&mut o, &args))
        });

        let mut o = object();
        for _ in 0..depth {
            o.around(
                "method",
                |this: &mut SlotObject, previous: &Previous<SlotObject>, args: &[Value]| {
                    previous.call(this, args)
                },
            );
        }
        c.bench_function(&format!("around x{depth}"), |b| {
            b.iter(|| send(&mut o, &args))
        });
    }
}

fn bench_install(c: &mut Criterion) {
    c.bench_function("install 64 mixed", |b| {
        b.iter(|| {
            let mut o = object();
            for i in 0..64 {
                match i % 3 {
                    0 => o.before("method", bump),
                    1 => o.after("method", bump),
                    _ => o.around(
                        "method",
                        |this: &mut SlotObject,
                         previous: &Previous<SlotObject>,
                         args: &[Value]| previous.call(this, args),
                    ),
                }
            }
            black_box(o)
        })
    });
}

criterion_group!(benches, bench_chains, bench_install);
criterion_main!(benches);
