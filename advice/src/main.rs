use clap::{Parser as ClapParser, ValueEnum};
use std::{fmt, process};

use advice::{CallResult, Previous, SlotObject, Slots, Value, WithAdvice};

const METHOD: &str = "method";
const LOG: &str = "log";

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Mode {
    Before,
    After,
    Around,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Mode::Before => "before",
            Mode::After => "after",
            Mode::Around => "around",
        })
    }
}

#[derive(ClapParser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Advice layers to install on `method`, in installation order
    #[arg(short, long = "mode", value_enum, help = "Advice to install (repeatable)")]
    modes: Vec<Mode>,

    /// Around layers return without calling the method they wrap
    #[arg(long, help = "Make around advice skip the wrapped method")]
    skip_original: bool,

    /// Start from an object without `method`
    #[arg(long, help = "Do not define the original method")]
    absent: bool,

    /// Arguments sent along with `method`
    #[arg(required = false, help = "Arguments (integers or strings)")]
    args: Vec<String>,
}

fn push_log(this: &mut SlotObject, entry: String) {
    if let Some(log) = this.get_mut(LOG) {
        log.push(entry);
    }
}

fn logging_advice(
    label: String,
) -> impl Fn(&mut SlotObject, &[Value]) -> CallResult + 'static {
    move |this, args| {
        push_log(this, format!("{label}{}", render_args(args)));
        Ok(Value::Nil)
    }
}

fn render_args(args: &[Value]) -> String {
    if args.is_empty() {
        String::new()
    } else {
        let args: Vec<String> = args.iter().map(Value::to_string).collect();
        format!("({})", args.join(", "))
    }
}

fn parse_arg(arg: &str) -> Value {
    match arg.parse::<i64>() {
        Ok(n) => Value::Fixnum(n),
        Err(_) => Value::from(arg),
    }
}

fn build(cli: &Cli) -> SlotObject {
    let mut object = SlotObject::new();
    object.set(LOG, Vec::<Value>::new());

    if !cli.absent {
        object.define(METHOD, |this, args| {
            push_log(this, format!("method{}", render_args(args)));
            Ok(Value::from(args.len() as i64))
        });
    }

    for (i, &mode) in cli.modes.iter().enumerate() {
        let label = format!("{mode}{}", i + 1);
        match mode {
            Mode::Before => object.before(METHOD, logging_advice(label)),
            Mode::After => object.after(METHOD, logging_advice(label)),
            Mode::Around => {
                let skip = cli.skip_original;
                object.around(
                    METHOD,
                    move |this: &mut SlotObject,
                          previous: &Previous<SlotObject>,
                          args: &[Value]| {
                        push_log(this, format!("{label}{}", render_args(args)));
                        if skip {
                            return Ok(Value::Nil);
                        }
                        previous.call(this, args)
                    },
                );
            }
        }
    }

    object
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let mut object = build(&cli);
    let args: Vec<Value> = cli.args.iter().map(|a| parse_arg(a)).collect();

    let result = object.send(METHOD, &args);
    if let Some(log) = object.get(LOG) {
        println!("log: {log}");
    }

    match result {
        Ok(value) => println!("result: {value}"),
        Err(err) => {
            eprintln!("Error sending '{METHOD}': {err}");
            process::exit(1);
        }
    }
}
