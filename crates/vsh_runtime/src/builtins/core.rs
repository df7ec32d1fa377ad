use super::common::{expect_args, expect_no_opts};
use crate::core::{Opts, Value};
use crate::errors::Error;
use crate::eval::EvalCtx;

/// Output each argument unchanged.
pub fn builtin_put(ctx: &mut EvalCtx, args: &[Value], opts: &Opts) -> Result<(), Error> {
    expect_no_opts("put", opts)?;
    for a in args {
        ctx.emit(a.clone());
    }
    Ok(())
}

/// Output the arguments' text joined by `&sep` (a space by default).
pub fn builtin_echo(ctx: &mut EvalCtx, args: &[Value], opts: &Opts) -> Result<(), Error> {
    let sep = match opts.get("sep") {
        Some(v) => v.to_text_string(),
        None => " ".to_string(),
    };
    if let Some(key) = opts.keys().find(|k| k.as_str() != "sep") {
        return Err(Error::failure(format!("echo doesn't accept option &{key}")));
    }
    let parts: Vec<String> = args.iter().map(Value::to_text_string).collect();
    ctx.emit(Value::from(parts.join(&sep)));
    Ok(())
}

/// Output the number of elements of a sequence.
pub fn builtin_count(ctx: &mut EvalCtx, args: &[Value], opts: &Opts) -> Result<(), Error> {
    expect_no_opts("count", opts)?;
    let args = expect_args("count", args, 1)?;
    let seq = args[0]
        .as_indexable()
        .ok_or(Error::CannotIndex { kind: args[0].kind() })?;
    let mut buf = itoa::Buffer::new();
    ctx.emit(Value::from(buf.format(seq.len())));
    Ok(())
}
