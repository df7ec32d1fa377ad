use super::common::{expect_args, expect_no_opts};
use crate::core::{Opts, Value};
use crate::errors::Error;
use crate::eval::EvalCtx;

pub fn builtin_repr(ctx: &mut EvalCtx, args: &[Value], opts: &Opts) -> Result<(), Error> {
    expect_no_opts("repr", opts)?;
    let parts: Vec<String> = args.iter().map(Value::repr).collect();
    ctx.emit(Value::from(parts.join(" ")));
    Ok(())
}

pub fn builtin_bool(ctx: &mut EvalCtx, args: &[Value], opts: &Opts) -> Result<(), Error> {
    expect_no_opts("bool", opts)?;
    let args = expect_args("bool", args, 1)?;
    ctx.emit(Value::Bool(args[0].truthy()));
    Ok(())
}

pub fn builtin_not(ctx: &mut EvalCtx, args: &[Value], opts: &Opts) -> Result<(), Error> {
    expect_no_opts("not", opts)?;
    let args = expect_args("not", args, 1)?;
    ctx.emit(Value::Bool(!args[0].truthy()));
    Ok(())
}
