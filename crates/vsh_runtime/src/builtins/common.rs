use crate::core::{Opts, Value};
use crate::errors::Error;

pub fn expect_args<'a>(name: &str, args: &'a [Value], n: usize) -> Result<&'a [Value], Error> {
    if args.len() != n {
        return Err(Error::failure(format!(
            "{name} expects {n} argument{}, got {}",
            if n == 1 { "" } else { "s" },
            args.len()
        )));
    }
    Ok(args)
}

pub fn expect_no_opts(name: &str, opts: &Opts) -> Result<(), Error> {
    if let Some(key) = opts.keys().next() {
        return Err(Error::failure(format!("{name} doesn't accept option &{key}")));
    }
    Ok(())
}
