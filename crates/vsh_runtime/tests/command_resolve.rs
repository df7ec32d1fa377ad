use std::cell::RefCell;
use std::rc::Rc;

use vsh_runtime::{
    BuiltinFn, Callable, Error, EvalCtx, ExternalCmd, Opts, ProcessSpawner, Value, Variable,
    fast_map_new, resolve,
};

type Calls = Rc<RefCell<Vec<(String, Vec<String>)>>>;

struct RecordingSpawner {
    calls: Calls,
    code: i32,
}

impl ProcessSpawner for RecordingSpawner {
    fn run(&self, name: &str, args: &[String]) -> Result<i32, Error> {
        self.calls.borrow_mut().push((name.to_string(), args.to_vec()));
        Ok(self.code)
    }
}

fn ctx_with_spawner(code: i32) -> (EvalCtx, Calls) {
    let calls = Calls::default();
    let mut ctx = EvalCtx::new();
    ctx.set_spawner(Box::new(RecordingSpawner {
        calls: calls.clone(),
        code,
    }));
    (ctx, calls)
}

fn no_opts() -> Opts {
    fast_map_new()
}

#[test]
fn unknown_name_becomes_external_command() {
    let ctx = EvalCtx::new();
    assert_eq!(resolve("ls", &ctx), Callable::External(ExternalCmd::new("ls")));
}

#[test]
fn builtin_function_binding_wins() {
    let ctx = EvalCtx::new();
    match resolve("put", &ctx) {
        Callable::Builtin(f) => assert_eq!(f.name(), "put"),
        other => panic!("expected builtin, got {other:?}"),
    }
    assert!(matches!(resolve("builtin:put", &ctx), Callable::Builtin(_)));
}

#[test]
fn local_binding_shadows_builtin() {
    let mut ctx = EvalCtx::new();
    let mine = BuiltinFn::new("mine", |ctx, _, _| {
        ctx.emit(Value::from("mine"));
        Ok(())
    });
    ctx.local.define("fn-put", Variable::new(Value::Fn(mine.clone())));
    assert_eq!(resolve("put", &ctx), Callable::Builtin(mine));

    resolve("put", &ctx).call(&mut ctx, &[Value::from("x")], &no_opts()).unwrap();
    assert_eq!(ctx.output(), &[Value::from("mine")]);
}

#[test]
fn e_namespace_forces_external() {
    let ctx = EvalCtx::new();
    assert_eq!(resolve("e:put", &ctx), Callable::External(ExternalCmd::new("put")));
}

#[test]
fn exploded_name_skips_lookup() {
    let ctx = EvalCtx::new();
    assert!(matches!(resolve("@put", &ctx), Callable::External(_)));
}

#[test]
fn non_callable_binding_falls_back_to_external() {
    let mut ctx = EvalCtx::new();
    ctx.local.define("fn-x", Variable::new(Value::from("not a function")));
    assert_eq!(resolve("x", &ctx), Callable::External(ExternalCmd::new("x")));

    ctx.local.define("fn-y", Variable::blackhole());
    assert_eq!(resolve("y", &ctx), Callable::External(ExternalCmd::new("y")));
}

#[test]
fn missing_namespace_falls_back_to_external() {
    let ctx = EvalCtx::new();
    assert_eq!(
        resolve("nomod:put", &ctx),
        Callable::External(ExternalCmd::new("nomod:put"))
    );
}

#[test]
fn external_command_gets_text_arguments() {
    let (mut ctx, calls) = ctx_with_spawner(0);
    let args = [Value::from("a"), Value::list([Value::from("b")])];
    ctx.call(&Value::from("mytool"), &args, &no_opts()).unwrap();
    assert_eq!(
        *calls.borrow(),
        vec![("mytool".to_string(), vec!["a".to_string(), "[b]".to_string()])]
    );
}

#[test]
fn non_zero_exit_is_an_error() {
    let (mut ctx, _) = ctx_with_spawner(3);
    assert_eq!(
        ctx.call(&Value::from("false"), &[], &no_opts()),
        Err(Error::ExternalCmdExit {
            name: "false".to_string(),
            code: 3
        })
    );
}

#[test]
fn external_command_rejects_options() {
    let (mut ctx, calls) = ctx_with_spawner(0);
    let mut opts = no_opts();
    opts.insert("x".to_string(), Value::Bool(true));
    assert_eq!(ctx.call(&Value::from("ls"), &[], &opts), Err(Error::ExternalCmdOpts));
    assert!(calls.borrow().is_empty());
}

#[test]
fn non_string_values_must_be_callable() {
    let mut ctx = EvalCtx::new();
    assert_eq!(
        ctx.call(&Value::Bool(true), &[], &no_opts()),
        Err(Error::NotCallable { kind: "bool" })
    );
    let put = ctx.resolve_ref("builtin:fn-put").unwrap().get().unwrap();
    ctx.call(&put, &[Value::from("a")], &no_opts()).unwrap();
    assert_eq!(ctx.take_output(), vec![Value::from("a")]);
}

#[test]
fn core_builtins_produce_output() {
    let mut ctx = EvalCtx::new();
    let opts = no_opts();
    ctx.call(&Value::from("put"), &[Value::from("a"), Value::Bool(false)], &opts).unwrap();
    ctx.call(&Value::from("count"), &[Value::from("héllo")], &opts).unwrap();
    ctx.call(&Value::from("repr"), &[Value::from("a b"), Value::list([])], &opts).unwrap();
    ctx.call(&Value::from("not"), &[Value::from("")], &opts).unwrap();
    assert_eq!(
        ctx.take_output(),
        vec![
            Value::from("a"),
            Value::Bool(false),
            Value::from("5"),
            Value::from("'a b' []"),
            Value::Bool(true),
        ]
    );
}

#[test]
fn echo_joins_with_separator_option() {
    let mut ctx = EvalCtx::new();
    let mut opts = no_opts();
    opts.insert("sep".to_string(), Value::from(","));
    ctx.call(&Value::from("echo"), &[Value::from("a"), Value::from("b")], &opts).unwrap();
    assert_eq!(ctx.output(), &[Value::from("a,b")]);

    opts.insert("bogus".to_string(), Value::from(""));
    assert!(ctx.call(&Value::from("echo"), &[], &opts).is_err());
}

#[test]
fn builtins_check_their_arguments() {
    let mut ctx = EvalCtx::new();
    assert_eq!(
        ctx.call(&Value::from("count"), &[Value::Bool(true)], &no_opts()),
        Err(Error::CannotIndex { kind: "bool" })
    );
    assert!(ctx.call(&Value::from("bool"), &[], &no_opts()).is_err());
}
