use serial_test::serial;
use vsh_runtime::{Environ, ProcessEnviron, Value, Variable};
use std::rc::Rc;

#[test]
#[serial]
fn process_environ_round_trips_through_real_environment() {
    let name = "VSH_RUNTIME_TEST_VAR";
    let v = Variable::env(name, Rc::new(ProcessEnviron));
    v.set(Value::from("hello")).unwrap();
    assert_eq!(std::env::var(name).as_deref(), Ok("hello"));
    assert_eq!(v.get(), Ok(Value::from("hello")));
    // SAFETY: serialized with every other test touching the environment.
    unsafe { std::env::remove_var(name) };
    assert_eq!(v.get(), Ok(Value::from("")));
}

#[test]
#[serial]
fn process_environ_treats_bad_names_as_unset() {
    assert_eq!(ProcessEnviron.get(""), None);
    assert_eq!(ProcessEnviron.get("A=B"), None);
    assert!(ProcessEnviron.set("", "x").is_err());
}
