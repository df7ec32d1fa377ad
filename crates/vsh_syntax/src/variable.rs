/// Prefix that separates callable bindings from data bindings of the same
/// name: the function `ls` lives in the variable `fn-ls`.
pub const FN_PREFIX: &str = "fn-";

/// A variable reference split into its parts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VariableRef<'a> {
    /// Set by a leading `@`.
    pub explode: bool,
    pub ns: &'a str,
    pub name: &'a str,
}

/// Split `text` into the explode marker, the namespace (everything before
/// the last `:`) and the bare name.
pub fn parse_variable(text: &str) -> VariableRef<'_> {
    let (explode, rest) = match text.strip_prefix('@') {
        Some(rest) => (true, rest),
        None => (false, text),
    };
    match rest.rfind(':') {
        Some(i) => VariableRef {
            explode,
            ns: &rest[..i],
            name: &rest[i + 1..],
        },
        None => VariableRef {
            explode,
            ns: "",
            name: rest,
        },
    }
}
