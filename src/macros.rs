#[macro_export]
macro_rules! regex {
    ($pat:literal) => {{
        static RE: once_cell::sync::Lazy<regex::Regex> =
            once_cell::sync::Lazy::new(|| regex::Regex::new($pat).unwrap());
        &*RE
    }};
}

#[macro_export]
macro_rules! template {
    ($tpl:literal) => {
        $crate::Action::Template($tpl)
    };
}

#[macro_export]
macro_rules! compute {
    ($comp:ident) => {
        $crate::Action::Compute($crate::Computation::$comp)
    };
}

#[macro_export]
macro_rules! rule {
    (
        name: $name:expr,
        pattern: $pat:literal
        $(, flags: $flags:expr)?
        , action: $action:expr
        $(,)?
    ) => {{
        $crate::Rule {
            name: $name,
            pattern: $crate::regex!($pat),
            action: $action,
            flags: $crate::RuleFlags::empty() $(| $flags)?,
        }
    }};
}
