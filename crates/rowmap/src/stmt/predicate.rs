use crate::{bail, Result};

use std::fmt;

/// A caller-supplied filter appended to generated `SELECT` statements.
///
/// The template refers to arguments by position: `{0}`, `{1}`, ... Literal
/// braces are written `{{` and `}}`. String arguments have every `'`
/// doubled before substitution; raw arguments are substituted as-is.
///
/// ```
/// # use rowmap::Predicate;
/// let filter = Predicate::new("Name='{0}' AND Year>{1}")
///     .arg("O'Brien")
///     .arg(2020);
///
/// assert_eq!(filter.render().unwrap(), "Name='O''Brien' AND Year>2020");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Predicate {
    template: String,
    args: Vec<Arg>,
}

/// A positional argument of a [`Predicate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Arg {
    /// Text, quote-escaped on substitution.
    Str(String),

    /// Substituted verbatim.
    Raw(String),
}

impl Predicate {
    pub fn new(template: impl Into<String>) -> Predicate {
        Predicate {
            template: template.into(),
            args: vec![],
        }
    }

    /// A predicate matching every row.
    pub fn all() -> Predicate {
        Predicate::default()
    }

    pub fn arg(mut self, arg: impl Into<Arg>) -> Predicate {
        self.args.push(arg.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.template.trim().is_empty()
    }

    /// Substitutes the arguments into the template.
    pub fn render(&self) -> Result<String> {
        let mut ret = String::with_capacity(self.template.len());
        let mut chars = self.template.chars().peekable();

        while let Some(c) = chars.next() {
            match c {
                '{' if chars.peek() == Some(&'{') => {
                    chars.next();
                    ret.push('{');
                }
                '{' => {
                    let mut index = String::new();

                    loop {
                        match chars.next() {
                            Some('}') => break,
                            Some(d) if d.is_ascii_digit() => index.push(d),
                            _ => bail!("malformed placeholder in predicate `{}`", self.template),
                        }
                    }

                    let index: usize = index.parse()?;
                    let Some(arg) = self.args.get(index) else {
                        bail!(
                            "predicate refers to argument {index} but only {} were given",
                            self.args.len()
                        );
                    };

                    match arg {
                        Arg::Str(s) => ret.push_str(&s.replace('\'', "''")),
                        Arg::Raw(s) => ret.push_str(s),
                    }
                }
                '}' if chars.peek() == Some(&'}') => {
                    chars.next();
                    ret.push('}');
                }
                '}' => bail!("unmatched `}}` in predicate `{}`", self.template),
                c => ret.push(c),
            }
        }

        Ok(ret)
    }
}

impl From<&str> for Predicate {
    fn from(template: &str) -> Predicate {
        Predicate::new(template)
    }
}

impl From<String> for Predicate {
    fn from(template: String) -> Predicate {
        Predicate::new(template)
    }
}

impl Arg {
    pub fn raw(value: impl fmt::Display) -> Arg {
        Arg::Raw(value.to_string())
    }
}

impl From<&str> for Arg {
    fn from(value: &str) -> Arg {
        Arg::Str(value.to_string())
    }
}

impl From<String> for Arg {
    fn from(value: String) -> Arg {
        Arg::Str(value)
    }
}

macro_rules! impl_raw_arg {
    ( $( $ty:ty ),* ) => {
        $(
            impl From<$ty> for Arg {
                fn from(value: $ty) -> Arg {
                    Arg::raw(value)
                }
            }
        )*
    };
}

impl_raw_arg!(bool, i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);
