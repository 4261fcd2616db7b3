use clap::ValueEnum;
use serde::Serialize;
use std::fmt;

/// One parsed parameter, e.g. `const char * name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Parameter {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
}

impl Parameter {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.ty, self.name)
    }
}

/// A free function declaration recognised on a single header line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Function {
    pub name: String,
    pub return_type: String,
    /// Declaration order; the generated wrapper forwards in this order.
    pub parameters: Vec<Parameter>,
}

impl Function {
    pub fn returns_void(&self) -> bool {
        self.return_type.trim() == "void"
    }

    /// `int, const char *` – used for the stub pointer type.
    pub fn parameter_types(&self) -> String {
        self.parameters
            .iter()
            .map(|p| p.ty.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// `a, b` – used when forwarding to the stub pointer.
    pub fn parameter_names(&self) -> String {
        self.parameters
            .iter()
            .map(|p| p.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// `int a, const char * b` – the wrapper's own parameter list.
    pub fn parameter_declarations(&self) -> String {
        self.parameters
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}({})",
            self.return_type,
            self.name,
            self.parameter_declarations()
        )
    }
}

/// Output flavour of the stub implementation file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    C,
    Cpp,
}

impl Language {
    pub fn extension(self) -> &'static str {
        match self {
            Language::C => "c",
            Language::Cpp => "cpp",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn add() -> Function {
        Function {
            name: "add".into(),
            return_type: "int".into(),
            parameters: vec![Parameter::new("a", "int"), Parameter::new("b", "int")],
        }
    }

    #[test]
    fn test_signature_rendering() {
        assert_eq!(add().to_string(), "int add(int a, int b)");
        assert_eq!(Parameter::new("s", "const char *").to_string(), "const char * s");
    }

    #[test]
    fn test_parameter_lists() {
        let f = add();
        assert_eq!(f.parameter_types(), "int, int");
        assert_eq!(f.parameter_names(), "a, b");

        let nullary = Function {
            name: "noop".into(),
            return_type: "void".into(),
            parameters: vec![],
        };
        assert_eq!(nullary.parameter_types(), "");
        assert_eq!(nullary.to_string(), "void noop()");
    }

    #[test]
    fn test_returns_void() {
        let mut f = add();
        assert!(!f.returns_void());
        f.return_type = "void".into();
        assert!(f.returns_void());
        f.return_type = "void *".into();
        assert!(!f.returns_void());
    }

    #[test]
    fn test_language_extension() {
        assert_eq!(Language::default(), Language::C);
        assert_eq!(Language::C.extension(), "c");
        assert_eq!(Language::Cpp.extension(), "cpp");
    }
}
