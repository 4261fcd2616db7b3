//! Emit the `<module>_stub.h` / `<module>_stub.<ext>` pair for one header.
//!
//! Every stubbed function `f` gets a pointer `f_stub` that a test installs,
//! and a wrapper `f` that forwards to it or fails the test when unset.

use crate::model::{Function, Language};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Paths of the two artifacts written for one module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StubFiles {
    pub header: PathBuf,
    pub implementation: PathBuf,
}

pub fn stub_header_name(module: &str) -> String {
    format!("{module}_stub.h")
}

pub fn stub_implementation_name(module: &str, language: Language) -> String {
    format!("{module}_stub.{}", language.extension())
}

pub fn stub_pointer_name(function: &Function) -> String {
    format!("{}_stub", function.name)
}

/// Write both artifacts for `module` into `out_dir`.
///
/// `header_path` is included verbatim, exactly as the caller spelled it.
pub fn emit(
    module: &str,
    header_path: &str,
    functions: &[Function],
    language: Language,
    out_dir: &Path,
) -> io::Result<StubFiles> {
    let header = out_dir.join(stub_header_name(module));
    let mut h = BufWriter::new(File::create(&header)?);
    write_stub_header(&mut h, header_path, functions)?;
    h.flush()?;
    drop(h);

    let implementation = out_dir.join(stub_implementation_name(module, language));
    let mut c = BufWriter::new(File::create(&implementation)?);
    write_stub_implementation(&mut c, &stub_header_name(module), functions)?;
    c.flush()?;

    Ok(StubFiles {
        header,
        implementation,
    })
}

pub fn write_stub_header<W: Write>(
    h: &mut W,
    header_path: &str,
    functions: &[Function],
) -> io::Result<()> {
    writeln!(h, "#include \"{header_path}\"")?;
    writeln!(h)?;

    for function in functions {
        write!(h, "extern ")?;
        write_stub_pointer(h, function)?;
        writeln!(h, ";")?;
    }

    Ok(())
}

pub fn write_stub_implementation<W: Write>(
    c: &mut W,
    stub_header: &str,
    functions: &[Function],
) -> io::Result<()> {
    writeln!(c, "#include <stddef.h> // NULL")?;
    writeln!(c, "#include <dummy/core.h> // dummyAbortTest")?;
    writeln!(c, "#include \"{stub_header}\"")?;
    writeln!(c)?;

    for function in functions {
        write_stub_pointer(c, function)?;
        writeln!(c, " = NULL;")?;
        write_stub_wrapper(c, function)?;
        writeln!(c)?;
    }

    Ok(())
}

/// `int (*add_stub)(int, int)` – no terminator, callers add `;` or `= NULL;`.
fn write_stub_pointer<W: Write>(out: &mut W, function: &Function) -> io::Result<()> {
    write!(
        out,
        "{ret} (*{ptr})({types})",
        ret = function.return_type,
        ptr = stub_pointer_name(function),
        types = function.parameter_types()
    )
}

fn write_stub_wrapper<W: Write>(c: &mut W, function: &Function) -> io::Result<()> {
    let ptr = stub_pointer_name(function);

    writeln!(
        c,
        "{ret} {name}({decls})",
        ret = function.return_type,
        name = function.name,
        decls = function.parameter_declarations()
    )?;
    writeln!(c, "{{")?;
    writeln!(c, "    if(!{ptr})")?;
    writeln!(
        c,
        "        dummyAbortTest(DUMMY_FAIL_TEST, \"Called {} without stub callback.\");",
        function.name
    )?;
    // a void function has nothing to hand back
    let keyword = if function.returns_void() { "" } else { "return " };
    writeln!(
        c,
        "    {keyword}{ptr}({names});",
        names = function.parameter_names()
    )?;
    writeln!(c, "}}")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Parameter;

    fn add() -> Function {
        Function {
            name: "add".into(),
            return_type: "int".into(),
            parameters: vec![Parameter::new("a", "int"), Parameter::new("b", "int")],
        }
    }

    fn noop() -> Function {
        Function {
            name: "noop".into(),
            return_type: "void".into(),
            parameters: vec![],
        }
    }

    fn render<F: FnOnce(&mut Vec<u8>) -> io::Result<()>>(f: F) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_stub_header() {
        let h = render(|w| write_stub_header(w, "include/math.h", &[add(), noop()]));

        assert_eq!(
            h,
            "#include \"include/math.h\"\n\
             \n\
             extern int (*add_stub)(int, int);\n\
             extern void (*noop_stub)();\n"
        );
    }

    #[test]
    fn test_stub_implementation() {
        let c = render(|w| write_stub_implementation(w, "math_stub.h", &[add(), noop()]));

        let expected = "\
#include <stddef.h> // NULL
#include <dummy/core.h> // dummyAbortTest
#include \"math_stub.h\"

int (*add_stub)(int, int) = NULL;
int add(int a, int b)
{
    if(!add_stub)
        dummyAbortTest(DUMMY_FAIL_TEST, \"Called add without stub callback.\");
    return add_stub(a, b);
}

void (*noop_stub)() = NULL;
void noop()
{
    if(!noop_stub)
        dummyAbortTest(DUMMY_FAIL_TEST, \"Called noop without stub callback.\");
    noop_stub();
}

";
        assert_eq!(c, expected);
    }

    #[test]
    fn test_void_pointer_return_is_not_void() {
        let f = Function {
            name: "alloc".into(),
            return_type: "void *".into(),
            parameters: vec![Parameter::new("size", "size_t")],
        };
        let c = render(|w| write_stub_wrapper(w, &f));
        assert!(c.contains("    return alloc_stub(size);\n"), "{c}");
    }

    #[test]
    fn test_file_names() {
        assert_eq!(stub_header_name("Config"), "Config_stub.h");
        assert_eq!(stub_implementation_name("Config", Language::C), "Config_stub.c");
        assert_eq!(
            stub_implementation_name("Config", Language::Cpp),
            "Config_stub.cpp"
        );
    }

    #[test]
    fn test_emit_writes_both_files() {
        let dir = tempfile::tempdir().unwrap();

        let files = emit("math", "math.h", &[add()], Language::Cpp, dir.path()).unwrap();

        assert_eq!(files.header, dir.path().join("math_stub.h"));
        assert_eq!(files.implementation, dir.path().join("math_stub.cpp"));

        let h = std::fs::read_to_string(&files.header).unwrap();
        assert!(h.starts_with("#include \"math.h\"\n"));
        let c = std::fs::read_to_string(&files.implementation).unwrap();
        assert!(c.contains("#include \"math_stub.h\"\n"));
        assert!(c.contains("int (*add_stub)(int, int) = NULL;\n"));
    }

    #[test]
    fn test_emit_with_no_functions() {
        let dir = tempfile::tempdir().unwrap();

        let files = emit("empty", "empty.h", &[], Language::C, dir.path()).unwrap();

        let h = std::fs::read_to_string(&files.header).unwrap();
        assert_eq!(h, "#include \"empty.h\"\n\n");
        let c = std::fs::read_to_string(&files.implementation).unwrap();
        assert!(c.ends_with("#include \"empty_stub.h\"\n\n"));
    }
}
