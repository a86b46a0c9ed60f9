use std::path::Path;

use dusk_counter::CONTRACT_SCHEMA;
use wasmtime::{Engine, ExternType, Module};

use crate::error::{CliError, Result};

/// Compiles the contract module and checks that every schema function is
/// exported as a function.
pub fn check_exports(wasm_path: &Path) -> Result<usize> {
    let engine = Engine::default();
    let module = Module::from_file(&engine, wasm_path)
        .map_err(|err| CliError::Message(format!("invalid WASM module: {err}")))?;

    let missing: Vec<&str> = CONTRACT_SCHEMA
        .iter_functions()
        .map(|function| function.name)
        .filter(|name| {
            !module
                .exports()
                .any(|export| export.name() == *name && matches!(export.ty(), ExternType::Func(_)))
        })
        .collect();

    if !missing.is_empty() {
        return Err(CliError::Message(format!(
            "contract WASM is missing exports: {}",
            missing.join(", ")
        )));
    }

    Ok(CONTRACT_SCHEMA.functions.len())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn write_module(dir: &Path, wat: &str) -> std::path::PathBuf {
        let path = dir.join("counter.wat");
        fs::write(&path, wat).expect("write module");
        path
    }

    #[test]
    fn module_with_all_exports_passes() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = write_module(
            dir.path(),
            r#"(module
                (func (export "get_count"))
                (func (export "increment"))
                (func (export "decrement")))"#,
        );

        assert_eq!(check_exports(&path).expect("exports present"), 3);
    }

    #[test]
    fn missing_function_is_reported() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = write_module(
            dir.path(),
            r#"(module
                (func (export "get_count"))
                (func (export "increment"))
                (memory (export "decrement") 1))"#,
        );

        let err = check_exports(&path).expect_err("decrement is not a function");
        assert_eq!(
            err.to_string(),
            "contract WASM is missing exports: decrement"
        );
    }

    #[test]
    fn garbage_module_is_rejected() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("counter.wasm");
        fs::write(&path, b"\0asm\x02").expect("write module");

        let err = check_exports(&path).expect_err("not a valid module");
        assert!(err.to_string().starts_with("invalid WASM module"));
    }
}
