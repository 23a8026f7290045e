//! Serialize declarations to TypeScript source text.

use std::fmt::Write;

use super::declarations::{
    AccessorFunction, CallSignature, Declaration, InterfaceDecl, LookupType, TypeRef,
};
use super::mapper::METHOD_PARAM;
use super::{ENGINE_MODULE, ENGINE_NAMESPACE};

/// Prepended to every generated file.
pub const HEADER: &str = "// THIS IS A GENERATED FILE. DO NOT EDIT MANUALLY.\n// Courtesy of Godot2TS.\n";

const INDENT: &str = "    ";

/// Double-quoted string literal with `\` and `"` escaped.
fn string_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

pub fn type_text(ty: &TypeRef) -> String {
    match ty {
        TypeRef::Number => "number".to_string(),
        TypeRef::String => "string".to_string(),
        TypeRef::Boolean => "boolean".to_string(),
        TypeRef::Unknown => "unknown".to_string(),
        TypeRef::Void => "void".to_string(),
        TypeRef::Array(inner) => format!("{}[]", type_text(inner)),
        TypeRef::Engine(name) => format!("{}.{}", ENGINE_NAMESPACE, name),
        TypeRef::Local(name) => name.clone(),
        TypeRef::Indexed { object, index } => format!("{}[{}]", object, index),
        TypeRef::KeyOf(name) => format!("keyof {}", name),
    }
}

fn write_call_signature(out: &mut String, sig: &CallSignature) {
    let mut params = vec![format!("{}: {}", METHOD_PARAM, string_literal(&sig.method))];
    params.extend(
        sig.params
            .iter()
            .map(|p| format!("{}: {}", p.name, type_text(&p.ty))),
    );
    let _ = writeln!(
        out,
        "{}call({}): {};",
        INDENT,
        params.join(", "),
        type_text(&sig.returns)
    );
}

fn write_interface(out: &mut String, decl: &InterfaceDecl) {
    match &decl.extends {
        Some(base) => {
            let _ = writeln!(out, "interface {} extends {} {{", decl.name, type_text(base));
        }
        None => {
            let _ = writeln!(out, "interface {} {{", decl.name);
        }
    }
    for member in &decl.members {
        write_call_signature(out, member);
    }
    out.push_str("}\n");
}

fn write_lookup(out: &mut String, lookup: &LookupType) {
    let _ = writeln!(out, "type {} = {{", lookup.name);
    for entry in &lookup.entries {
        let _ = writeln!(
            out,
            "{}{}: {};",
            INDENT,
            string_literal(&entry.key),
            type_text(&entry.ty)
        );
    }
    out.push_str("};\n");
}

fn write_accessor(out: &mut String, func: &AccessorFunction) {
    let returns = type_text(&func.returns);
    let _ = writeln!(
        out,
        "export function {}<{} extends {}>({}: {}): {} {{",
        func.name,
        func.type_param,
        type_text(&func.constraint),
        func.param.name,
        type_text(&func.param.ty),
        returns
    );
    let _ = writeln!(
        out,
        "{}return {}.ResourceLoader.load({}).call(\"new\") as {};",
        INDENT, ENGINE_NAMESPACE, func.param.name, returns
    );
    out.push_str("}\n");
}

/// Print declarations in order, one after another.
pub fn print_declarations(declarations: &[Declaration]) -> String {
    let mut out = String::new();
    for decl in declarations {
        match decl {
            Declaration::Interface(i) => write_interface(&mut out, i),
            Declaration::Lookup(l) => write_lookup(&mut out, l),
            Declaration::Accessor(f) => write_accessor(&mut out, f),
        }
    }
    out
}

/// Full file: disclaimer header, engine import, then the declarations.
pub fn print_file(declarations: &[Declaration]) -> String {
    let mut out = String::from(HEADER);
    out.push('\n');
    let _ = writeln!(
        out,
        "import * as {} from {};",
        ENGINE_NAMESPACE,
        string_literal(ENGINE_MODULE)
    );
    out.push_str(&print_declarations(declarations));
    out
}
