//! Golden tests for the generated TypeScript.

mod common;
use common::{extract, CAMERA_SHAKE};

use std::path::{Path, PathBuf};

use gd2ts::{generate, ClassInfo, Function, Meta, ResourcePath, ScriptClasses};
use pretty_assertions::assert_eq;

fn script(rel: &str, classes: Vec<ClassInfo>) -> ScriptClasses {
    ScriptClasses {
        file: PathBuf::from(rel),
        resource_path: ResourcePath::from_relative(Path::new(rel)),
        classes,
    }
}

fn function(name: &str, parameters: Vec<Meta>, return_type: Option<&str>) -> Function {
    Function {
        name: name.to_string(),
        return_type: return_type.map(str::to_string),
        parameters,
    }
}

fn camera_shake_core() -> ClassInfo {
    ClassInfo {
        name: Some("CameraShakeCore".into()),
        extends_class: Some("RefCounted".into()),
        exports: vec![Meta::new("default_intensity").with_type("float").with_default("20.0")],
        variables: vec![Meta::new("_active").with_type("bool").with_default("false").into()],
        functions: vec![
            function("_init", vec![], Some("void")),
            function(
                "bind",
                vec![
                    Meta::new("other"),
                    Meta::new("host").with_type("Node2D"),
                    Meta::new("process_during_pause").with_default("true"),
                    Meta::new("last").with_type("bool").with_default("true"),
                ],
                Some("void"),
            ),
            function(
                "shake",
                vec![
                    Meta::new("intensity").with_type("float").with_default("default_intensity"),
                    Meta::new("additive").with_type("bool").with_default("false"),
                ],
                Some("void"),
            ),
            function("is_active", vec![], Some("bool")),
        ],
    }
}

fn other() -> ClassInfo {
    ClassInfo {
        extends_class: Some("Node".into()),
        ..ClassInfo::default()
    }
}

const EXPECTED: &str = r#"// THIS IS A GENERATED FILE. DO NOT EDIT MANUALLY.
// Courtesy of Godot2TS.

import * as G from "godot";
interface CameraShakeCore extends G.RefCounted {
    call(fn: "_init"): void;
    call(fn: "bind", other: unknown, host: G.Node2D, process_during_pause: unknown, last: boolean): void;
    call(fn: "shake", intensity: number, additive: boolean): void;
    call(fn: "is_active"): boolean;
}
interface other extends G.Node {
}
type ResourceMapper = {
    "res://lorem/ipsum/other.gd": other;
    "res://something/something/camera_shake_core.gd": CameraShakeCore;
};
export function instantiateGdScript<T extends keyof ResourceMapper>(path: T): ResourceMapper[T] {
    return G.ResourceLoader.load(path).call("new") as ResourceMapper[T];
}
"#;

#[test]
fn generate_golden() {
    let scripts = vec![
        script("lorem/ipsum/other.gd", vec![other()]),
        script("something/something/camera_shake_core.gd", vec![camera_shake_core()]),
    ];
    assert_eq!(generate(&scripts), EXPECTED);
}

#[test]
fn generate_is_idempotent_and_order_independent() {
    let a = script("lorem/ipsum/other.gd", vec![other()]);
    let b = script("something/something/camera_shake_core.gd", vec![camera_shake_core()]);
    let first = generate(&[a.clone(), b.clone()]);
    let second = generate(&[a.clone(), b.clone()]);
    let reversed = generate(&[b, a]);
    assert_eq!(first, second);
    assert_eq!(first, reversed);
}

#[test]
fn generate_from_parsed_script() {
    let scripts = vec![script("shake/camera_shake_core.gd", extract(CAMERA_SHAKE))];
    let code = generate(&scripts);
    assert!(code.contains("interface CameraShakeCore extends G.RefCounted {"));
    assert!(code.contains(
        "    call(fn: \"bind\", other: unknown, host: G.Node2D, process_during_pause: unknown, last: boolean): void;"
    ));
    assert!(code.contains("    call(fn: \"stop\"): void;"));
    assert!(code.contains("    \"res://shake/camera_shake_core.gd\": CameraShakeCore;"));
}

#[test]
fn generate_with_no_scripts() {
    let code = generate(&[]);
    assert!(code.contains("type ResourceMapper = {\n};\n"));
    assert!(code.contains("export function instantiateGdScript"));
}
