//! Target-language declaration shapes produced by the mapper.

/// A type expression in the generated code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeRef {
    Number,
    String,
    Boolean,
    Unknown,
    Void,
    Array(Box<TypeRef>),
    /// A type from the engine namespace (`G.Node2D`).
    Engine(String),
    /// A type declared in the generated file itself.
    Local(String),
    /// `Lookup[Key]`.
    Indexed { object: String, index: String },
    /// `keyof Name`.
    KeyOf(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    pub name: String,
    pub ty: TypeRef,
}

/// `call(fn: "method", ...params): returns;`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallSignature {
    pub method: String,
    pub params: Vec<Param>,
    pub returns: TypeRef,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceDecl {
    pub name: String,
    pub extends: Option<TypeRef>,
    pub members: Vec<CallSignature>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupEntry {
    pub key: String,
    pub ty: TypeRef,
}

/// `type Name = { "key": Type; ... };`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupType {
    pub name: String,
    pub entries: Vec<LookupEntry>,
}

/// `export function name<T extends keyof Lookup>(path: T): Lookup[T]` loading a resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessorFunction {
    pub name: String,
    pub type_param: String,
    pub constraint: TypeRef,
    pub param: Param,
    pub returns: TypeRef,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Declaration {
    Interface(InterfaceDecl),
    Lookup(LookupType),
    Accessor(AccessorFunction),
}
