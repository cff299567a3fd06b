//! Attribute descriptors.
//!
//! Code generation refers to host-runtime attributes (`CompilerGenerated`,
//! `DebuggerHidden`, ...) through descriptors pairing a low-level type
//! reference with a type-constructor reference. Attributes that no loaded
//! unit provides are either deferred (reported when used) or, for a small
//! set of marker attributes, synthesized into the local unit.

use std::sync::Arc;

use dashmap::DashMap;
use lumen_ir::{Name, NamespacePath, StringInterner};
use rustc_hash::FxBuildHasher;

use crate::config::LangFeature;
use crate::error::GlobalsError;
use crate::globals::Globals;
use crate::tycon::TyconRef;
use crate::unit::{
    resolve_or_deferred, Access, CompilationUnit, TypeDef, TypeDefFlags, TypeDefKind,
    TypeDefSpec, UnitRef, UnitResolver,
};

/// Attributes the compiler may define itself when no unit provides them.
pub const EMBEDDABLE_ATTRIBUTES: &[&str] = &[
    "System.Runtime.CompilerServices.IsReadOnlyAttribute",
    "System.Runtime.CompilerServices.IsByRefLikeAttribute",
    "System.Runtime.CompilerServices.IsUnmanagedAttribute",
    "System.Runtime.CompilerServices.NullableAttribute",
    "System.Runtime.CompilerServices.NullableContextAttribute",
    "System.Runtime.CompilerServices.CompilerFeatureRequiredAttribute",
    "System.Diagnostics.CodeAnalysis.DynamicDependencyAttribute",
];

/// `DebuggerBrowsableState.Never`.
const DEBUGGER_BROWSABLE_NEVER: i32 = 0;

/// Where a low-level type reference points.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ScopeRef {
    /// The unit being compiled.
    Local,
    /// A referenced unit, by name.
    Unit(Name),
    /// No unit provides the type.
    Unresolved,
}

/// Low-level type reference emitted into metadata.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct IlTypeRef {
    pub scope: ScopeRef,
    pub path: NamespacePath,
    pub name: Name,
}

/// An attribute type, as both a metadata reference and a type-constructor reference.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct AttribInfo {
    pub il_type_ref: IlTypeRef,
    pub tcref: TyconRef,
}

impl AttribInfo {
    fn in_unit(unit: &UnitRef, path: NamespacePath, name: Name) -> Self {
        let scope = match unit.try_unit() {
            Some(unit) if unit.is_local() => ScopeRef::Local,
            Some(unit) => ScopeRef::Unit(unit.name()),
            None => ScopeRef::Unresolved,
        };
        AttribInfo {
            il_type_ref: IlTypeRef {
                scope,
                path: path.clone(),
                name,
            },
            tcref: TyconRef::non_local(unit.clone(), path, name),
        }
    }

    /// True when the attribute type can be dereferenced now.
    pub fn is_available(&self) -> bool {
        self.tcref.can_deref()
    }
}

/// Split `System.Diagnostics.DebuggerHiddenAttribute` into namespace and name.
fn split_type_name<'a>(full_name: &'a str) -> (&'a str, &'a str) {
    full_name.rsplit_once('.').unwrap_or(("", full_name))
}

fn intern_type_name(interner: &StringInterner, full_name: &str) -> (NamespacePath, Name) {
    let (namespace, name) = split_type_name(full_name);
    let path = if namespace.is_empty() {
        NamespacePath::root()
    } else {
        interner.intern_path(namespace)
    };
    (path, interner.intern(name))
}

/// Cached attribute lookups and the attributes embedded into the local unit.
#[derive(Debug, Default)]
pub(crate) struct AttributeCatalog {
    found: DashMap<Name, AttribInfo, FxBuildHasher>,
    embedded: DashMap<Name, AttribInfo, FxBuildHasher>,
}

impl AttributeCatalog {
    /// Descriptor for a public attribute, deferred when no unit provides it.
    pub fn find(
        &self,
        interner: &StringInterner,
        resolver: &dyn UnitResolver,
        full_name: &str,
    ) -> AttribInfo {
        let key = interner.intern(full_name);
        if let Some(info) = self.found.get(&key) {
            return info.clone();
        }
        let (path, name) = intern_type_name(interner, full_name);
        let unit = resolve_or_deferred(resolver, interner, &path, name, true);
        self.found
            .entry(key)
            .or_insert_with(|| AttribInfo::in_unit(&unit, path, name))
            .clone()
    }

    pub fn try_find(
        &self,
        interner: &StringInterner,
        resolver: &dyn UnitResolver,
        full_name: &str,
    ) -> Option<AttribInfo> {
        let (path, name) = intern_type_name(interner, full_name);
        let unit = resolver.resolve(&path, name, true)?;
        Some(AttribInfo::in_unit(&UnitRef::Resolved(unit), path, name))
    }

    pub fn find_or_embed(
        &self,
        interner: &StringInterner,
        resolver: &dyn UnitResolver,
        local: Option<&Arc<CompilationUnit>>,
        full_name: &str,
    ) -> Result<AttribInfo, GlobalsError> {
        let key = interner.intern(full_name);
        if let Some(info) = self.embedded.get(&key) {
            return Ok(info.clone());
        }
        if let Some(info) = self.try_find(interner, resolver, full_name) {
            return Ok(info);
        }
        let local = match local {
            Some(local) if EMBEDDABLE_ATTRIBUTES.contains(&full_name) => local,
            _ => {
                return Err(GlobalsError::NotEmbeddable {
                    name: full_name.to_owned(),
                })
            }
        };
        let info = self
            .embedded
            .entry(key)
            .or_insert_with(|| {
                tracing::debug!(attribute = full_name, "embedding attribute into local unit");
                let (path, name) = intern_type_name(interner, full_name);
                let def = local.define(
                    TypeDefSpec::new(path.clone(), name, TypeDefKind::Attribute)
                        .access(Access::Internal)
                        .flags(TypeDefFlags::SEALED | TypeDefFlags::EMBEDDED),
                );
                AttribInfo {
                    il_type_ref: IlTypeRef {
                        scope: ScopeRef::Local,
                        path,
                        name,
                    },
                    tcref: TyconRef::local(def),
                }
            })
            .clone();
        Ok(info)
    }

    /// Definitions synthesized by `find_or_embed`, oldest first.
    pub fn embedded_types(&self) -> Vec<Arc<TypeDef>> {
        let mut defs: Vec<Arc<TypeDef>> = self
            .embedded
            .iter()
            .filter_map(|entry| entry.value().tcref.try_deref())
            .collect();
        defs.sort_by_key(|def| def.stamp);
        defs
    }
}

macro_rules! well_known_attributes {
    (
        required { $($field:ident => $name:literal,)* }
        optional { $($opt_field:ident => $opt_name:literal,)* }
    ) => {
        /// Attribute descriptors computed when the environment is built.
        ///
        /// Required attributes are always present, possibly deferred.
        /// Optional ones exist only on runtimes that provide them.
        #[derive(Clone, Debug)]
        pub struct WellKnownAttributes {
            $(pub $field: AttribInfo,)*
            $(pub $opt_field: Option<AttribInfo>,)*
        }

        impl WellKnownAttributes {
            pub const REQUIRED: &'static [&'static str] = &[$($name,)*];
            pub const OPTIONAL: &'static [&'static str] = &[$($opt_name,)*];

            pub(crate) fn new(
                catalog: &AttributeCatalog,
                interner: &StringInterner,
                resolver: &dyn UnitResolver,
            ) -> Self {
                WellKnownAttributes {
                    $($field: catalog.find(interner, resolver, $name),)*
                    $($opt_field: catalog.try_find(interner, resolver, $opt_name),)*
                }
            }
        }
    };
}

well_known_attributes! {
    required {
        compiler_generated => "System.Runtime.CompilerServices.CompilerGeneratedAttribute",
        debugger_hidden => "System.Diagnostics.DebuggerHiddenAttribute",
        debugger_browsable => "System.Diagnostics.DebuggerBrowsableAttribute",
        debugger_non_user_code => "System.Diagnostics.DebuggerNonUserCodeAttribute",
        debugger_step_through => "System.Diagnostics.DebuggerStepThroughAttribute",
        debuggable => "System.Diagnostics.DebuggableAttribute",
        param_array => "System.ParamArrayAttribute",
        extension => "System.Runtime.CompilerServices.ExtensionAttribute",
        struct_layout => "System.Runtime.InteropServices.StructLayoutAttribute",
        obsolete => "System.ObsoleteAttribute",
        conditional => "System.Diagnostics.ConditionalAttribute",
    }
    optional {
        is_read_only => "System.Runtime.CompilerServices.IsReadOnlyAttribute",
        is_by_ref_like => "System.Runtime.CompilerServices.IsByRefLikeAttribute",
        is_unmanaged => "System.Runtime.CompilerServices.IsUnmanagedAttribute",
        required_member => "System.Runtime.CompilerServices.RequiredMemberAttribute",
        sets_required_members => "System.Diagnostics.CodeAnalysis.SetsRequiredMembersAttribute",
        compiler_feature_required => "System.Runtime.CompilerServices.CompilerFeatureRequiredAttribute",
        nullable => "System.Runtime.CompilerServices.NullableAttribute",
        nullable_context => "System.Runtime.CompilerServices.NullableContextAttribute",
    }
}

/// A constructor argument of an emitted custom attribute.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AttrArg {
    Int32(i32),
    Bool(bool),
    String(String),
}

/// A custom attribute ready for emission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CustomAttr {
    pub ty: IlTypeRef,
    pub args: Vec<AttrArg>,
}

impl Globals {
    /// Descriptor for a public attribute by full name.
    ///
    /// Never fails: when no unit provides the attribute the descriptor is
    /// backed by a deferred sentinel, and dereferencing it reports
    /// `"<namespace>.<name> not found"`.
    pub fn find_attrib(&self, full_name: &str) -> AttribInfo {
        self.attributes
            .find(self.interner(), self.resolver(), full_name)
    }

    pub fn try_find_attrib(&self, full_name: &str) -> Option<AttribInfo> {
        self.attributes
            .try_find(self.interner(), self.resolver(), full_name)
    }

    /// Descriptor for a marker attribute, defining it locally if needed.
    ///
    /// # Errors
    /// Returns `GlobalsError::NotEmbeddable` when no unit provides the
    /// attribute and it is not in `EMBEDDABLE_ATTRIBUTES`, or the language
    /// version predates embedded attributes.
    pub fn find_or_embed_attrib(&self, full_name: &str) -> Result<AttribInfo, GlobalsError> {
        self.attributes.find_or_embed(
            self.interner(),
            self.resolver(),
            self.config()
                .supports(LangFeature::EmbeddedAttributes)
                .then_some(self.local_unit()),
            full_name,
        )
    }

    /// Attribute types synthesized into the local unit.
    pub fn embedded_types(&self) -> Vec<Arc<TypeDef>> {
        self.attributes.embedded_types()
    }

    pub fn mk_custom_attr(&self, info: &AttribInfo, args: Vec<AttrArg>) -> CustomAttr {
        CustomAttr {
            ty: info.il_type_ref.clone(),
            args,
        }
    }

    pub fn mk_compiler_generated_attr(&self) -> CustomAttr {
        self.mk_custom_attr(&self.well_known_attributes().compiler_generated, Vec::new())
    }

    pub fn mk_debugger_hidden_attr(&self) -> CustomAttr {
        self.mk_custom_attr(&self.well_known_attributes().debugger_hidden, Vec::new())
    }

    pub fn mk_debugger_non_user_code_attr(&self) -> CustomAttr {
        self.mk_custom_attr(&self.well_known_attributes().debugger_non_user_code, Vec::new())
    }

    pub fn mk_debugger_step_through_attr(&self) -> CustomAttr {
        self.mk_custom_attr(&self.well_known_attributes().debugger_step_through, Vec::new())
    }

    pub fn mk_debugger_browsable_never_attr(&self) -> CustomAttr {
        self.mk_custom_attr(
            &self.well_known_attributes().debugger_browsable,
            vec![AttrArg::Int32(DEBUGGER_BROWSABLE_NEVER)],
        )
    }

    fn debug_attributes_enabled(&self) -> bool {
        !self.config().suppress_debug_attributes
    }

    pub fn add_method_generated_attrs(&self, attrs: &mut Vec<CustomAttr>) {
        attrs.push(self.mk_compiler_generated_attr());
        if self.debug_attributes_enabled() {
            attrs.push(self.mk_debugger_non_user_code_attr());
        }
    }

    pub fn add_property_generated_attrs(&self, attrs: &mut Vec<CustomAttr>) {
        self.add_method_generated_attrs(attrs);
    }

    pub fn add_field_generated_attrs(&self, attrs: &mut Vec<CustomAttr>) {
        attrs.push(self.mk_compiler_generated_attr());
        if self.debug_attributes_enabled() {
            attrs.push(self.mk_debugger_browsable_never_attr());
        }
    }
}
