//! TypeScript declaration generator.

use std::collections::{HashSet, VecDeque};

use directus_typegen_codegen::{
    language::{LanguageCodegen, TypeMapper},
    pipeline::{CompilationContext, Diagnostic},
};
use directus_typegen_core::{quote_property, quote_string};
use directus_typegen_ir::{
    FieldKind, ListItem, Literal, RelationKind, ResolvedCollection, ResolvedField, ResolvedSchema,
    StructuredKind,
};
use directus_typegen_schema::GenerateOptions;
use eyre::Result;
use tracing::debug;

use crate::{
    ast::{Declaration, Import, Member, Union, array_of, list_of},
    code_file::CodeFile,
    geojson::{GEOJSON_COMMENT, geojson_declarations},
    naming::{TypeNamer, reserved_type_name},
    type_mapper::TypeScriptTypeMapper,
};

const SDK_MODULE: &str = "@directus/sdk";

/// TypeScript generator producing one declaration file per resolved schema.
pub struct Generator {
    schema: ResolvedSchema,
    options: GenerateOptions,
    diagnostics: Vec<Diagnostic>,
}

impl Generator {
    pub fn new(schema: ResolvedSchema, options: GenerateOptions) -> Self {
        Self {
            schema,
            options,
            diagnostics: Vec::new(),
        }
    }

    /// Create a generator from a pipeline context that has run to completion.
    pub fn from_context(mut ctx: CompilationContext) -> Result<Self> {
        let schema = ctx.take_resolved()?;
        Ok(Self {
            schema,
            options: ctx.options,
            diagnostics: ctx.diagnostics,
        })
    }

    /// Diagnostics collected by the pipeline.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn schema(&self) -> &ResolvedSchema {
        &self.schema
    }

    /// Build the declaration file.
    pub fn file(&self) -> CodeFile {
        Emitter::new(&self.schema, &self.options).file()
    }
}

impl LanguageCodegen for Generator {
    fn language(&self) -> &'static str {
        "typescript"
    }

    fn file_extension(&self) -> &'static str {
        "ts"
    }

    fn compile(&self) -> Result<String> {
        Ok(self.file().render())
    }
}

/// Renders one resolved schema; holds the naming and mapping policy.
struct Emitter<'a> {
    schema: &'a ResolvedSchema,
    options: &'a GenerateOptions,
    namer: TypeNamer,
    mapper: TypeScriptTypeMapper,
}

impl<'a> Emitter<'a> {
    fn new(schema: &'a ResolvedSchema, options: &'a GenerateOptions) -> Self {
        Self {
            schema,
            options,
            namer: TypeNamer::new(options),
            mapper: TypeScriptTypeMapper,
        }
    }

    fn file(&self) -> CodeFile {
        let referenced = self.referenced_system_types();
        let style = self.options.declaration_style;

        let mut file = CodeFile::new();
        if self.options.include_system_types {
            file = file.import(
                referenced
                    .iter()
                    .fold(Import::new(SDK_MODULE).type_only(), |import, name| {
                        import.named(*name)
                    }),
            );
        }

        let declarations: Vec<Declaration> = self
            .schema
            .collections()
            .filter_map(|collection| self.collection_declaration(collection))
            .collect();
        debug!(
            declarations = declarations.len(),
            system_imports = referenced.len(),
            "emitting declarations"
        );

        file.add(self.aggregate_declaration(&referenced))
            .add_all(declarations)
            .comment(GEOJSON_COMMENT)
            .add_all(geojson_declarations(style))
    }

    /// SDK type name when `collection` is a builtin the SDK declares.
    fn sdk_type(&self, collection: &ResolvedCollection) -> Option<&'static str> {
        if collection.system {
            reserved_type_name(&collection.name)
        } else {
            None
        }
    }

    /// SDK types reachable from the emitted declarations, in first
    /// reference order.
    ///
    /// Custom fields on builtin collections may point at further builtins,
    /// so targets are followed until no new collection is reached.
    fn referenced_system_types(&self) -> Vec<&'static str> {
        let (user, builtin): (Vec<_>, Vec<_>) = self
            .schema
            .collections()
            .partition(|c| self.sdk_type(c).is_none());
        let mut queue: VecDeque<&ResolvedCollection> = user
            .into_iter()
            .chain(builtin.into_iter().filter(|c| c.has_custom_fields()))
            .collect();
        let mut visited: HashSet<&str> = queue.iter().map(|c| c.name.as_str()).collect();
        let mut referenced = Vec::new();

        while let Some(collection) = queue.pop_front() {
            let relations = self
                .declared_fields(collection)
                .into_iter()
                .filter_map(ResolvedField::relation);
            for relation in relations {
                for target in relation.target_collections() {
                    let Some(target) = self.schema.collection(target) else {
                        continue;
                    };
                    let Some(sdk) = self.sdk_type(target) else {
                        continue;
                    };
                    if !referenced.contains(&sdk) {
                        referenced.push(sdk);
                    }
                    if visited.insert(target.name.as_str()) {
                        queue.push_back(target);
                    }
                }
            }
        }
        referenced
    }

    /// The aggregate declaration mapping collection names to their types.
    fn aggregate_declaration(&self, referenced: &[&'static str]) -> Declaration {
        let members = self.schema.collections().filter_map(|collection| {
            let ty = match self.sdk_type(collection) {
                Some(sdk) if collection.has_custom_fields() => self.namer.custom_system(sdk),
                Some(sdk) if self.options.include_system_types && referenced.contains(&sdk) => {
                    self.generic_sdk_type(sdk)
                }
                Some(_) => return None,
                None if collection.is_empty() => return None,
                None if collection.singleton => self.type_name(collection),
                None => list_of(&self.type_name(collection)),
            };
            Some(Member::property(&collection.name, ty))
        });

        Declaration::new(
            self.options.declaration_style,
            &self.options.schema_type_name,
            members,
        )
    }

    /// Fields a collection's declaration lists. Builtin collections only
    /// list their custom fields.
    fn declared_fields<'c>(&self, collection: &'c ResolvedCollection) -> Vec<&'c ResolvedField> {
        match self.sdk_type(collection) {
            Some(_) => collection.custom_fields().collect(),
            None => collection.fields.iter().collect(),
        }
    }

    /// The declaration of a collection, if it has anything to declare.
    fn collection_declaration(&self, collection: &ResolvedCollection) -> Option<Declaration> {
        let fields = self.declared_fields(collection);
        if fields.is_empty() {
            return None;
        }

        let name = match self.sdk_type(collection) {
            Some(sdk) => self.namer.custom_system(sdk),
            None => self.type_name(collection),
        };
        let members = fields
            .into_iter()
            .map(|field| Member::property(&field.name, self.field_type(field)));
        Some(Declaration::new(
            self.options.declaration_style,
            name,
            members,
        ))
    }

    fn type_name(&self, collection: &ResolvedCollection) -> String {
        self.namer.collection(&collection.name, collection.singleton)
    }

    fn generic_sdk_type(&self, sdk: &str) -> String {
        format!("{}<{}>", sdk, self.options.schema_type_name)
    }

    /// Type reference to a relation target.
    ///
    /// Builtin targets are only referenced when the SDK types are imported.
    fn reference(&self, collection: &str) -> Option<String> {
        match self.schema.collection(collection) {
            Some(target) => match self.sdk_type(target) {
                Some(_) if !self.options.include_system_types => None,
                Some(sdk) => Some(self.generic_sdk_type(sdk)),
                None => Some(self.type_name(target)),
            },
            None => Some(self.mapper.unknown().to_string()),
        }
    }

    fn field_type(&self, field: &ResolvedField) -> String {
        let mut union = match &field.kind {
            FieldKind::Primitive { ty, relation } => self.primitive_type(ty, relation.as_ref()),
            FieldKind::Alias { relation } => self.alias_type(relation),
            FieldKind::Structured { ty, shape } => self.structured_type(ty, shape),
        };
        if field.nullable {
            union.push("null");
        }
        union.build()
    }

    fn scalar(&self, ty: &str) -> &'static str {
        if !self.mapper.is_known(ty) {
            debug!(ty, "unknown scalar type id");
        }
        self.mapper.map_scalar(ty)
    }

    fn primitive_type(&self, ty: &str, relation: Option<&RelationKind>) -> Union {
        let scalar = self.scalar(ty);
        let Some(relation) = relation else {
            return Union::new().member(scalar);
        };

        match relation {
            RelationKind::ManyToOne { collection, .. } => {
                Union::new().member(scalar).members(self.reference(collection))
            }
            RelationKind::OneToMany { collection, .. } => Union::new()
                .member(scalar)
                .members(self.reference(collection).map(|r| list_of(&r))),
            RelationKind::ManyToAny { targets } => {
                let mut union = Union::new().members(targets.iter().filter_map(|target| {
                    self.schema
                        .field(&target.collection, &target.primary_key)
                        .and_then(ResolvedField::scalar)
                        .map(|ty| self.scalar(ty))
                }));
                if union.is_empty() {
                    union.push(scalar);
                }
                union.members(targets.iter().filter_map(|t| self.reference(&t.collection)))
            }
            RelationKind::ManyToAnyDiscriminator { collections } if collections.is_empty() => {
                Union::new().member(scalar)
            }
            RelationKind::ManyToAnyDiscriminator { collections } => {
                Union::new().members(collections.iter().map(|c| quote_string(c)))
            }
        }
    }

    /// Aliases are typed through the stored field on the other side.
    fn alias_type(&self, relation: &RelationKind) -> Union {
        let unknown = || Union::new().member(self.mapper.unknown());

        let (collection, field, many) = match relation {
            RelationKind::ManyToOne { collection, field } => (collection, field, false),
            RelationKind::OneToMany { collection, field } => (collection, field, true),
            _ => return unknown(),
        };

        let foreign = self.schema.field(collection, field).map(|f| &f.kind);
        let Some(FieldKind::Primitive { ty, .. }) = foreign else {
            return unknown();
        };

        let scalar = self.scalar(ty);
        let target = self.reference(collection);
        if many {
            Union::new()
                .member(list_of(scalar))
                .members(target.map(|t| list_of(&t)))
        } else {
            Union::new().member(scalar).members(target)
        }
    }

    fn structured_type(&self, ty: &str, shape: &StructuredKind) -> Union {
        match shape {
            StructuredKind::List(items) => Union::new().member(self.list_type(items)),
            StructuredKind::SingleChoice {
                choices,
                allow_other,
                allow_none,
            } => {
                let scalar = self.mapper.map_scalar(ty);
                let mut union =
                    Union::new().members(choices.iter().map(|c| choice_literal(c, scalar)));
                if *allow_other {
                    union.push(scalar);
                }
                if *allow_none {
                    union.push("null");
                }
                union
            }
            // An empty array already expresses "no selection"
            StructuredKind::MultiChoice {
                choices,
                allow_other,
                ..
            } => multi_choice(choices.iter().map(Literal::text), *allow_other),
            StructuredKind::MultiChoiceTree { choices } => {
                multi_choice(choices.iter().map(Literal::text), false)
            }
            StructuredKind::Tags {
                presets,
                allow_custom,
            } => multi_choice(presets.iter().map(String::as_str), *allow_custom),
            StructuredKind::Unknown => Union::new().member(self.mapper.unknown()),
        }
    }

    /// `Array<{ a: string; b: number }>`
    fn list_type(&self, items: &[ListItem]) -> String {
        if items.is_empty() {
            return array_of("{}");
        }

        let members: Vec<String> = items
            .iter()
            .map(|item| {
                let ty = match &item.shape {
                    Some(shape) => self.structured_type(&item.ty, shape).build(),
                    None => self.scalar(&item.ty).to_string(),
                };
                format!("{}: {}", quote_property(&item.name), ty)
            })
            .collect();

        array_of(&format!("{{ {} }}", members.join("; ")))
    }
}

/// Single-choice literal typed by the field scalar.
fn choice_literal(literal: &Literal, scalar: &str) -> String {
    match (scalar, literal) {
        ("number", literal) if literal.is_numeric() => literal.text().to_string(),
        ("boolean", Literal::Bool(_)) => literal.text().to_string(),
        _ => quote_string(literal.text()),
    }
}

/// `Array<"a" | "b" | string>`
fn multi_choice<'v>(values: impl Iterator<Item = &'v str>, allow_other: bool) -> Union {
    let mut inner = Union::new().members(values.map(quote_string));
    if allow_other {
        inner.push("string");
    }
    Union::new().member(array_of(&inner.build()))
}
