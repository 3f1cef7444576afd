//! Classification of field types into the kinds the populator handles.

use syn::{GenericArgument, PathArguments, Type, TypePath};

const INTEGERS: [&str; 12] = [
    "i8", "i16", "i32", "i64", "i128", "isize", "u8", "u16", "u32", "u64", "u128", "usize",
];

/// How a field is written once its value has been resolved.
///
/// Decided once per field from the declared type. Anything that is not a
/// recognised scalar or container is assumed to be a nested struct; the
/// `Populate` bound on the generated call turns a wrong guess into a
/// compile error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// `String`
    Text,
    /// Any primitive integer
    Integer,
    /// `bool`
    Boolean,
    /// A struct held by value (or in a `Box`)
    Nested,
    /// `Option<T>` of a nested struct
    OptionalNested,
    /// `Rc<T>` / `Arc<T>` of a nested struct
    SharedNested,
    /// A shared reference, which can never be written through `&mut self`
    Unsettable,
    /// Anything else, labelled for the runtime error
    Unsupported(&'static str),
}

impl FieldKind {
    pub fn classify(ty: &Type) -> Self {
        match ty {
            Type::Group(group) => Self::classify(&group.elem),
            Type::Paren(paren) => Self::classify(&paren.elem),
            Type::Path(path) => Self::classify_path(path),
            Type::Reference(reference) if reference.mutability.is_some() => {
                Self::Unsupported("mutable reference")
            }
            Type::Reference(_) => Self::Unsettable,
            Type::Array(_) => Self::Unsupported("array"),
            Type::Slice(_) => Self::Unsupported("slice"),
            Type::Tuple(tuple) if tuple.elems.is_empty() => Self::Unsupported("unit"),
            Type::Tuple(_) => Self::Unsupported("tuple"),
            Type::Ptr(_) => Self::Unsupported("raw pointer"),
            Type::BareFn(_) => Self::Unsupported("function"),
            Type::TraitObject(_) | Type::ImplTrait(_) => Self::Unsupported("trait object"),
            Type::Never(_) => Self::Unsupported("never"),
            _ => Self::Unsupported("unknown"),
        }
    }

    fn classify_path(path: &TypePath) -> Self {
        if path.qself.is_some() {
            return Self::Nested;
        }
        let Some(segment) = path.path.segments.last() else {
            return Self::Unsupported("unknown");
        };
        let name = segment.ident.to_string();
        let inner = single_type_argument(&segment.arguments);

        match (name.as_str(), inner) {
            ("String", None) => Self::Text,
            ("bool", None) => Self::Boolean,
            (int, None) if INTEGERS.contains(&int) => Self::Integer,
            ("f32" | "f64", None) => Self::Unsupported("float"),
            ("char", None) => Self::Unsupported("char"),
            ("str", None) => Self::Unsupported("str"),
            ("Vec" | "VecDeque" | "LinkedList" | "BinaryHeap", _) => Self::Unsupported("sequence"),
            ("HashMap" | "BTreeMap", _) => Self::Unsupported("map"),
            ("HashSet" | "BTreeSet", _) => Self::Unsupported("set"),
            ("Option", Some(inner)) => match Self::classify(inner) {
                Self::Nested => Self::OptionalNested,
                _ => Self::Unsupported("option"),
            },
            ("Box", Some(inner)) => match Self::classify(inner) {
                Self::Nested => Self::Nested,
                _ => Self::Unsupported("box"),
            },
            ("Rc" | "Arc", Some(inner)) => match Self::classify(inner) {
                Self::Nested => Self::SharedNested,
                _ => Self::Unsupported("shared pointer"),
            },
            _ => Self::Nested,
        }
    }
}

/// The only type argument of `Wrapper<T>`, if there is exactly one.
fn single_type_argument(arguments: &PathArguments) -> Option<&Type> {
    let PathArguments::AngleBracketed(args) = arguments else {
        return None;
    };
    let mut types = args.args.iter().filter_map(|arg| match arg {
        GenericArgument::Type(ty) => Some(ty),
        _ => None,
    });
    match (types.next(), types.next()) {
        (Some(ty), None) => Some(ty),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    fn kind(ty: Type) -> FieldKind {
        FieldKind::classify(&ty)
    }

    #[test]
    fn test_scalars() {
        assert_eq!(kind(parse_quote!(String)), FieldKind::Text);
        assert_eq!(kind(parse_quote!(std::string::String)), FieldKind::Text);
        assert_eq!(kind(parse_quote!(bool)), FieldKind::Boolean);
        assert_eq!(kind(parse_quote!(i64)), FieldKind::Integer);
        assert_eq!(kind(parse_quote!(u16)), FieldKind::Integer);
        assert_eq!(kind(parse_quote!(usize)), FieldKind::Integer);
    }

    #[test]
    fn test_nested() {
        assert_eq!(kind(parse_quote!(DatabaseConfig)), FieldKind::Nested);
        assert_eq!(kind(parse_quote!(crate::db::Pool)), FieldKind::Nested);
        assert_eq!(kind(parse_quote!(Box<DatabaseConfig>)), FieldKind::Nested);
        assert_eq!(kind(parse_quote!(Wrapper<String>)), FieldKind::Nested);
    }

    #[test]
    fn test_optional_nested() {
        assert_eq!(
            kind(parse_quote!(Option<DatabaseConfig>)),
            FieldKind::OptionalNested
        );
        assert_eq!(
            kind(parse_quote!(Option<Box<DatabaseConfig>>)),
            FieldKind::OptionalNested
        );
    }

    #[test]
    fn test_shared_nested() {
        assert_eq!(kind(parse_quote!(Arc<TlsConfig>)), FieldKind::SharedNested);
        assert_eq!(
            kind(parse_quote!(std::rc::Rc<TlsConfig>)),
            FieldKind::SharedNested
        );
    }

    #[test]
    fn test_references() {
        assert_eq!(kind(parse_quote!(&'static str)), FieldKind::Unsettable);
        assert_eq!(kind(parse_quote!(&'a Config)), FieldKind::Unsettable);
        assert_eq!(
            kind(parse_quote!(&'a mut Config)),
            FieldKind::Unsupported("mutable reference")
        );
    }

    #[test]
    fn test_unsupported() {
        assert_eq!(kind(parse_quote!(f64)), FieldKind::Unsupported("float"));
        assert_eq!(kind(parse_quote!(char)), FieldKind::Unsupported("char"));
        assert_eq!(kind(parse_quote!(Vec<String>)), FieldKind::Unsupported("sequence"));
        assert_eq!(
            kind(parse_quote!(HashMap<String, String>)),
            FieldKind::Unsupported("map")
        );
        assert_eq!(kind(parse_quote!(Option<String>)), FieldKind::Unsupported("option"));
        assert_eq!(kind(parse_quote!(Option<u32>)), FieldKind::Unsupported("option"));
        assert_eq!(kind(parse_quote!(Box<str>)), FieldKind::Unsupported("box"));
        assert_eq!(kind(parse_quote!((u8, u8))), FieldKind::Unsupported("tuple"));
        assert_eq!(kind(parse_quote!([u8; 4])), FieldKind::Unsupported("array"));
    }
}
