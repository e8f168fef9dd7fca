//! Declared-type rendering for documented members.

use idldoc_schema::{SchemaMember, TypeRef};

use crate::error::TransmogrifyError;

/// Render a member's declared type for its field-list annotation.
///
/// Returns `Ok(None)` for members with no type concept (enum values);
/// callers skip the annotation entirely. Arrays render as `[T]` with the
/// element's canonical name, other types as their canonical name, and an
/// optional member gets a trailing `?`.
///
/// An empty canonical name means the upstream tree is malformed; the
/// pass is aborted with an invariant error.
pub fn format_type(member: &SchemaMember) -> Result<Option<String>, TransmogrifyError> {
    let Some(ty) = member.type_ref() else {
        return Ok(None);
    };

    let name = match ty {
        TypeRef::Name(name) | TypeRef::Array(name) => name,
    };
    if name.is_empty() {
        return Err(TransmogrifyError::Invariant(format!(
            "member '{}' has a type without a canonical name",
            member.name()
        )));
    }

    let mut rendered = match ty {
        TypeRef::Name(_) => name.clone(),
        TypeRef::Array(_) => format!("[{name}]"),
    };
    if member.optional() {
        rendered.push('?');
    }
    Ok(Some(rendered))
}

#[cfg(test)]
mod tests {
    use super::*;
    use idldoc_schema::SourceInfo;
    use pretty_assertions::assert_eq;

    fn member(name: &str) -> SchemaMember {
        SchemaMember::new(name, SourceInfo::new("test.idl", 1))
    }

    #[test]
    fn test_named_type() {
        let m = member("x").with_type(TypeRef::Name("int".to_owned()));
        assert_eq!(format_type(&m).unwrap(), Some("int".to_owned()));
    }

    #[test]
    fn test_array_type() {
        let m = member("x").with_type(TypeRef::Array("Foo".to_owned()));
        assert_eq!(format_type(&m).unwrap(), Some("[Foo]".to_owned()));
    }

    #[test]
    fn test_optional_array_type() {
        let m = member("x")
            .with_type(TypeRef::Array("Foo".to_owned()))
            .with_optional(true);
        assert_eq!(format_type(&m).unwrap(), Some("[Foo]?".to_owned()));
    }

    #[test]
    fn test_untyped_member_has_no_annotation() {
        assert_eq!(format_type(&member("running")).unwrap(), None);
    }

    #[test]
    fn test_unresolvable_name_aborts() {
        let m = member("x").with_type(TypeRef::Name(String::new()));
        let err = format_type(&m).unwrap_err();
        assert!(matches!(err, TransmogrifyError::Invariant(_)));
    }
}
