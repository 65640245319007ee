//! Kind Hierarchy
//!
//! Supertype relations over node kind names. Registry lookups fall back to
//! these relations when no strategy is registered for a kind itself.

use crate::domain::error::HierarchyError;
use std::collections::HashMap;

/// Root of the stock hierarchy.
pub const ROOT_KIND: &str = "AST";

/// `kind -> parent` relations. A kind without a parent is a root.
#[derive(Debug, Clone, Default)]
pub struct KindHierarchy {
    parents: HashMap<String, String>,
}

impl KindHierarchy {
    pub fn new() -> Self {
        Self::default()
    }

    /// The stock hierarchy: classic AST node classes plus the extra kinds
    /// emitted by the Rust frontend.
    pub fn standard() -> Self {
        let mut hierarchy = Self::new();
        let groups: &[(&str, &[&str])] = &[
            (
                ROOT_KIND,
                &[
                    "mod",
                    "stmt",
                    "expr",
                    "operator",
                    "cmpop",
                    "boolop",
                    "unaryop",
                    "expr_context",
                    "arguments",
                    "arg",
                    "keyword",
                    "alias",
                    "comprehension",
                    "excepthandler",
                    "withitem",
                    "match_case",
                    "pattern",
                    "type_ignore",
                    "type_param",
                ],
            ),
            ("mod", &["Module", "Interactive", "Expression", "FunctionType"]),
            (
                "stmt",
                &[
                    "FunctionDef",
                    "AsyncFunctionDef",
                    "ClassDef",
                    "Return",
                    "Delete",
                    "Assign",
                    "AugAssign",
                    "AnnAssign",
                    "For",
                    "AsyncFor",
                    "While",
                    "If",
                    "With",
                    "AsyncWith",
                    "Match",
                    "Raise",
                    "Try",
                    "TryStar",
                    "Assert",
                    "Import",
                    "ImportFrom",
                    "Global",
                    "Nonlocal",
                    "Expr",
                    "Pass",
                    "Break",
                    "Continue",
                    "TypeAlias",
                    "Loop",
                    "ModuleDef",
                ],
            ),
            (
                "expr",
                &[
                    "BoolOp",
                    "NamedExpr",
                    "BinOp",
                    "UnaryOp",
                    "Lambda",
                    "IfExp",
                    "Dict",
                    "Set",
                    "ListComp",
                    "SetComp",
                    "DictComp",
                    "GeneratorExp",
                    "Await",
                    "Yield",
                    "YieldFrom",
                    "Compare",
                    "Call",
                    "FormattedValue",
                    "JoinedStr",
                    "TemplateStr",
                    "Interpolation",
                    "Constant",
                    "Attribute",
                    "Subscript",
                    "Starred",
                    "Name",
                    "List",
                    "Tuple",
                    "Slice",
                    "Block",
                    "Macro",
                ],
            ),
            (
                "operator",
                &[
                    "Add", "Sub", "Mult", "MatMult", "Div", "Mod", "Pow", "LShift", "RShift",
                    "BitOr", "BitXor", "BitAnd", "FloorDiv",
                ],
            ),
            (
                "cmpop",
                &["Eq", "NotEq", "Lt", "LtE", "Gt", "GtE", "Is", "IsNot", "In", "NotIn"],
            ),
            ("boolop", &["And", "Or"]),
            ("unaryop", &["Invert", "Not", "UAdd", "USub", "Ref", "Deref"]),
            ("expr_context", &["Load", "Store", "Del"]),
            ("excepthandler", &["ExceptHandler"]),
            (
                "pattern",
                &[
                    "MatchValue",
                    "MatchSingleton",
                    "MatchSequence",
                    "MatchMapping",
                    "MatchClass",
                    "MatchStar",
                    "MatchAs",
                    "MatchOr",
                ],
            ),
            ("type_ignore", &["TypeIgnore"]),
            ("type_param", &["TypeVar", "ParamSpec", "TypeVarTuple"]),
        ];

        for (parent, kinds) in groups {
            for kind in *kinds {
                hierarchy
                    .parents
                    .insert(kind.to_string(), parent.to_string());
            }
        }
        hierarchy
    }

    /// Declare `kind` as a direct subkind of `parent`, replacing any previous
    /// parent. Cycles are rejected and leave the hierarchy unchanged.
    pub fn declare(&mut self, kind: &str, parent: &str) -> Result<(), HierarchyError> {
        if self.is_subkind(parent, kind) {
            return Err(HierarchyError::Cycle {
                kind: kind.to_string(),
                parent: parent.to_string(),
            });
        }
        self.parents.insert(kind.to_string(), parent.to_string());
        Ok(())
    }

    pub fn parent(&self, kind: &str) -> Option<&str> {
        self.parents.get(kind).map(String::as_str)
    }

    /// `kind` itself followed by its ancestors, nearest first.
    pub fn ancestors<'a>(&'a self, kind: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        std::iter::successors(Some(kind), move |current| self.parent(current))
    }

    /// True when `ancestor` is `kind` or one of its supertypes.
    pub fn is_subkind(&self, kind: &str, ancestor: &str) -> bool {
        self.ancestors(kind).any(|k| k == ancestor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_relations() {
        let h = KindHierarchy::standard();
        assert!(h.is_subkind("BinOp", "expr"));
        assert!(h.is_subkind("BinOp", "BinOp"));
        assert!(h.is_subkind("Add", ROOT_KIND));
        assert!(!h.is_subkind("Add", "expr"));
        assert!(!h.is_subkind("expr", "BinOp"));
        assert!(!h.is_subkind("Unsupported", "expr"));
    }

    #[test]
    fn test_newer_statement_kinds() {
        let h = KindHierarchy::standard();
        for kind in ["Match", "TryStar", "TypeAlias"] {
            assert!(h.is_subkind(kind, "stmt"), "{} is not a stmt", kind);
        }
        assert!(h.is_subkind("MatchAs", "pattern"));
        assert!(h.is_subkind("TypeVar", "type_param"));
        assert!(!h.is_subkind("match_case", "stmt"));
    }

    #[test]
    fn test_ancestors_nearest_first() {
        let h = KindHierarchy::standard();
        let chain: Vec<&str> = h.ancestors("Module").collect();
        assert_eq!(chain, vec!["Module", "mod", "AST"]);
    }

    #[test]
    fn test_declare_rejects_cycles() {
        let mut h = KindHierarchy::new();
        h.declare("b", "a").unwrap();
        h.declare("c", "b").unwrap();
        let err = h.declare("a", "c").unwrap_err();
        assert_eq!(
            err,
            HierarchyError::Cycle {
                kind: "a".to_string(),
                parent: "c".to_string()
            }
        );
        assert_eq!(h.parent("a"), None);
        assert!(h.declare("a", "a").is_err());
    }

    #[test]
    fn test_declare_extends_standard() {
        let mut h = KindHierarchy::standard();
        h.declare("MatchCase", "stmt").unwrap();
        assert!(h.is_subkind("MatchCase", "stmt"));
    }
}
