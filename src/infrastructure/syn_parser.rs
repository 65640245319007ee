//! Rust frontend.
//!
//! Parses a file with syn and lowers it into the stock node kinds, so the
//! stock strategies can draw Rust code. Constructs without a stock
//! counterpart become `Unsupported` nodes, which the stock registry ignores.

use crate::domain::error::ParseError;
use crate::domain::language::SourceLanguage;
use crate::domain::syntax::{FieldValue, NodeId, Scalar, SyntaxNode, SyntaxTree};
use crate::ports::SourceParser;
use syn::{BinOp, Block, Expr, FnArg, ImplItem, Item, Lit, Member, Pat, Signature, Stmt, Type, UnOp, UseTree};

pub struct SynSourceParser;

impl SourceParser for SynSourceParser {
    fn language(&self) -> SourceLanguage {
        SourceLanguage::Rust
    }

    fn parse(&self, src: &str) -> Result<SyntaxTree, ParseError> {
        let file = syn::parse_file(src).map_err(|e| {
            let start: proc_macro2::LineColumn = e.span().start();
            ParseError::Syntax {
                line: start.line,
                column: start.column + 1,
                message: e.to_string(),
            }
        })?;

        let mut lowering = Lowering::default();
        let body: Vec<NodeId> = file.items.iter().map(|item| lowering.item(item)).collect();
        let root = lowering.add(SyntaxNode::new("Module").with_field("body", body));

        let mut tree = lowering.tree;
        tree.set_root(root);
        Ok(tree)
    }
}

/// How a Rust binary operator maps onto the stock kinds.
enum OpClass {
    Arithmetic(&'static str),
    Boolean(&'static str),
    Comparison(&'static str),
    Augmented(&'static str),
}

fn classify(op: &BinOp) -> Option<OpClass> {
    use OpClass::*;
    let class = match op {
        BinOp::Add(_) => Arithmetic("Add"),
        BinOp::Sub(_) => Arithmetic("Sub"),
        BinOp::Mul(_) => Arithmetic("Mult"),
        BinOp::Div(_) => Arithmetic("Div"),
        BinOp::Rem(_) => Arithmetic("Mod"),
        BinOp::BitXor(_) => Arithmetic("BitXor"),
        BinOp::BitAnd(_) => Arithmetic("BitAnd"),
        BinOp::BitOr(_) => Arithmetic("BitOr"),
        BinOp::Shl(_) => Arithmetic("LShift"),
        BinOp::Shr(_) => Arithmetic("RShift"),
        BinOp::And(_) => Boolean("And"),
        BinOp::Or(_) => Boolean("Or"),
        BinOp::Eq(_) => Comparison("Eq"),
        BinOp::Ne(_) => Comparison("NotEq"),
        BinOp::Lt(_) => Comparison("Lt"),
        BinOp::Le(_) => Comparison("LtE"),
        BinOp::Gt(_) => Comparison("Gt"),
        BinOp::Ge(_) => Comparison("GtE"),
        BinOp::AddAssign(_) => Augmented("Add"),
        BinOp::SubAssign(_) => Augmented("Sub"),
        BinOp::MulAssign(_) => Augmented("Mult"),
        BinOp::DivAssign(_) => Augmented("Div"),
        BinOp::RemAssign(_) => Augmented("Mod"),
        BinOp::BitXorAssign(_) => Augmented("BitXor"),
        BinOp::BitAndAssign(_) => Augmented("BitAnd"),
        BinOp::BitOrAssign(_) => Augmented("BitOr"),
        BinOp::ShlAssign(_) => Augmented("LShift"),
        BinOp::ShrAssign(_) => Augmented("RShift"),
        _ => return None,
    };
    Some(class)
}

fn path_string(path: &syn::Path) -> String {
    let segments: Vec<String> = path.segments.iter().map(|s| s.ident.to_string()).collect();
    let joined = segments.join("::");
    if path.leading_colon.is_some() {
        format!("::{}", joined)
    } else {
        joined
    }
}

fn use_path(tree: &UseTree) -> String {
    match tree {
        UseTree::Path(p) => format!("{}::{}", p.ident, use_path(&p.tree)),
        UseTree::Name(n) => n.ident.to_string(),
        UseTree::Rename(r) => format!("{} as {}", r.ident, r.rename),
        UseTree::Glob(_) => "*".to_string(),
        UseTree::Group(_) => "{..}".to_string(),
    }
}

fn type_name(ty: &Type) -> String {
    match ty {
        Type::Path(tp) => tp
            .path
            .segments
            .last()
            .map(|s| s.ident.to_string())
            .unwrap_or_default(),
        _ => "impl".to_string(),
    }
}

fn pat_name(pat: &Pat) -> String {
    match pat {
        Pat::Ident(p) => p.ident.to_string(),
        Pat::Type(p) => pat_name(&p.pat),
        Pat::Reference(p) => pat_name(&p.pat),
        _ => "_".to_string(),
    }
}

/// Statement-position expressions that lower to statement kinds directly
/// instead of being wrapped in `Expr`.
fn is_statement_like(expr: &Expr) -> bool {
    match expr {
        Expr::If(_)
        | Expr::While(_)
        | Expr::ForLoop(_)
        | Expr::Loop(_)
        | Expr::Return(_)
        | Expr::Break(_)
        | Expr::Continue(_)
        | Expr::Assign(_) => true,
        Expr::Binary(b) => matches!(classify(&b.op), Some(OpClass::Augmented(_))),
        _ => false,
    }
}

#[derive(Default)]
struct Lowering {
    tree: SyntaxTree,
}

impl Lowering {
    fn add(&mut self, node: SyntaxNode) -> NodeId {
        self.tree.add(node)
    }

    fn leaf(&mut self, kind: &str) -> NodeId {
        self.add(SyntaxNode::new(kind))
    }

    fn name(&mut self, id: impl Into<String>) -> NodeId {
        self.add(SyntaxNode::new("Name").with_field("id", Scalar::Str(id.into())))
    }

    fn unsupported(&mut self, what: &str) -> NodeId {
        self.add(SyntaxNode::new("Unsupported").with_field("syntax", Scalar::from(what)))
    }

    fn item(&mut self, item: &Item) -> NodeId {
        match item {
            Item::Fn(f) => self.function(&f.sig, &f.block),
            Item::Struct(s) => {
                let fields: Vec<NodeId> = s
                    .fields
                    .iter()
                    .filter_map(|field| field.ident.as_ref())
                    .map(|ident| {
                        let target = self.name(ident.to_string());
                        self.add(SyntaxNode::new("AnnAssign").with_field("target", target))
                    })
                    .collect();
                self.class(s.ident.to_string(), fields)
            }
            Item::Enum(e) => {
                let variants: Vec<NodeId> = e
                    .variants
                    .iter()
                    .map(|variant| self.name(variant.ident.to_string()))
                    .collect();
                self.class(e.ident.to_string(), variants)
            }
            Item::Impl(imp) => {
                let self_name = type_name(&imp.self_ty);
                let name = match &imp.trait_ {
                    Some((_, trait_path, _)) => {
                        let trait_name = trait_path
                            .segments
                            .last()
                            .map(|s| s.ident.to_string())
                            .unwrap_or_default();
                        format!("{} for {}", trait_name, self_name)
                    }
                    None => self_name,
                };
                let methods: Vec<NodeId> = imp
                    .items
                    .iter()
                    .filter_map(|impl_item| match impl_item {
                        ImplItem::Fn(method) => Some(method),
                        _ => None,
                    })
                    .map(|method| self.function(&method.sig, &method.block))
                    .collect();
                self.class(name, methods)
            }
            Item::Mod(module) => {
                let body: Vec<NodeId> = match &module.content {
                    Some((_, items)) => items.iter().map(|item| self.item(item)).collect(),
                    None => Vec::new(),
                };
                self.add(
                    SyntaxNode::new("ModuleDef")
                        .with_field("name", Scalar::Str(module.ident.to_string()))
                        .with_field("body", body),
                )
            }
            Item::Const(c) => {
                let target = self.name(c.ident.to_string());
                let value = self.expr(&c.expr);
                self.assign(target, value)
            }
            Item::Static(s) => {
                let target = self.name(s.ident.to_string());
                let value = self.expr(&s.expr);
                self.assign(target, value)
            }
            Item::Use(u) => self.add(
                SyntaxNode::new("Import").with_field("name", Scalar::Str(use_path(&u.tree))),
            ),
            Item::Macro(m) => self.macro_call(&m.mac),
            _ => self.unsupported("item"),
        }
    }

    fn class(&mut self, name: String, body: Vec<NodeId>) -> NodeId {
        self.add(
            SyntaxNode::new("ClassDef")
                .with_field("name", Scalar::Str(name))
                .with_field("body", body),
        )
    }

    fn assign(&mut self, target: NodeId, value: NodeId) -> NodeId {
        self.add(
            SyntaxNode::new("Assign")
                .with_field("targets", vec![target])
                .with_field("value", value),
        )
    }

    fn function(&mut self, sig: &Signature, block: &Block) -> NodeId {
        let args: Vec<NodeId> = sig
            .inputs
            .iter()
            .map(|input| {
                let name = match input {
                    FnArg::Receiver(_) => "self".to_string(),
                    FnArg::Typed(pt) => pat_name(&pt.pat),
                };
                self.add(SyntaxNode::new("arg").with_field("arg", Scalar::Str(name)))
            })
            .collect();
        let arguments = self.add(SyntaxNode::new("arguments").with_field("args", args));
        let body = self.block(block);

        let kind = if sig.asyncness.is_some() {
            "AsyncFunctionDef"
        } else {
            "FunctionDef"
        };
        self.add(
            SyntaxNode::new(kind)
                .with_field("name", Scalar::Str(sig.ident.to_string()))
                .with_field("args", arguments)
                .with_field("body", body),
        )
    }

    fn block(&mut self, block: &Block) -> Vec<NodeId> {
        block.stmts.iter().map(|stmt| self.stmt(stmt)).collect()
    }

    fn stmt(&mut self, stmt: &Stmt) -> NodeId {
        match stmt {
            Stmt::Local(local) => {
                let target = self.pattern(&local.pat);
                match &local.init {
                    Some(init) => {
                        let value = self.expr(&init.expr);
                        self.assign(target, value)
                    }
                    None => self.add(SyntaxNode::new("AnnAssign").with_field("target", target)),
                }
            }
            Stmt::Item(item) => self.item(item),
            Stmt::Expr(expr, _) if is_statement_like(expr) => self.expr(expr),
            Stmt::Expr(expr, _) => {
                let value = self.expr(expr);
                self.add(SyntaxNode::new("Expr").with_field("value", value))
            }
            Stmt::Macro(m) => self.macro_call(&m.mac),
        }
    }

    fn pattern(&mut self, pat: &Pat) -> NodeId {
        match pat {
            Pat::Ident(p) => self.name(p.ident.to_string()),
            Pat::Type(p) => self.pattern(&p.pat),
            Pat::Reference(p) => self.pattern(&p.pat),
            Pat::Wild(_) => self.name("_"),
            Pat::Tuple(t) => {
                let elts: Vec<NodeId> = t.elems.iter().map(|p| self.pattern(p)).collect();
                self.add(SyntaxNode::new("Tuple").with_field("elts", elts))
            }
            _ => self.unsupported("pattern"),
        }
    }

    fn macro_call(&mut self, mac: &syn::Macro) -> NodeId {
        self.add(
            SyntaxNode::new("Macro").with_field("name", Scalar::Str(format!("{}!", path_string(&mac.path)))),
        )
    }

    fn constant(&mut self, lit: &Lit) -> NodeId {
        let value = match lit {
            Lit::Str(s) => Scalar::Str(s.value()),
            Lit::ByteStr(b) => Scalar::Str(String::from_utf8_lossy(&b.value()).into_owned()),
            Lit::Byte(b) => Scalar::Int(i64::from(b.value())),
            Lit::Char(c) => Scalar::Str(c.value().to_string()),
            Lit::Int(i) => i
                .base10_parse::<u64>()
                .map(Scalar::from)
                .unwrap_or_else(|_| Scalar::Str(i.base10_digits().to_string())),
            Lit::Float(f) => f
                .base10_parse::<f64>()
                .map(Scalar::Float)
                .unwrap_or_else(|_| Scalar::Str(f.base10_digits().to_string())),
            Lit::Bool(b) => Scalar::Bool(b.value),
            _ => return self.unsupported("literal"),
        };
        self.add(SyntaxNode::new("Constant").with_field("value", value))
    }

    fn exprs<'a>(&mut self, exprs: impl IntoIterator<Item = &'a Expr>) -> Vec<NodeId> {
        exprs.into_iter().map(|e| self.expr(e)).collect()
    }

    fn expr(&mut self, expr: &Expr) -> NodeId {
        match expr {
            Expr::Lit(l) => self.constant(&l.lit),
            Expr::Path(p) => self.name(path_string(&p.path)),
            Expr::Paren(p) => self.expr(&p.expr),
            Expr::Group(g) => self.expr(&g.expr),
            Expr::Binary(b) => {
                let Some(class) = classify(&b.op) else {
                    return self.unsupported("binary operator");
                };
                let left = self.expr(&b.left);
                let right = self.expr(&b.right);
                match class {
                    OpClass::Arithmetic(op) => {
                        let op = self.leaf(op);
                        self.add(
                            SyntaxNode::new("BinOp")
                                .with_field("left", left)
                                .with_field("op", op)
                                .with_field("right", right),
                        )
                    }
                    OpClass::Boolean(op) => {
                        let op = self.leaf(op);
                        self.add(
                            SyntaxNode::new("BoolOp")
                                .with_field("op", op)
                                .with_field("values", vec![left, right]),
                        )
                    }
                    OpClass::Comparison(op) => {
                        let op = self.leaf(op);
                        self.add(
                            SyntaxNode::new("Compare")
                                .with_field("left", left)
                                .with_field("ops", vec![op])
                                .with_field("comparators", vec![right]),
                        )
                    }
                    OpClass::Augmented(op) => {
                        let op = self.leaf(op);
                        self.add(
                            SyntaxNode::new("AugAssign")
                                .with_field("target", left)
                                .with_field("op", op)
                                .with_field("value", right),
                        )
                    }
                }
            }
            Expr::Unary(u) => {
                let op = match u.op {
                    UnOp::Not(_) => "Not",
                    UnOp::Neg(_) => "USub",
                    UnOp::Deref(_) => "Deref",
                    _ => return self.unsupported("unary operator"),
                };
                let operand = self.expr(&u.expr);
                self.unary(op, operand)
            }
            Expr::Reference(r) => {
                let operand = self.expr(&r.expr);
                self.unary("Ref", operand)
            }
            Expr::Call(c) => {
                let func = self.expr(&c.func);
                let args = self.exprs(&c.args);
                self.call(func, args)
            }
            Expr::MethodCall(m) => {
                let receiver = self.expr(&m.receiver);
                let func = self.attribute(receiver, m.method.to_string());
                let args = self.exprs(&m.args);
                self.call(func, args)
            }
            Expr::Field(f) => {
                let value = self.expr(&f.base);
                let attr = match &f.member {
                    Member::Named(ident) => ident.to_string(),
                    Member::Unnamed(index) => index.index.to_string(),
                };
                self.attribute(value, attr)
            }
            Expr::Index(i) => {
                let value = self.expr(&i.expr);
                let slice = self.expr(&i.index);
                self.add(
                    SyntaxNode::new("Subscript")
                        .with_field("value", value)
                        .with_field("slice", slice),
                )
            }
            Expr::Tuple(t) => {
                let elts = self.exprs(&t.elems);
                self.add(SyntaxNode::new("Tuple").with_field("elts", elts))
            }
            Expr::Array(a) => {
                let elts = self.exprs(&a.elems);
                self.add(SyntaxNode::new("List").with_field("elts", elts))
            }
            Expr::Block(b) => {
                let body = self.block(&b.block);
                self.add(SyntaxNode::new("Block").with_field("body", body))
            }
            Expr::Unsafe(u) => {
                let body = self.block(&u.block);
                self.add(SyntaxNode::new("Block").with_field("body", body))
            }
            Expr::If(i) => {
                let test = self.expr(&i.cond);
                let body = self.block(&i.then_branch);
                let orelse = match &i.else_branch {
                    Some((_, otherwise)) => match otherwise.as_ref() {
                        Expr::Block(b) => self.block(&b.block),
                        other => vec![self.expr(other)],
                    },
                    None => Vec::new(),
                };
                self.add(
                    SyntaxNode::new("If")
                        .with_field("test", test)
                        .with_field("body", body)
                        .with_field("orelse", orelse),
                )
            }
            Expr::While(w) => {
                let test = self.expr(&w.cond);
                let body = self.block(&w.body);
                self.add(
                    SyntaxNode::new("While")
                        .with_field("test", test)
                        .with_field("body", body),
                )
            }
            Expr::ForLoop(f) => {
                let target = self.pattern(&f.pat);
                let iter = self.expr(&f.expr);
                let body = self.block(&f.body);
                self.add(
                    SyntaxNode::new("For")
                        .with_field("target", target)
                        .with_field("iter", iter)
                        .with_field("body", body),
                )
            }
            Expr::Loop(l) => {
                let body = self.block(&l.body);
                self.add(SyntaxNode::new("Loop").with_field("body", body))
            }
            Expr::Return(r) => {
                let value = match &r.expr {
                    Some(e) => FieldValue::Node(self.expr(e)),
                    None => FieldValue::Scalar(Scalar::None),
                };
                self.add(SyntaxNode::new("Return").with_field("value", value))
            }
            Expr::Break(_) => self.leaf("Break"),
            Expr::Continue(_) => self.leaf("Continue"),
            Expr::Assign(a) => {
                let target = self.expr(&a.left);
                let value = self.expr(&a.right);
                self.assign(target, value)
            }
            Expr::Macro(m) => self.macro_call(&m.mac),
            Expr::Closure(c) => {
                let args: Vec<NodeId> = c
                    .inputs
                    .iter()
                    .map(|p| {
                        let name = pat_name(p);
                        self.add(SyntaxNode::new("arg").with_field("arg", Scalar::Str(name)))
                    })
                    .collect();
                let arguments = self.add(SyntaxNode::new("arguments").with_field("args", args));
                let body = self.expr(&c.body);
                self.add(
                    SyntaxNode::new("Lambda")
                        .with_field("args", arguments)
                        .with_field("body", body),
                )
            }
            Expr::Range(r) => {
                let mut node = SyntaxNode::new("Slice");
                if let Some(start) = &r.start {
                    node = node.with_field("lower", self.expr(start));
                }
                if let Some(end) = &r.end {
                    node = node.with_field("upper", self.expr(end));
                }
                self.add(node)
            }
            Expr::Await(a) => {
                let value = self.expr(&a.base);
                self.add(SyntaxNode::new("Await").with_field("value", value))
            }
            _ => self.unsupported("expression"),
        }
    }

    fn unary(&mut self, op: &str, operand: NodeId) -> NodeId {
        let op = self.leaf(op);
        self.add(
            SyntaxNode::new("UnaryOp")
                .with_field("op", op)
                .with_field("operand", operand),
        )
    }

    fn call(&mut self, func: NodeId, args: Vec<NodeId>) -> NodeId {
        self.add(
            SyntaxNode::new("Call")
                .with_field("func", func)
                .with_field("args", args),
        )
    }

    fn attribute(&mut self, value: NodeId, attr: String) -> NodeId {
        self.add(
            SyntaxNode::new("Attribute")
                .with_field("value", value)
                .with_field("attr", Scalar::Str(attr)),
        )
    }
}
