use astgraph::domain::visualizers::default_registry;
use astgraph::{visualize, AstGraph, NodeId, Scalar, SyntaxNode, SyntaxTree};

fn draw(tree: &SyntaxTree, root: NodeId) -> AstGraph {
    let mut graph = AstGraph::new();
    visualize(tree, root, &default_registry(), &mut graph).unwrap();
    graph
}

fn name(tree: &mut SyntaxTree, id: &str) -> NodeId {
    tree.add(SyntaxNode::new("Name").with_field("id", Scalar::from(id)))
}

fn constant(tree: &mut SyntaxTree, value: impl Into<Scalar>) -> NodeId {
    tree.add(SyntaxNode::new("Constant").with_field("value", value.into()))
}

fn label(graph: &AstGraph, id: usize) -> Option<&str> {
    graph.properties(id).and_then(|p| p.label.as_deref())
}

fn edge_labels(graph: &AstGraph) -> Vec<Option<&str>> {
    graph.edges().iter().map(|e| e.label.as_deref()).collect()
}

/// `def f(): return g(x + 1) < 3` in the stock kinds, with an `arguments`
/// node the stock registry does not draw.
fn function(tree: &mut SyntaxTree) -> NodeId {
    let x = name(tree, "x");
    let one = constant(tree, 1i64);
    let add = tree.add(SyntaxNode::new("Add"));
    let sum = tree.add(
        SyntaxNode::new("BinOp")
            .with_field("left", x)
            .with_field("op", add)
            .with_field("right", one),
    );
    let g = name(tree, "g");
    let call = tree.add(
        SyntaxNode::new("Call")
            .with_field("func", g)
            .with_field("args", vec![sum]),
    );
    let three = constant(tree, 3i64);
    let lt = tree.add(SyntaxNode::new("Lt"));
    let cmp = tree.add(
        SyntaxNode::new("Compare")
            .with_field("left", call)
            .with_field("ops", vec![lt])
            .with_field("comparators", vec![three]),
    );
    let ret = tree.add(SyntaxNode::new("Return").with_field("value", cmp));
    let arg = tree.add(SyntaxNode::new("arg").with_field("arg", Scalar::from("y")));
    let args = tree.add(SyntaxNode::new("arguments").with_field("args", vec![arg]));
    tree.add(
        SyntaxNode::new("FunctionDef")
            .with_field("name", Scalar::from("f"))
            .with_field("args", args)
            .with_field("body", vec![ret]),
    )
}

#[test]
fn every_node_with_an_id_has_properties() {
    let mut tree = SyntaxTree::new();
    let root = function(&mut tree);
    let graph = draw(&tree, root);

    assert!(graph.node_count() > 0);
    for (id, props) in graph.nodes() {
        assert!(props.is_some(), "node {} has no properties", id);
    }
    for edge in graph.edges() {
        assert!(graph.properties(edge.from).is_some());
        assert!(graph.properties(edge.to).is_some());
    }
}

#[test]
fn node_ids_are_dense_and_stable() {
    let mut tree = SyntaxTree::new();
    let root = function(&mut tree);

    let first = draw(&tree, root);
    let mut ids: Vec<usize> = first.nodes().map(|(id, _)| id).collect();
    ids.sort_unstable();
    assert_eq!(ids, (0..first.node_count()).collect::<Vec<_>>());
    assert_eq!(first.node_id(root), Some(0));

    let second = draw(&tree, root);
    for (node_id, _) in tree.iter() {
        assert_eq!(first.node_id(node_id), second.node_id(node_id));
    }
    assert_eq!(first.edges(), second.edges());
}

#[test]
fn siblings_are_numbered_before_their_children() {
    let mut tree = SyntaxTree::new();
    let x = name(&mut tree, "x");
    let first = tree.add(SyntaxNode::new("Expr").with_field("value", x));
    let y = name(&mut tree, "y");
    let second = tree.add(SyntaxNode::new("Expr").with_field("value", y));
    let root = tree.add(SyntaxNode::new("Module").with_field("body", vec![first, second]));
    let graph = draw(&tree, root);

    let order: Vec<NodeId> = (0..graph.node_count())
        .filter_map(|id| graph.ast_node(id))
        .collect();
    assert_eq!(order, vec![root, first, second, x, y]);
    assert_eq!(graph.edge_label(1, 3), Some("value"));
    assert_eq!(graph.edge_label(2, 4), Some("value"));
}

#[test]
fn unresolvable_subtree_is_omitted() {
    let mut tree = SyntaxTree::new();
    let root = function(&mut tree);
    let graph = draw(&tree, root);

    for (node_id, node) in tree.iter() {
        if matches!(node.kind(), "arguments" | "arg" | "Add" | "Lt") {
            assert_eq!(graph.node_id(node_id), None, "{} was drawn", node.kind());
        }
    }
    // FunctionDef, Return, Compare, Call, g, BinOp, x, 1, 3
    assert_eq!(graph.node_count(), 9);
    assert_eq!(label(&graph, 0), Some("FunctionDef\nname=f"));
    assert_eq!(graph.edge_label(0, 1), Some("body #0"));
}

#[test]
fn lone_constant() {
    let mut tree = SyntaxTree::new();
    let root = constant(&mut tree, 42i64);
    let graph = draw(&tree, root);

    assert_eq!(graph.node_count(), 1);
    assert_eq!(label(&graph, 0), Some("42"));
    assert!(graph.edges().is_empty());
}

#[test]
fn binop_with_name_and_constant() {
    let mut tree = SyntaxTree::new();
    let x = name(&mut tree, "x");
    let add = tree.add(SyntaxNode::new("Add"));
    let one = constant(&mut tree, 1i64);
    let root = tree.add(
        SyntaxNode::new("BinOp")
            .with_field("left", x)
            .with_field("op", add)
            .with_field("right", one),
    );
    let graph = draw(&tree, root);

    assert_eq!(graph.node_count(), 3);
    assert_eq!(graph.node_id(root), Some(0));
    assert_eq!(label(&graph, 0), Some("+"));
    assert_eq!(label(&graph, 1), Some("x"));
    assert_eq!(label(&graph, 2), Some("1"));
    assert_eq!(edge_labels(&graph), vec![Some("left"), Some("right")]);
}

#[test]
fn call_with_two_arguments() {
    let mut tree = SyntaxTree::new();
    let f = name(&mut tree, "f");
    let a = constant(&mut tree, 1i64);
    let b = constant(&mut tree, 2i64);
    let root = tree.add(
        SyntaxNode::new("Call")
            .with_field("func", f)
            .with_field("args", vec![a, b]),
    );
    let graph = draw(&tree, root);

    assert_eq!(label(&graph, 0), Some("$func (#0,#1)"));
    assert_eq!(edge_labels(&graph), vec![Some("$func"), Some("#0"), Some("#1")]);
}

#[test]
fn chained_comparison() {
    let mut tree = SyntaxTree::new();
    let a = name(&mut tree, "a");
    let b = name(&mut tree, "b");
    let c = name(&mut tree, "c");
    let lt1 = tree.add(SyntaxNode::new("Lt"));
    let lt2 = tree.add(SyntaxNode::new("Lt"));
    let root = tree.add(
        SyntaxNode::new("Compare")
            .with_field("left", a)
            .with_field("ops", vec![lt1, lt2])
            .with_field("comparators", vec![b, c]),
    );
    let graph = draw(&tree, root);

    let a_id = graph.node_id(a).unwrap();
    let b_id = graph.node_id(b).unwrap();
    let c_id = graph.node_id(c).unwrap();
    assert_eq!(graph.edge_label(0, a_id), None);
    assert_eq!(graph.edge_label(0, b_id), Some("<"));
    assert_eq!(graph.edge_label(0, c_id), Some("<"));
    assert_eq!(graph.edges().len(), 3);
}

#[test]
fn shared_subnode_gets_one_id() {
    let mut tree = SyntaxTree::new();
    let x = name(&mut tree, "x");
    let mult = tree.add(SyntaxNode::new("Mult"));
    let root = tree.add(
        SyntaxNode::new("BinOp")
            .with_field("left", x)
            .with_field("op", mult)
            .with_field("right", x),
    );
    let graph = draw(&tree, root);

    assert_eq!(graph.node_count(), 2);
    assert_eq!(label(&graph, 0), Some("*"));
    assert_eq!(edge_labels(&graph), vec![Some("left"), Some("right")]);
    assert!(graph.edges().iter().all(|e| e.from == 0 && e.to == 1));
}

#[test]
fn dangling_child_is_an_error() {
    let mut tree = SyntaxTree::new();
    let mut other = SyntaxTree::new();
    other.add(SyntaxNode::new("Pass"));
    let ghost = other.add(SyntaxNode::new("Pass"));
    let root = tree.add(SyntaxNode::new("Module").with_field("body", vec![ghost]));

    let mut graph = AstGraph::new();
    let err = visualize(&tree, root, &default_registry(), &mut graph).unwrap_err();
    assert!(err.to_string().contains(&ghost.to_string()));
}
