use super::lower;
use crate::schema::{AstFamily, NodeDef};

fn expr_family() -> AstFamily {
    AstFamily::new(
        "Expr",
        vec![
            NodeDef::parse("Literal", &["object value"]).unwrap(),
            NodeDef::parse("Unary", &["Token operator", "Expr right"]).unwrap(),
        ],
    )
    .unwrap()
}

#[test]
fn one_interface_method_per_node_in_declaration_order() {
    let unit = lower(&expr_family());
    assert_eq!(unit.family, "Expr");
    let names: Vec<_> = unit.visitor.methods.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, ["VisitLiteral", "VisitUnary"]);
}

#[test]
fn interface_methods_take_the_concrete_node_type() {
    let unit = lower(&expr_family());
    let unary = &unit.visitor.methods[1];
    assert_eq!(unary.param_type, "Unary");
    assert_eq!(unary.param_name, "expr");
}

#[test]
fn every_node_dispatches_to_its_own_method() {
    let unit = lower(&expr_family());
    assert_eq!(unit.nodes.len(), unit.visitor.methods.len());
    for (node, method) in unit.nodes.iter().zip(&unit.visitor.methods) {
        assert_eq!(node.dispatch, method.name);
        assert_eq!(node.name, method.param_type);
        assert_eq!(node.base, "Expr");
    }
}

#[test]
fn members_keep_field_order_and_split_casing() {
    let unit = lower(&expr_family());
    let unary = &unit.nodes[1];
    let properties: Vec<_> = unary.members.iter().map(|m| m.property.as_str()).collect();
    assert_eq!(properties, ["Operator", "Right"]);
    let params: Vec<_> = unary.members.iter().map(|m| m.param.as_str()).collect();
    assert_eq!(params, ["operator", "right"]);
    assert_eq!(unary.members[0].declared_type, "Token");
}

#[test]
fn camel_case_identifiers_round_trip_through_both_casings() {
    let family = AstFamily::new(
        "Stmt",
        vec![NodeDef::parse("IfCheck", &["Expr condition", "Stmt thenBranch", "Stmt elseBranch"]).unwrap()],
    )
    .unwrap();
    let unit = lower(&family);
    let check = &unit.nodes[0];
    assert_eq!(check.dispatch, "VisitIfCheck");
    assert_eq!(unit.visitor.methods[0].param_name, "stmt");
    assert_eq!(check.members[1].property, "ThenBranch");
    assert_eq!(check.members[1].param, "thenBranch");
}

#[test]
fn declared_types_pass_through_verbatim() {
    let family = AstFamily::new(
        "Stmt",
        vec![NodeDef::parse("Block", &["List<Stmt> statements"]).unwrap()],
    )
    .unwrap();
    let unit = lower(&family);
    let member = &unit.nodes[0].members[0];
    assert_eq!(member.declared_type, "List<Stmt>");
    assert_eq!(member.property, "Statements");
    assert_eq!(member.param, "statements");
}

#[test]
fn empty_field_list_lowers_to_memberless_type() {
    let family = AstFamily::new("Expr", vec![NodeDef::new("Nil", Vec::new()).unwrap()]).unwrap();
    let unit = lower(&family);
    assert!(unit.nodes[0].members.is_empty());
    assert_eq!(unit.nodes[0].dispatch, "VisitNil");
    assert_eq!(unit.visitor.methods[0].param_name, "expr");
}
