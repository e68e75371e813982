//! Cross-module scope/resolution behavior: `ScopeManager`, `Resolver`,
//! and the graph working together the way `translate/` actually drives
//! them, rather than each module's own narrower unit tests.

use pycpg::base::Location;
use pycpg::cpg::{builders, Declaration, Graph};
use pycpg::scope::{Resolver, ScopeManager, ScopeOwner};

#[test]
fn global_is_visible_from_a_nested_function_scope() {
    let mut graph = Graph::new();
    let mut scopes = ScopeManager::new();
    scopes.reset_to_global();

    let global_var = graph.insert_declaration(builders::variable("g", None, None, false), Location::NoLocation);
    scopes.add_declaration(&graph, global_var);

    let function_id = graph.insert_declaration(builders::variable("<placeholder>", None, None, true), Location::NoLocation);
    scopes.enter(ScopeOwner::Function(function_id));

    let resolver = Resolver::new(&scopes, &graph);
    assert_eq!(resolver.resolve("g"), Some(global_var));
}

#[test]
fn parameter_shadows_outer_variable_of_the_same_name() {
    let mut graph = Graph::new();
    let mut scopes = ScopeManager::new();
    scopes.reset_to_global();

    let outer = graph.insert_declaration(builders::variable("x", None, None, false), Location::NoLocation);
    scopes.add_declaration(&graph, outer);

    let function_id = graph.insert_declaration(builders::variable("<placeholder>", None, None, true), Location::NoLocation);
    scopes.enter(ScopeOwner::Function(function_id));
    let param = graph.insert_declaration(builders::parameter("x", pycpg::cpg::TypeRef::Unknown, false), Location::NoLocation);
    scopes.add_declaration(&graph, param);

    let resolver = Resolver::new(&scopes, &graph);
    assert_eq!(resolver.resolve("x"), Some(param));

    scopes.leave(ScopeOwner::Function(function_id)).unwrap();
    let resolver = Resolver::new(&scopes, &graph);
    assert_eq!(resolver.resolve("x"), Some(outer));
}

#[test]
fn record_for_name_only_matches_a_record_declaration() {
    let mut graph = Graph::new();
    let mut scopes = ScopeManager::new();
    scopes.reset_to_global();

    let not_a_record = graph.insert_declaration(builders::variable("Thing", None, None, false), Location::NoLocation);
    scopes.add_declaration(&graph, not_a_record);

    let resolver = Resolver::new(&scopes, &graph);
    assert_eq!(resolver.record_for_name("Thing"), None);

    let record_id = graph.insert_declaration(builders::record("Other", Vec::new()), Location::NoLocation);
    scopes.add_declaration(&graph, record_id);
    let resolver = Resolver::new(&scopes, &graph);
    assert_eq!(resolver.record_for_name("Other"), Some(record_id));
}

#[test]
fn a_field_bound_inside_one_method_does_not_leak_into_a_sibling_method() {
    // Field declarations are registered in whatever scope is current at
    // bind time (the method body), not lexically hoisted into the
    // enclosing record scope — so a second method's body cannot resolve
    // a field assigned only inside the first one's. The `Record.fields`
    // list, not lexical scoping, is what later readers use to see every
    // field of a class.
    let mut graph = Graph::new();
    let mut scopes = ScopeManager::new();
    scopes.reset_to_global();

    let record_id = graph.insert_declaration(builders::record("A", Vec::new()), Location::NoLocation);
    scopes.enter(ScopeOwner::Record(record_id));

    let method_one = graph.insert_declaration(builders::variable("<placeholder>", None, None, true), Location::NoLocation);
    scopes.enter(ScopeOwner::Method(method_one));
    let field_id = graph.insert_declaration(builders::field("y", None, None, record_id), Location::NoLocation);
    scopes.add_declaration(&graph, field_id);
    scopes.leave(ScopeOwner::Method(method_one)).unwrap();

    let method_two = graph.insert_declaration(builders::variable("<placeholder>", None, None, true), Location::NoLocation);
    scopes.enter(ScopeOwner::Method(method_two));
    let resolver = Resolver::new(&scopes, &graph);
    assert_eq!(resolver.resolve("y"), None);
    scopes.leave(ScopeOwner::Method(method_two)).unwrap();

    match graph.declaration(record_id) {
        Declaration::Record(_) => {}
        other => panic!("expected a Record, got {other:?}"),
    }
}

#[test]
fn current_receiver_is_only_visible_inside_method_or_constructor_scopes() {
    let mut graph = Graph::new();
    let mut scopes = ScopeManager::new();
    scopes.reset_to_global();

    let record_id = graph.insert_declaration(builders::record("A", Vec::new()), Location::NoLocation);
    scopes.enter(ScopeOwner::Record(record_id));

    let function_id = graph.insert_declaration(builders::variable("<placeholder>", None, None, true), Location::NoLocation);
    scopes.enter(ScopeOwner::Function(function_id));
    assert_eq!(scopes.current_receiver(), None);
    assert!(!scopes.in_method_body());
    scopes.leave(ScopeOwner::Function(function_id)).unwrap();

    let method_id = graph.insert_declaration(builders::variable("<placeholder>", None, None, true), Location::NoLocation);
    scopes.enter(ScopeOwner::Method(method_id));
    let receiver = graph.insert_declaration(builders::parameter("self", pycpg::cpg::TypeRef::Named("A".into()), false), Location::NoLocation);
    scopes.set_receiver(receiver);
    assert_eq!(scopes.current_receiver(), Some(receiver));
    assert!(scopes.in_method_body());
    scopes.leave(ScopeOwner::Method(method_id)).unwrap();
}

#[test]
fn scope_imbalance_is_rejected_even_several_frames_deep() {
    let mut scopes = ScopeManager::new();
    scopes.reset_to_global();
    scopes.enter(ScopeOwner::Namespace(pycpg::cpg::DeclId::from_index(0)));
    scopes.enter(ScopeOwner::Function(pycpg::cpg::DeclId::from_index(1)));
    scopes.enter_block();

    let mismatch = scopes.leave(ScopeOwner::Function(pycpg::cpg::DeclId::from_index(1)));
    assert!(mismatch.is_err());
}
