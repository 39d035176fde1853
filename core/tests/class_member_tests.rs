use std::cell::RefCell;
use std::rc::Rc;

use crustyjs_decorators::Context;
use crustyjs_decorators::Value;
use crustyjs_decorators::ast::{ClassDecl, ClassMember, ClassMemberKind, Decorator, Expr};
use crustyjs_decorators::runtime::value::object::{JsObject, PropertyDescriptor};

type Log = Rc<RefCell<Vec<String>>>;

fn context_with_impl() -> Context {
    let mut ctx = Context::new();
    ctx.set_global_function("impl", |_| Ok(Value::Number(1.0)));
    ctx.set_global_function("getImpl", |_| Ok(Value::Number(2.0)));
    ctx.set_global_function("setImpl", |_| Ok(Value::Undefined));
    ctx
}

/// `name(tag)` logs its evaluation and returns a decorator that logs its
/// application and leaves the descriptor alone.
fn register_factory(ctx: &mut Context, name: &str, log: &Log) {
    let log = log.clone();
    let factory = name.to_string();
    ctx.set_global_function(name, move |args| {
        let tag = args.arg(0).to_js_string();
        log.borrow_mut().push(format!("eval {factory}({tag})"));
        let log = log.clone();
        let label = format!("{factory}({tag})");
        Ok(Value::native_function(
            label.clone(),
            crustyjs_decorators::NativeFunctionBoxed::from_closure(move |_| {
                log.borrow_mut().push(format!("apply {label}"));
                Ok(Value::Undefined)
            }),
        ))
    });
}

fn member(key: &str, kind: ClassMemberKind, value: &str, decorators: Vec<Decorator>) -> ClassMember {
    ClassMember {
        decorators,
        ..ClassMember::new(key, kind, Expr::ident(value))
    }
}

fn factory_call(name: &str, tag: &str) -> Decorator {
    Decorator::new(Expr::call(Expr::ident(name), vec![Expr::string(tag)]))
}

fn prototype_of(ctor: &Value) -> Value {
    ctor.get("prototype")
}

fn own_descriptor(object: &Value, key: &str) -> PropertyDescriptor {
    object
        .as_object()
        .expect("object")
        .borrow()
        .get_own_property(key)
        .expect("own property")
}

#[test]
fn decorators_evaluate_top_down_and_apply_bottom_up() {
    let mut ctx = context_with_impl();
    let log: Log = Rc::default();
    register_factory(&mut ctx, "F", &log);
    register_factory(&mut ctx, "G", &log);

    let mut class = ClassDecl::new("Foo");
    class.members.push(member(
        "m",
        ClassMemberKind::Method,
        "impl",
        vec![factory_call("F", "a"), factory_call("G", "b")],
    ));
    ctx.eval_class(&class).expect("class");

    assert_eq!(
        *log.borrow(),
        vec!["eval F(a)", "eval G(b)", "apply G(b)", "apply F(a)"]
    );
}

#[test]
fn each_decorator_expression_is_evaluated_once() {
    let mut ctx = context_with_impl();
    let log: Log = Rc::default();
    register_factory(&mut ctx, "F", &log);

    let mut class = ClassDecl::new("Foo");
    class.members.push(member(
        "m",
        ClassMemberKind::Method,
        "impl",
        vec![factory_call("F", "x")],
    ));
    ctx.eval_class(&class).expect("class");

    let evaluations = log.borrow().iter().filter(|e| e.starts_with("eval")).count();
    assert_eq!(evaluations, 1);
}

#[test]
fn readonly_marks_method_non_writable() {
    let mut ctx = context_with_impl();
    ctx.set_global_function("readonly", |args| {
        let descriptor = args.arg(2);
        descriptor
            .as_object()
            .expect("descriptor object")
            .borrow_mut()
            .set("writable".to_string(), Value::Boolean(false));
        Ok(descriptor)
    });

    let mut class = ClassDecl::new("Person");
    class.members.push(member(
        "name",
        ClassMemberKind::Method,
        "impl",
        vec![Decorator::new(Expr::ident("readonly"))],
    ));
    let ctor = ctx.eval_class(&class).expect("class");
    let implementation = ctx.get_global("impl").expect("impl");

    let descriptor = own_descriptor(&prototype_of(&ctor), "name");
    assert_eq!(
        descriptor,
        PropertyDescriptor::data(implementation, false, false, true)
    );
}

#[test]
fn decorators_that_return_undefined_leave_the_default_descriptor() {
    let mut ctx = context_with_impl();
    ctx.set_global_function("noop", |_| Ok(Value::Undefined));

    let mut class = ClassDecl::new("Foo");
    class.members.push(member(
        "m",
        ClassMemberKind::Method,
        "impl",
        vec![
            Decorator::new(Expr::ident("noop")),
            Decorator::new(Expr::ident("noop")),
        ],
    ));
    let ctor = ctx.eval_class(&class).expect("class");
    let implementation = ctx.get_global("impl").expect("impl");

    assert_eq!(
        own_descriptor(&prototype_of(&ctor), "m"),
        PropertyDescriptor::data(implementation, true, false, true)
    );
}

#[test]
fn outer_decorator_sees_inner_result() {
    let mut ctx = context_with_impl();
    let seen = Rc::new(RefCell::new(None));
    ctx.set_global_function("hide", |args| {
        let descriptor = PropertyDescriptor::from_value(&args.arg(2)).expect("descriptor");
        Ok(descriptor.with_configurable(false).to_value())
    });
    let seen_in = seen.clone();
    ctx.set_global_function("inspect", move |args| {
        let descriptor = PropertyDescriptor::from_value(&args.arg(2)).expect("descriptor");
        *seen_in.borrow_mut() = descriptor.configurable;
        Ok(Value::Undefined)
    });

    let mut class = ClassDecl::new("Foo");
    class.members.push(member(
        "m",
        ClassMemberKind::Method,
        "impl",
        vec![
            Decorator::new(Expr::ident("inspect")),
            Decorator::new(Expr::ident("hide")),
        ],
    ));
    ctx.eval_class(&class).expect("class");

    assert_eq!(*seen.borrow(), Some(false));
}

#[test]
fn static_members_target_the_constructor_and_instance_members_the_prototype() {
    let mut ctx = context_with_impl();
    let targets: Rc<RefCell<Vec<(String, Value)>>> = Rc::default();
    let record = targets.clone();
    ctx.set_global_function("where", move |args| {
        record
            .borrow_mut()
            .push((args.arg(1).to_js_string(), args.arg(0)));
        Ok(Value::Undefined)
    });

    let mut class = ClassDecl::new("Foo");
    class.members.push(ClassMember {
        is_static: true,
        ..member(
            "create",
            ClassMemberKind::Method,
            "impl",
            vec![Decorator::new(Expr::ident("where"))],
        )
    });
    class.members.push(member(
        "render",
        ClassMemberKind::Method,
        "impl",
        vec![Decorator::new(Expr::ident("where"))],
    ));
    let ctor = ctx.eval_class(&class).expect("class");

    let targets = targets.borrow();
    assert_eq!(targets[0].0, "create");
    assert_eq!(targets[0].1, ctor);
    assert_eq!(targets[1].0, "render");
    assert_eq!(targets[1].1, prototype_of(&ctor));
}

#[test]
fn static_and_instance_members_are_decorated_in_source_order() {
    let mut ctx = context_with_impl();
    let log: Log = Rc::default();
    register_factory(&mut ctx, "F", &log);

    let mut class = ClassDecl::new("Foo");
    class.members.push(ClassMember {
        is_static: true,
        ..member(
            "first",
            ClassMemberKind::Method,
            "impl",
            vec![factory_call("F", "first")],
        )
    });
    class.members.push(member(
        "second",
        ClassMemberKind::Method,
        "impl",
        vec![factory_call("F", "second")],
    ));
    class.members.push(ClassMember {
        is_static: true,
        ..member(
            "third",
            ClassMemberKind::Method,
            "impl",
            vec![factory_call("F", "third")],
        )
    });
    ctx.eval_class(&class).expect("class");

    assert_eq!(
        *log.borrow(),
        vec![
            "eval F(first)",
            "apply F(first)",
            "eval F(second)",
            "apply F(second)",
            "eval F(third)",
            "apply F(third)",
        ]
    );
}

#[test]
fn single_decorator_changes_only_the_attribute_it_touches() {
    let mut ctx = context_with_impl();
    ctx.set_global_function("enumerable", |args| {
        let descriptor = PropertyDescriptor::from_value(&args.arg(2)).expect("descriptor");
        Ok(descriptor.with_enumerable(true).to_value())
    });

    let mut class = ClassDecl::new("Foo");
    class.members.push(member(
        "m",
        ClassMemberKind::Method,
        "impl",
        vec![Decorator::new(Expr::ident("enumerable"))],
    ));
    let ctor = ctx.eval_class(&class).expect("class");
    let implementation = ctx.get_global("impl").expect("impl");

    assert_eq!(
        own_descriptor(&prototype_of(&ctor), "m"),
        PropertyDescriptor::data(implementation, true, true, true)
    );
}

#[test]
fn decorating_one_member_leaves_siblings_alone() {
    let mut ctx = context_with_impl();
    ctx.set_global_function("hidden", |args| {
        let descriptor = PropertyDescriptor::from_value(&args.arg(2)).expect("descriptor");
        Ok(descriptor.with_enumerable(false).with_writable(false).to_value())
    });

    let mut class = ClassDecl::new("Foo");
    class.members.push(member(
        "a",
        ClassMemberKind::Method,
        "impl",
        vec![Decorator::new(Expr::ident("hidden"))],
    ));
    class
        .members
        .push(member("b", ClassMemberKind::Method, "impl", Vec::new()));
    let ctor = ctx.eval_class(&class).expect("class");
    let proto = prototype_of(&ctor);

    assert_eq!(own_descriptor(&proto, "a").writable, Some(false));
    assert_eq!(own_descriptor(&proto, "b").writable, Some(true));
}

#[test]
fn accessor_decorators_receive_one_merged_descriptor() {
    let mut ctx = context_with_impl();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let record = seen.clone();
    ctx.set_global_function("watch", move |args| {
        let descriptor = PropertyDescriptor::from_value(&args.arg(2)).expect("descriptor");
        record
            .borrow_mut()
            .push((descriptor.get.is_some(), descriptor.set.is_some()));
        Ok(Value::Undefined)
    });

    let mut class = ClassDecl::new("Foo");
    class.members.push(member(
        "size",
        ClassMemberKind::Getter,
        "getImpl",
        vec![Decorator::new(Expr::ident("watch"))],
    ));
    class
        .members
        .push(member("size", ClassMemberKind::Setter, "setImpl", Vec::new()));
    let ctor = ctx.eval_class(&class).expect("class");

    assert_eq!(*seen.borrow(), vec![(true, true)]);
    let descriptor = own_descriptor(&prototype_of(&ctor), "size");
    assert!(descriptor.is_accessor_descriptor());
    assert_eq!(descriptor.enumerable, Some(true));
}

#[test]
fn undecorated_class_installs_default_attributes() {
    let mut ctx = context_with_impl();
    let mut class = ClassDecl::new("Plain");
    class
        .members
        .push(member("m", ClassMemberKind::Method, "impl", Vec::new()));
    class.members.push(ClassMember {
        is_static: true,
        ..ClassMember::new("count", ClassMemberKind::Field, Expr::number(3.0))
    });
    let ctor = ctx.eval_class(&class).expect("class");

    assert_eq!(own_descriptor(&prototype_of(&ctor), "m").enumerable, Some(false));
    assert_eq!(
        own_descriptor(&ctor, "count"),
        PropertyDescriptor::data(Value::Number(3.0), true, true, true)
    );
    assert!(ctx.take_traces().is_empty());
}

#[test]
fn subclass_prototype_chains_to_parent() {
    let mut ctx = context_with_impl();
    let mut base = ClassDecl::new("Base");
    base.members
        .push(member("greet", ClassMemberKind::Method, "impl", Vec::new()));
    ctx.eval_class(&base).expect("base");

    let mut derived = ClassDecl::new("Derived");
    derived.parent = Some(Expr::ident("Base"));
    let ctor = ctx.eval_class(&derived).expect("derived");

    let greet = prototype_of(&ctor).get("greet");
    assert!(greet.is_callable());
}

#[test]
fn accessor_stays_an_accessor_when_both_halves_are_cleared() {
    let mut ctx = context_with_impl();
    ctx.set_global_function("strip", |_| {
        Ok(PropertyDescriptor {
            get: Some(Value::Undefined),
            set: Some(Value::Undefined),
            ..PropertyDescriptor::default()
        }
        .to_value())
    });

    let mut class = ClassDecl::new("Foo");
    class.members.push(member(
        "x",
        ClassMemberKind::Getter,
        "getImpl",
        vec![Decorator::new(Expr::ident("strip"))],
    ));
    let ctor = ctx.eval_class(&class).expect("class");

    let descriptor = own_descriptor(&prototype_of(&ctor), "x");
    assert!(descriptor.is_accessor_descriptor());
    assert_eq!(descriptor.value, None);
    assert_eq!(descriptor.get, Some(Value::Undefined));
    assert_eq!(descriptor.set, Some(Value::Undefined));
    assert_eq!(prototype_of(&ctor).get("x"), Value::Undefined);
}

#[test]
fn returned_descriptor_fields_are_read_through_getters() {
    let mut ctx = context_with_impl();
    ctx.set_global_function("visible", |args| {
        let descriptor = JsObject::new().wrapped();
        descriptor.borrow_mut().define_own_property(
            "enumerable",
            &PropertyDescriptor::accessor(
                Some(Value::native_function(
                    "enumerable",
                    crustyjs_decorators::NativeFunctionBoxed::from_closure(|_| {
                        Ok(Value::Boolean(true))
                    }),
                )),
                None,
                true,
                true,
            ),
        )?;
        descriptor
            .borrow_mut()
            .set("value".to_string(), args.arg(2).get("value"));
        Ok(Value::Object(descriptor))
    });

    let mut class = ClassDecl::new("Foo");
    class.members.push(member(
        "m",
        ClassMemberKind::Method,
        "impl",
        vec![Decorator::new(Expr::ident("visible"))],
    ));
    let ctor = ctx.eval_class(&class).expect("class");

    assert_eq!(
        own_descriptor(&prototype_of(&ctor), "m").enumerable,
        Some(true)
    );
}
