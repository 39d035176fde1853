use std::cell::RefCell;
use std::rc::Rc;

use crustyjs_decorators::ast::{Decorator, Expr, ObjectLiteral, ObjectMember, ObjectMemberKind};
use crustyjs_decorators::runtime::value::object::PropertyDescriptor;
use crustyjs_decorators::{Context, NativeFunctionBoxed, Value};

fn method(key: &str, decorators: Vec<Decorator>) -> ObjectMember {
    ObjectMember {
        decorators,
        ..ObjectMember::new(key, ObjectMemberKind::Method, Expr::ident("impl"))
    }
}

fn context() -> Context {
    let mut ctx = Context::new();
    ctx.set_global_function("impl", |_| Ok(Value::Number(1.0)));
    ctx
}

fn own_descriptor(object: &Value, key: &str) -> Option<PropertyDescriptor> {
    object.as_object()?.borrow().get_own_property(key)
}

/// `enumerable(flag)` returns a decorator that records the descriptor it was
/// handed and returns `{ enumerable: flag }`.
fn register_enumerable(ctx: &mut Context, seen: &Rc<RefCell<Vec<Value>>>) {
    let seen = seen.clone();
    ctx.set_global_function("enumerable", move |args| {
        let flag = args.arg(0).to_boolean();
        let seen = seen.clone();
        Ok(Value::native_function(
            "enumerableDecorator",
            NativeFunctionBoxed::from_closure(move |args| {
                seen.borrow_mut().push(args.arg(2));
                Ok(PropertyDescriptor {
                    enumerable: Some(flag),
                    ..PropertyDescriptor::default()
                }
                .to_value())
            }),
        ))
    });
}

#[test]
fn literal_member_decorator_receives_absent_marker() {
    let mut ctx = context();
    let seen = Rc::default();
    register_enumerable(&mut ctx, &seen);

    let literal = ObjectLiteral {
        members: vec![method(
            "m",
            vec![Decorator::new(Expr::call(
                Expr::ident("enumerable"),
                vec![Expr::boolean(false)],
            ))],
        )],
    };
    let object = ctx.eval_object(&literal).expect("object");

    assert_eq!(*seen.borrow(), vec![Value::Undefined]);
    let descriptor = own_descriptor(&object, "m").expect("m");
    assert_eq!(descriptor.enumerable, Some(false));
    assert_eq!(descriptor.value, Some(ctx.get_global("impl").expect("impl")));
}

#[test]
fn decorators_returning_undefined_keep_the_literal_definition() {
    let mut ctx = context();
    ctx.set_global_function("noop", |_| Ok(Value::Undefined));

    let literal = ObjectLiteral {
        members: vec![method("m", vec![Decorator::new(Expr::ident("noop"))])],
    };
    let object = ctx.eval_object(&literal).expect("object");

    let descriptor = own_descriptor(&object, "m").expect("m");
    assert_eq!(descriptor.enumerable, Some(true));
    assert_eq!(descriptor.writable, Some(true));
}

#[test]
fn decorator_target_is_the_literal_itself() {
    let mut ctx = context();
    let target = Rc::new(RefCell::new(Value::Undefined));
    let record = target.clone();
    ctx.set_global_function("capture", move |args| {
        *record.borrow_mut() = args.arg(0);
        Ok(Value::Undefined)
    });

    let literal = ObjectLiteral {
        members: vec![
            ObjectMember::new("label", ObjectMemberKind::Property, Expr::string("x")),
            method("m", vec![Decorator::new(Expr::ident("capture"))]),
        ],
    };
    let object = ctx.eval_object(&literal).expect("object");

    assert_eq!(*target.borrow(), object);
    // Siblings are already defined when the decorator runs.
    assert_eq!(target.borrow().get("label"), Value::from("x"));
}

#[test]
fn plain_properties_are_writable_enumerable_and_configurable() {
    let mut ctx = context();
    let literal = ObjectLiteral {
        members: vec![ObjectMember::new(
            "n",
            ObjectMemberKind::Property,
            Expr::number(4.0),
        )],
    };
    let object = ctx.eval_object(&literal).expect("object");

    assert_eq!(
        own_descriptor(&object, "n"),
        Some(PropertyDescriptor::data(Value::Number(4.0), true, true, true))
    );
    assert_eq!(object.to_string(), "{ n: 4 }");
}

#[test]
fn method_calls_bind_the_receiver_as_this() {
    let mut ctx = context();
    ctx.set_global_function("receiver", |args| Ok(args.this().clone()));
    let literal = ObjectLiteral {
        members: vec![ObjectMember::new(
            "me",
            ObjectMemberKind::Method,
            Expr::ident("receiver"),
        )],
    };
    let object = ctx.eval_object(&literal).expect("object");
    ctx.set_global("o", object.clone());

    let this = ctx
        .eval(&Expr::call(Expr::member(Expr::ident("o"), "me"), Vec::new()))
        .expect("call");
    assert_eq!(this, object);
}
