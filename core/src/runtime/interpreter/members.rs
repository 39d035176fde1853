use crate::ast::Decorator;
use crate::decorators::{MemberDefinition, Placement};
use crate::runtime::value::JsValue;

/// One property-to-be, after getters and setters sharing a key have been
/// paired up.
#[derive(Debug, Clone)]
pub(crate) struct MemberGroup {
    pub key: String,
    pub placement: Placement,
    pub definition: MemberDefinition,
    pub decorators: Vec<Decorator>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SlotKind {
    Method,
    Getter,
    Setter,
    Field,
    Property,
}

/// Add a member in source order. A getter/setter joins an existing accessor
/// with the same key and placement, concatenating decorator lists; any other
/// repeat replaces the earlier definition but keeps its position.
pub(crate) fn push_member(
    groups: &mut Vec<MemberGroup>,
    key: &str,
    placement: Placement,
    kind: SlotKind,
    value: JsValue,
    decorators: &[Decorator],
) {
    let existing = groups
        .iter_mut()
        .find(|group| group.key == key && group.placement == placement);

    if let Some(group) = existing {
        if let MemberDefinition::Accessor { get, set } = &mut group.definition {
            match kind {
                SlotKind::Getter => {
                    *get = Some(value);
                    group.decorators.extend_from_slice(decorators);
                    return;
                }
                SlotKind::Setter => {
                    *set = Some(value);
                    group.decorators.extend_from_slice(decorators);
                    return;
                }
                _ => {}
            }
        }
        group.definition = definition_for(kind, value);
        group.decorators = decorators.to_vec();
        return;
    }

    groups.push(MemberGroup {
        key: key.to_string(),
        placement,
        definition: definition_for(kind, value),
        decorators: decorators.to_vec(),
    });
}

fn definition_for(kind: SlotKind, value: JsValue) -> MemberDefinition {
    match kind {
        SlotKind::Method => MemberDefinition::Method(value),
        SlotKind::Getter => MemberDefinition::Accessor {
            get: Some(value),
            set: None,
        },
        SlotKind::Setter => MemberDefinition::Accessor {
            get: None,
            set: Some(value),
        },
        SlotKind::Field => MemberDefinition::Field(value),
        SlotKind::Property => MemberDefinition::Property(value),
    }
}
